//! Glob matching and template substitution

pub mod glob;
pub mod template;

pub use glob::{GlobError, GlobPattern, Wildcard};
pub use template::Template;
