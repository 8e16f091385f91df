pub mod path;

pub use path::{normalize, relativize, resolve_against};
