pub mod command;
pub mod resolution;

// Re-export commonly used types
pub use command::{HostCommand, Outcome, ViewColumn};
pub use resolution::{OpenMode, Projection, Resolution, ResolvedPath};
