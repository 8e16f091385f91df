pub mod workspace;

pub use workspace::{absolute, workspace_root};
