//! Seams between the resolver and the outside world
//!
//! The resolver never touches ambient host state: the file system and the
//! editor are reached only through these traits.

pub mod editor_host;
pub mod path_probe;

pub use editor_host::EditorHost;
pub use path_probe::PathProbe;
