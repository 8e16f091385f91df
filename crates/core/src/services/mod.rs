//! Service implementations of the interface traits

pub mod fs_path_probe;

pub use fs_path_probe::FsPathProbe;
