//! Existence check interface
//!
//! Abstracts the file system so resolution can run against a fake in tests
//! or against a host that owns the file system.

use std::path::Path;

/// Trait for checking whether a resolved path exists
pub trait PathProbe: Send + Sync {
    /// `false` for both "missing" and "exists but cannot be inspected"
    fn exists(&self, path: &Path) -> bool;
}

impl<T: PathProbe + ?Sized> PathProbe for &T {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }
}
