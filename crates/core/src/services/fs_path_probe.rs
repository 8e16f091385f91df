//! File system existence probe

use crate::interfaces::PathProbe;
use std::path::Path;

/// Default implementation of PathProbe using std::fs
#[derive(Debug, Clone, Copy, Default)]
pub struct FsPathProbe;

impl FsPathProbe {
    pub fn new() -> Self {
        Self
    }
}

impl PathProbe for FsPathProbe {
    fn exists(&self, path: &Path) -> bool {
        match path.try_exists() {
            Ok(exists) => exists,
            Err(e) => {
                tracing::debug!("Treating {:?} as missing: {}", path, e);
                false
            }
        }
    }
}
