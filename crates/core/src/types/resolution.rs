use serde::Serialize;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// How the host should open a resolved path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OpenMode {
    /// The file exists; open it for editing
    Existing,
    /// The file does not exist; open an unsaved buffer for it
    New,
}

/// A projected path and whether it existed when it was resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedPath {
    pub absolute_path: PathBuf,
    pub exists: bool,
}

impl ResolvedPath {
    pub fn new(absolute_path: PathBuf, exists: bool) -> Self {
        Self {
            absolute_path,
            exists,
        }
    }

    pub fn open_mode(&self) -> OpenMode {
        if self.exists {
            OpenMode::Existing
        } else {
            OpenMode::New
        }
    }
}

/// Result of a resolution request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    NoMatch,
    Resolved(ResolvedPath),
}

impl Resolution {
    pub fn is_match(&self) -> bool {
        matches!(self, Resolution::Resolved(_))
    }

    pub fn resolved(&self) -> Option<&ResolvedPath> {
        match self {
            Resolution::Resolved(path) => Some(path),
            Resolution::NoMatch => None,
        }
    }

    /// Turn `NoMatch` into [`Error::NoMatchingRule`] for `relative`
    pub fn into_resolved(self, relative: &str) -> Result<ResolvedPath> {
        match self {
            Resolution::Resolved(path) => Ok(path),
            Resolution::NoMatch => Err(Error::NoMatchingRule(relative.to_string())),
        }
    }
}

/// One named projection of a file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Projection {
    pub name: String,
    #[serde(flatten)]
    pub target: ResolvedPath,
}
