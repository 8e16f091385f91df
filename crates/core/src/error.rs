use std::io;
use std::path::PathBuf;

/// Errors that can occur while resolving projections
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("No projection configuration found at {}", .path.display())]
    ConfigurationNotFound { path: PathBuf },

    #[error("Malformed projection configuration {}: {reason}", .path.display())]
    ConfigurationMalformed { path: PathBuf, reason: String },

    #[error(
        "Template {template:?} for \"{key}\" in \"{pattern}\" must contain exactly one placeholder, found {found}"
    )]
    TemplateMalformed {
        pattern: String,
        key: String,
        template: String,
        found: usize,
    },

    #[error("{} is not inside the workspace", .document.display())]
    DocumentOutsideWorkspace { document: PathBuf },

    #[error("No projection rule matches {0}")]
    NoMatchingRule(String),

    #[error("No active document")]
    NoActiveDocument,

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Host error: {0}")]
    HostError(String),
}

impl Error {
    /// Errors the user never sees; the command just does nothing.
    pub fn is_silent(&self) -> bool {
        matches!(self, Error::NoMatchingRule(_) | Error::NoActiveDocument)
    }

    /// Errors that end a command with a visible diagnostic.
    pub fn is_reportable(&self) -> bool {
        matches!(
            self,
            Error::ConfigurationNotFound { .. }
                | Error::ConfigurationMalformed { .. }
                | Error::TemplateMalformed { .. }
                | Error::DocumentOutsideWorkspace { .. }
        )
    }
}

/// Result type alias for projectionist operations
pub type Result<T> = std::result::Result<T, Error>;
