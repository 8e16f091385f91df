//! Host editor interface
//!
//! Everything the commands need from the editor that registers them.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::types::ViewColumn;

/// The editor the projection commands run inside
pub trait EditorHost {
    /// Absolute path of the document being edited, if any
    fn active_document(&self) -> Option<PathBuf>;

    /// Root of the workspace folder containing `document`
    fn workspace_root(&self, document: &Path) -> Option<PathBuf>;

    /// Open an existing file for editing
    fn open_document(&mut self, path: &Path, column: ViewColumn) -> Result<()>;

    /// Open an unsaved buffer that will be written to `path`
    fn open_untitled(&mut self, path: &Path, column: ViewColumn) -> Result<()>;

    /// Ask for one line of input; `None` when dismissed
    fn prompt(&mut self, message: &str) -> Option<String>;

    /// Show a diagnostic to the user
    fn show_error(&mut self, message: &str);
}
