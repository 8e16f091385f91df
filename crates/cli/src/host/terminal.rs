//! Editor host backed by a terminal or an editor plugin on the other end
//! of stdout.
//!
//! Open requests are written to the output one per line; prompts are
//! answered from a preset value or from stdin.

use projectionist_core::{ConfigLoader, EditorHost, Error, Result, ViewColumn};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use crate::display::{format_action, HostAction, OutputFormat};

pub struct TerminalHost<W: Write> {
    out: W,
    format: OutputFormat,
    document: Option<PathBuf>,
    root: Option<PathBuf>,
    input: Option<String>,
}

impl<W: Write> TerminalHost<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self {
            out,
            format,
            document: None,
            root: None,
            input: None,
        }
    }

    pub fn with_document(mut self, document: PathBuf) -> Self {
        self.document = Some(document);
        self
    }

    pub fn with_root(mut self, root: Option<PathBuf>) -> Self {
        self.root = root;
        self
    }

    /// Answer the next prompt with `input` instead of reading stdin
    pub fn with_input(mut self, input: Option<String>) -> Self {
        self.input = input;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, action: HostAction<'_>) -> Result<()> {
        let line = format_action(&action, self.format).map_err(|e| Error::HostError(e.to_string()))?;
        writeln!(self.out, "{line}")?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> EditorHost for TerminalHost<W> {
    fn active_document(&self) -> Option<PathBuf> {
        self.document.clone()
    }

    fn workspace_root(&self, document: &Path) -> Option<PathBuf> {
        self.root
            .clone()
            .or_else(|| ConfigLoader::find_workspace_root(document))
    }

    fn open_document(&mut self, path: &Path, column: ViewColumn) -> Result<()> {
        self.emit(HostAction::Open { path, column })
    }

    fn open_untitled(&mut self, path: &Path, column: ViewColumn) -> Result<()> {
        self.emit(HostAction::Untitled { path, column })
    }

    fn prompt(&mut self, message: &str) -> Option<String> {
        if let Some(input) = self.input.take() {
            return Some(input);
        }

        eprint!("{message}: ");
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(e) => {
                tracing::warn!("Failed to read prompt answer: {}", e);
                None
            }
        }
    }

    fn show_error(&mut self, message: &str) {
        eprintln!("error: {message}");
    }
}
