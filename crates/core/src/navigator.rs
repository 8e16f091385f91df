//! Host command layer
//!
//! Runs the registered editor commands: asks the host for the active
//! document and workspace, resolves, then opens the result as an existing
//! file or as a new unsaved buffer.

use tracing::{debug, warn};

use crate::{
    error::{Error, Result},
    interfaces::{EditorHost, PathProbe},
    resolver::ProjectionResolver,
    services::FsPathProbe,
    types::{HostCommand, OpenMode, Outcome, Resolution, ResolvedPath, ViewColumn},
    utils::relativize,
};

/// Prompt shown by [`HostCommand::NavigateToTypeAndName`]
pub const TYPE_AND_NAME_PROMPT: &str = "Projection type and optional name (e.g. \"model user\")";

pub struct Navigator<H, P = FsPathProbe> {
    host: H,
    resolver: ProjectionResolver<P>,
}

impl<H: EditorHost> Navigator<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            resolver: ProjectionResolver::new(),
        }
    }
}

impl<H: EditorHost, P: PathProbe> Navigator<H, P> {
    pub fn with_resolver(host: H, resolver: ProjectionResolver<P>) -> Self {
        Self { host, resolver }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    /// Run a command. Silent failures become [`Outcome::Nothing`], failures
    /// the user must see are shown through the host and become
    /// [`Outcome::Reported`]. Only host errors are returned as `Err`.
    pub fn execute(&mut self, command: HostCommand) -> Result<Outcome> {
        debug!("Executing {}", command.id());
        match self.run(command) {
            Ok(outcome) => Ok(outcome),
            Err(e) if e.is_silent() => {
                debug!("{} did nothing: {}", command.id(), e);
                Ok(Outcome::Nothing)
            }
            Err(e) if e.is_reportable() => {
                let message = e.to_string();
                warn!("{} failed: {}", command.id(), message);
                self.host.show_error(&message);
                Ok(Outcome::Reported(message))
            }
            Err(e) => Err(e),
        }
    }

    fn run(&mut self, command: HostCommand) -> Result<Outcome> {
        let document = self.host.active_document().ok_or(Error::NoActiveDocument)?;
        let root = self
            .host
            .workspace_root(&document)
            .ok_or_else(|| Error::DocumentOutsideWorkspace {
                document: document.clone(),
            })?;
        let relative = relativize(&root, &document)?;

        let resolution = match command {
            HostCommand::NavigateToTypeAndName => {
                let Some(input) = self.host.prompt(TYPE_AND_NAME_PROMPT) else {
                    return Ok(Outcome::Nothing);
                };
                let Some((type_name, name)) = parse_type_and_name(&input) else {
                    return Ok(Outcome::Nothing);
                };
                self.resolver
                    .resolve_by_type_and_name(&root, &relative, type_name, name)?
            }
            HostCommand::JumpToAlternate
            | HostCommand::OpenAlternate
            | HostCommand::OpenAlternateSplit => self.resolver.resolve_alternate(&root, &relative)?,
        };

        match resolution {
            Resolution::Resolved(target) => self.open(target, command.column()),
            Resolution::NoMatch => Err(Error::NoMatchingRule(relative)),
        }
    }

    fn open(&mut self, target: ResolvedPath, column: ViewColumn) -> Result<Outcome> {
        let mode = target.open_mode();
        match mode {
            OpenMode::Existing => self.host.open_document(&target.absolute_path, column)?,
            OpenMode::New => self.host.open_untitled(&target.absolute_path, column)?,
        }
        Ok(Outcome::Opened {
            path: target.absolute_path,
            mode,
            column,
        })
    }
}

/// Split `"<type> [name]"`. `None` for blank input.
pub fn parse_type_and_name(input: &str) -> Option<(&str, Option<&str>)> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    match input.split_once(char::is_whitespace) {
        Some((type_name, rest)) => {
            let name = rest.trim();
            Some((type_name, (!name.is_empty()).then_some(name)))
        }
        None => Some((input, None)),
    }
}
