use anyhow::Result;
use projectionist_core::{HostCommand, Navigator, Outcome};
use std::path::Path;
use tracing::debug;

use crate::display::OutputFormat;
use crate::host::TerminalHost;
use crate::utils::absolute;

/// Run one of the editor commands for the document at `filepath`
pub fn host_command(
    command: HostCommand,
    filepath: &Path,
    root: Option<&Path>,
    input: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let document = absolute(filepath)?;
    let root = root.map(absolute).transpose()?;
    debug!("{} for {:?} (root: {:?})", command.id(), document, root);

    let host = TerminalHost::new(std::io::stdout().lock(), format)
        .with_document(document)
        .with_root(root)
        .with_input(input);

    let mut navigator = Navigator::new(host);
    match navigator.execute(command)? {
        // Already shown on stderr by the host
        Outcome::Reported(_) => std::process::exit(1),
        outcome => {
            debug!("{} finished: {:?}", command.id(), outcome);
            Ok(())
        }
    }
}
