use anyhow::Result;
use projectionist_core::{utils::relativize, ProjectionResolver};
use std::path::Path;

use crate::display::{format_projections, OutputFormat};
use crate::utils::{absolute, workspace_root};

pub fn list_command(filepath: &Path, root: Option<&Path>, format: OutputFormat) -> Result<()> {
    let document = absolute(filepath)?;
    let root = workspace_root(&document, root)?;
    let relative = relativize(&root, &document)?;

    let projections = ProjectionResolver::new().projections_for(&root, &relative)?;
    let rendered = format_projections(&projections, format)?;
    if !rendered.is_empty() {
        println!("{rendered}");
    }
    Ok(())
}
