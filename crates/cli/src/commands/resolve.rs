use anyhow::{Context, Result};
use projectionist_core::{utils::relativize, ProjectionResolver};
use std::path::Path;
use tracing::debug;

use crate::display::{format_resolution, OutputFormat};
use crate::utils::{absolute, workspace_root};

pub fn resolve_command(
    filepath: &Path,
    root: Option<&Path>,
    type_name: &str,
    name: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let document = absolute(filepath)?;
    let root = workspace_root(&document, root)?;
    let relative = relativize(&root, &document)?;
    debug!("Resolving {:?} of {} in {:?}", type_name, relative, root);

    let resolver = ProjectionResolver::new();
    let resolution = resolver
        .resolve_by_type_and_name(&root, &relative, type_name, name)
        .with_context(|| format!("Failed to resolve {type_name} for {relative}"))?;

    println!("{}", format_resolution(&resolution, format)?);
    Ok(())
}
