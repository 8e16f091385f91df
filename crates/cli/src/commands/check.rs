use anyhow::{Context, Result};
use projectionist_core::ConfigLoader;
use std::path::Path;

use crate::display::{format_rules, OutputFormat};
use crate::utils::workspace_root;

pub fn check_command(root: Option<&Path>, format: OutputFormat) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let root = workspace_root(&cwd, root)?;

    let config = ConfigLoader::load(&root)?;
    println!("{}", format_rules(&config, format)?);
    Ok(())
}
