use anyhow::{Context, Result};
use projectionist_core::{config::CONFIG_FILE_NAME, ConfigLoader};
use std::path::{Path, PathBuf};

/// Resolve `path` against the current directory
pub fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        let cwd = std::env::current_dir().context("Failed to read current directory")?;
        Ok(cwd.join(path))
    }
}

/// The explicit `--root`, or the nearest ancestor of `from` holding a config
pub fn workspace_root(from: &Path, root: Option<&Path>) -> Result<PathBuf> {
    if let Some(root) = root {
        return absolute(root);
    }

    let from = absolute(from)?;
    ConfigLoader::find_workspace_root(&from).with_context(|| {
        format!(
            "No {} found in {} or any parent directory",
            CONFIG_FILE_NAME,
            from.display()
        )
    })
}
