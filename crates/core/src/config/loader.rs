//! Configuration loader
//!
//! Reads `.projectionist.json` from a workspace root. Nothing is cached:
//! every call re-reads the file so edits take effect on the next command.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{json, ProjectionConfig, CONFIG_FILE_NAME};
use crate::error::{Error, Result};

/// Projection configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn config_path(root: &Path) -> PathBuf {
        root.join(CONFIG_FILE_NAME)
    }

    /// Load the rules of the workspace at `root`
    pub fn load(root: &Path) -> Result<ProjectionConfig> {
        let path = Self::config_path(root);

        let contents = match std::fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No config at {:?}", path);
                return Err(Error::ConfigurationNotFound { path });
            }
            Err(e) => {
                tracing::error!("Failed to read config file {:?}: {}", path, e);
                return Err(Error::ConfigurationMalformed {
                    path,
                    reason: e.to_string(),
                });
            }
        };

        let config = match json::parse_config(&contents, &path) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!("Failed to parse config from {:?}: {}", path, e);
                return Err(e);
            }
        };

        tracing::debug!("Loaded {} rules from {:?}", config.rules().len(), path);
        Ok(config)
    }

    /// Walk up from `from` to the nearest directory holding a config file
    pub fn find_workspace_root(from: &Path) -> Option<PathBuf> {
        let mut current = if from.is_file() {
            from.parent()?.to_path_buf()
        } else {
            from.to_path_buf()
        };

        loop {
            if Self::config_path(&current).is_file() {
                tracing::debug!("Found workspace root at {:?}", current);
                return Some(current);
            }
            if !current.pop() {
                break;
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        let json = serde_json::json!({
            "src/*.ts": { "alternate": "test/{}.test.ts" }
        });
        fs::write(root.join(CONFIG_FILE_NAME), json.to_string()).unwrap();

        let config = ConfigLoader::load(root).unwrap();
        assert_eq!(config.rules().len(), 1);
    }

    #[test]
    fn test_missing_config() {
        let temp_dir = TempDir::new().unwrap();

        let err = ConfigLoader::load(temp_dir.path()).unwrap_err();
        match err {
            Error::ConfigurationNotFound { path } => {
                assert_eq!(path, temp_dir.path().join(CONFIG_FILE_NAME))
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_reload_sees_edits() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let path = root.join(CONFIG_FILE_NAME);

        fs::write(&path, r#"{ "src/*.ts": { "alternate": "a/{}" } }"#).unwrap();
        assert_eq!(ConfigLoader::load(root).unwrap().rules().len(), 1);

        fs::write(
            &path,
            r#"{ "src/*.ts": { "alternate": "a/{}" }, "a/*": { "alternate": "src/{}.ts" } }"#,
        )
        .unwrap();
        assert_eq!(ConfigLoader::load(root).unwrap().rules().len(), 2);
    }

    #[test]
    fn test_find_workspace_root_walks_up() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let nested = root.join("src").join("deep");
        fs::create_dir_all(&nested).unwrap();
        fs::write(root.join(CONFIG_FILE_NAME), "{}").unwrap();
        let file = nested.join("foo.ts");
        fs::write(&file, "").unwrap();

        assert_eq!(ConfigLoader::find_workspace_root(&file), Some(root.to_path_buf()));
        assert_eq!(ConfigLoader::find_workspace_root(&nested), Some(root.to_path_buf()));
    }
}
