use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Lexically remove `.` and `..` components. `..` never climbs above the root.
pub fn normalize(path: &Path) -> PathBuf {
    let mut components: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(components.last(), Some(Component::Normal(_))) {
                    components.pop();
                } else if !matches!(
                    components.last(),
                    Some(Component::RootDir | Component::Prefix(_))
                ) {
                    components.push(component);
                }
            }
            c => components.push(c),
        }
    }

    components.iter().collect()
}

/// Path of `document` relative to `root`, joined with `/`.
///
/// Fails with [`Error::DocumentOutsideWorkspace`] when the document does not
/// live under the root.
pub fn relativize(root: &Path, document: &Path) -> Result<String> {
    let root = normalize(root);
    let document = normalize(document);

    let relative = document
        .strip_prefix(&root)
        .map_err(|_| Error::DocumentOutsideWorkspace {
            document: document.clone(),
        })?;

    let segments: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();

    if segments.is_empty() {
        // The root itself is not a document
        return Err(Error::DocumentOutsideWorkspace { document });
    }

    Ok(segments.join("/"))
}

/// Resolve a relative path produced by a template against the workspace root
pub fn resolve_against(root: &Path, relative: &str) -> PathBuf {
    let candidate = Path::new(relative);
    if candidate.is_absolute() {
        normalize(candidate)
    } else {
        normalize(&root.join(candidate))
    }
}
