use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{Result, StencilError};

/// File whose presence marks the root of a project.
pub const MANIFEST_FILE: &str = "package.json";

/// Directory under the project root that every schematic writes into.
pub const SRC_FOLDER: &str = "src";

/// Walk upward from `start` until a directory listing contains `manifest`.
///
/// A relative `start` is resolved against the current directory first. Fails
/// with [`StencilError::NoProjectRoot`] once the filesystem root has been
/// checked without a match.
pub fn locate_root(start: &Path, manifest: &str) -> Result<PathBuf> {
    let start = absolute(start)?;
    let mut current = start.clone();
    loop {
        if lists_file(&current, manifest)? {
            debug!("project root: {}", current.display());
            return Ok(current);
        }
        match current.parent() {
            Some(parent) if parent != current => current = parent.to_path_buf(),
            _ => {
                return Err(StencilError::NoProjectRoot {
                    start,
                    manifest: manifest.to_string(),
                })
            }
        }
    }
}

fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().map_err(|e| StencilError::Io {
        context: "reading current directory".to_string(),
        source: e,
    })?;
    Ok(cwd.join(path))
}

fn lists_file(dir: &Path, name: &str) -> Result<bool> {
    let entries = std::fs::read_dir(dir).map_err(|e| StencilError::Io {
        context: format!("listing {}", dir.display()),
        source: e,
    })?;
    for entry in entries {
        let entry = entry.map_err(|e| StencilError::Io {
            context: format!("listing {}", dir.display()),
            source: e,
        })?;
        if entry.file_name() == name {
            return Ok(true);
        }
    }
    Ok(false)
}
