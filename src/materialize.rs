use std::fmt;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{Result, StencilError};
use crate::schematic::FilePathMap;
use crate::template::RenderedContentMap;

#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Outcome for one output key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileReport {
    /// The schematic declined this file for the current options.
    Canceled { key: String },
    /// A file is already at the target path; it was left untouched.
    Exists { relative_path: PathBuf },
    /// The file was written, or would be on a dry run.
    Created { relative_path: PathBuf, bytes: usize },
}

impl FileReport {
    pub fn label(&self) -> &'static str {
        match self {
            FileReport::Canceled { .. } => "CANCELED",
            FileReport::Exists { .. } => "EXISTS",
            FileReport::Created { .. } => "CREATED",
        }
    }

    /// Everything after the label.
    pub fn detail(&self) -> String {
        match self {
            FileReport::Canceled { key } => key.clone(),
            FileReport::Exists { relative_path } => relative_path.display().to_string(),
            FileReport::Created {
                relative_path,
                bytes,
            } => format!("{} ({bytes} bytes)", relative_path.display()),
        }
    }
}

impl fmt::Display for FileReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.label(), self.detail())
    }
}

/// Ordered per-file outcomes of one generation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub files: Vec<FileReport>,
}

impl fmt::Display for GenerationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, file) in self.files.iter().enumerate() {
            if i > 0 {
                f.write_str(LINE_ENDING)?;
            }
            write!(f, "{file}")?;
        }
        Ok(())
    }
}

/// Write each planned file that does not exist yet, in `paths` order.
///
/// Existing files are never overwritten. With `dry_run` nothing is written but
/// the report is identical to a real run.
pub fn materialize(
    paths: &FilePathMap,
    contents: &RenderedContentMap,
    project_root: &Path,
    dry_run: bool,
) -> Result<GenerationReport> {
    let mut files = Vec::with_capacity(paths.len());
    for (key, path) in paths {
        let report = match path {
            None => FileReport::Canceled { key: key.clone() },
            Some(path) => {
                let content = contents.get(key).ok_or_else(|| StencilError::TemplateNotFound {
                    reference: key.clone(),
                })?;
                materialize_file(path, content, project_root, dry_run)?
            }
        };
        debug!("{key}: {report}");
        files.push(report);
    }
    Ok(GenerationReport { files })
}

fn materialize_file(
    path: &Path,
    content: &str,
    project_root: &Path,
    dry_run: bool,
) -> Result<FileReport> {
    let relative_path = path
        .strip_prefix(project_root)
        .unwrap_or(path)
        .to_path_buf();

    if path.exists() {
        return Ok(FileReport::Exists { relative_path });
    }

    if !dry_run && !write_new_file(path, content)? {
        return Ok(FileReport::Exists { relative_path });
    }

    Ok(FileReport::Created {
        relative_path,
        bytes: content.len(),
    })
}

/// Returns `false` if the file appeared after the existence check.
fn write_new_file(path: &Path, content: &str) -> Result<bool> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| StencilError::Io {
            context: format!("creating directory {}", parent.display()),
            source: e,
        })?;
    }

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(false),
        Err(e) => {
            return Err(StencilError::Io {
                context: format!("creating {}", path.display()),
                source: e,
            })
        }
    };
    file.write_all(content.as_bytes())
        .map_err(|e| StencilError::Io {
            context: format!("writing {}", path.display()),
            source: e,
        })?;
    Ok(true)
}
