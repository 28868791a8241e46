use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Report file not found: {0}")]
    NotFound(PathBuf),

    #[error("Cannot read report {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Report {0} is not valid UTF-8")]
    InvalidUtf8(PathBuf),

    #[error("No report files found in {0}")]
    NoReports(PathBuf),
}

/// Report text plus the location used to resolve relative links.
#[derive(Debug, Clone)]
pub struct Report {
    pub name: String,
    pub content: String,
    pub base_dir: PathBuf,
}

impl Report {
    /// Wrap in-memory text. Relative links resolve against the current directory.
    pub fn from_text(name: impl Into<String>, content: impl Into<String>) -> Self {
        Report {
            name: name.into(),
            content: content.into(),
            base_dir: PathBuf::from("."),
        }
    }
}

/// Read a report from disk.
pub fn read_report(path: &Path) -> Result<Report, ReportError> {
    if !path.exists() {
        return Err(ReportError::NotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::InvalidData {
            ReportError::InvalidUtf8(path.to_path_buf())
        } else {
            ReportError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let base_dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    Ok(Report {
        name,
        content,
        base_dir,
    })
}
