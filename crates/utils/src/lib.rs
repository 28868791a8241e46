// utils crate

use std::io;
use std::path::{Path, PathBuf};

const REPORT_EXTENSIONS: &[&str] = &["md", "markdown"];

pub fn is_report_file(path: &Path) -> bool {
    // Skip editor backups and other hidden files
    let hidden = path
        .file_name()
        .map(|name| name.to_string_lossy().starts_with('.'))
        .unwrap_or(true);
    if hidden {
        return false;
    }

    path.extension()
        .map(|ext| {
            let ext = ext.to_string_lossy().to_lowercase();
            REPORT_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Report files directly inside `dir`, sorted by path so output order is stable.
pub fn report_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut reports = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry_path = entry?.path();
        if entry_path.is_file() && is_report_file(&entry_path) {
            reports.push(entry_path);
        }
    }

    reports.sort();
    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_is_report_file() {
        assert!(is_report_file(Path::new("reports/q3.md")));
        assert!(is_report_file(Path::new("Q3.MARKDOWN")));
        assert!(!is_report_file(Path::new("notes.txt")));
        assert!(!is_report_file(Path::new(".draft.md")));
        assert!(!is_report_file(Path::new("README")));
    }

    #[test]
    fn test_report_files_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.md"), "").unwrap();
        fs::write(dir.path().join("a.markdown"), "").unwrap();
        fs::write(dir.path().join("data.csv"), "").unwrap();
        fs::create_dir(dir.path().join("nested.md")).unwrap();

        let names: Vec<String> = report_files(dir.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["a.markdown", "b.md"]);
    }
}
