//! Record file discovery

use std::path::{Path, PathBuf};

use frete_types::{Error, Result};
use walkdir::WalkDir;

const RECORD_EXTENSIONS: [&str; 2] = ["csv", "json"];

pub fn is_record_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| RECORD_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Resolve a path to record files: the file itself, or every CSV/JSON
/// file under a directory, sorted
pub fn collect_record_files(path: &Path) -> Result<Vec<PathBuf>> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut files: Vec<PathBuf> = WalkDir::new(path)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|p| is_record_file(p))
        .collect();
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_collect_from_directory() {
        let dir = tempdir().unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        std::fs::write(dir.path().join("b.csv"), "").unwrap();
        std::fs::write(dir.path().join("a.JSON"), "").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "").unwrap();
        std::fs::write(dir.path().join("sub").join("c.csv"), "").unwrap();

        let files = collect_record_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.JSON", "b.csv", "c.csv"]);
    }

    #[test]
    fn test_single_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("fretes.txt");
        std::fs::write(&file, "").unwrap();
        assert_eq!(collect_record_files(&file).unwrap(), vec![file]);
    }

    #[test]
    fn test_missing_path() {
        let dir = tempdir().unwrap();
        assert!(collect_record_files(&dir.path().join("nope")).is_err());
    }
}
