use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;
use walkdir::WalkDir;

use crate::document::{MARKDOWN_EXTENSION, SourceFile};

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("cannot read source directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// Lists the markdown files sitting directly inside a directory.
pub struct DocScanner {
    source_dir: PathBuf,
    exclude: Vec<String>,
}

impl DocScanner {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            source_dir: path.as_ref().to_path_buf(),
            exclude: Vec::new(),
        }
    }

    pub fn exclude<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude.extend(names.into_iter().map(Into::into));
        self
    }

    /// Files come back sorted by name, byte-wise, which for UTF-8 names is
    /// code-point order.
    pub fn scan(&self) -> Result<Vec<SourceFile>, ScanError> {
        let walker = WalkDir::new(&self.source_dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|source| ScanError::ReadDir {
                path: self.source_dir.clone(),
                source,
            })?;

            let Some(name) = entry.file_name().to_str() else {
                debug!(path = %entry.path().display(), "skipping non UTF-8 file name");
                continue;
            };

            if !name.ends_with(MARKDOWN_EXTENSION) || self.is_excluded(name) {
                continue;
            }

            // Follow links for selected names only. A broken link is kept so
            // reading it fails loudly later.
            let is_file = if entry.path_is_symlink() {
                entry.path().metadata().map(|m| m.is_file()).unwrap_or(true)
            } else {
                entry.file_type().is_file()
            };
            if !is_file {
                debug!(path = %entry.path().display(), "skipping non-file entry");
                continue;
            }

            files.push(SourceFile {
                name: name.to_string(),
                path: entry.path().to_path_buf(),
            });
        }

        Ok(files)
    }

    fn is_excluded(&self, name: &str) -> bool {
        self.exclude.iter().any(|excluded| excluded == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn names(files: &[SourceFile]) -> Vec<&str> {
        files.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn test_scan_filters_and_sorts() {
        let dir = TempDir::new().unwrap();
        for name in ["b.md", "A.md", "README.md", "_sidebar.md", "notes.txt", "Z.md"] {
            fs::write(dir.path().join(name), "x").unwrap();
        }

        let files = DocScanner::new(dir.path())
            .exclude(["README.md", "_sidebar.md"])
            .scan()
            .unwrap();

        // Uppercase sorts before lowercase in code-point order
        assert_eq!(names(&files), vec!["A.md", "Z.md", "b.md"]);
    }

    #[test]
    fn test_scan_is_not_recursive() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested/Deep.md"), "x").unwrap();
        fs::write(dir.path().join("Top.md"), "x").unwrap();

        let files = DocScanner::new(dir.path()).scan().unwrap();
        assert_eq!(names(&files), vec!["Top.md"]);
    }

    #[test]
    fn test_scan_skips_directories_named_like_markdown() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("Folder.md")).unwrap();

        let files = DocScanner::new(dir.path()).scan().unwrap();
        assert!(files.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_ignores_dangling_links_to_other_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("A.md"), "x").unwrap();
        std::os::unix::fs::symlink(dir.path().join("gone"), dir.path().join("stale.txt")).unwrap();

        let files = DocScanner::new(dir.path()).scan().unwrap();
        assert_eq!(names(&files), vec!["A.md"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_follows_links_to_markdown() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("real.txt"), "x").unwrap();
        fs::create_dir(dir.path().join("folder")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("real.txt"), dir.path().join("Linked.md")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("folder"), dir.path().join("Folder.md")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("gone"), dir.path().join("Broken.md")).unwrap();

        let files = DocScanner::new(dir.path()).scan().unwrap();
        assert_eq!(names(&files), vec!["Broken.md", "Linked.md"]);
    }

    #[test]
    fn test_scan_missing_directory() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");

        let err = DocScanner::new(&missing).scan().unwrap_err();
        assert!(matches!(err, ScanError::ReadDir { ref path, .. } if path == &missing));
    }
}
