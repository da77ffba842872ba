use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::config::{CollectConfig, ProjectConfig};
use crate::document::{CombinedDocument, Section};
use crate::scanner::{DocScanner, ScanError};

pub const DEFAULT_COMBINED_FILE: &str = "CombinedDocs.md";

#[derive(Debug, Error)]
pub enum CollectError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error("cannot read {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Concatenates a directory of markdown files into one document.
pub struct Collector {
    source_dir: PathBuf,
    output: PathBuf,
    project: ProjectConfig,
    collect: CollectConfig,
}

impl Collector {
    pub fn new<P: AsRef<Path>>(source_dir: P) -> Self {
        let source_dir = source_dir.as_ref().to_path_buf();
        let output = source_dir.join(DEFAULT_COMBINED_FILE);

        Self {
            source_dir,
            output,
            project: ProjectConfig::default(),
            collect: CollectConfig::default(),
        }
    }

    pub fn output<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.output = path.as_ref().to_path_buf();
        self
    }

    pub fn project(mut self, project: ProjectConfig) -> Self {
        self.project = project;
        self
    }

    pub fn collect_config(mut self, collect: CollectConfig) -> Self {
        self.collect = collect;
        self
    }

    pub fn output_path(&self) -> &Path {
        &self.output
    }

    /// Reads every qualifying file and assembles the document in memory.
    /// Nothing touches the disk here, so a failure leaves old output alone.
    pub fn collect(&self) -> Result<CombinedDocument, CollectError> {
        let mut scanner = DocScanner::new(&self.source_dir).exclude(self.collect.exclude.clone());

        // Never feed our own output back in
        if self.output_in_source_dir() {
            if let Some(name) = self.output.file_name().and_then(|n| n.to_str()) {
                scanner = scanner.exclude([name]);
            }
        }

        let mut document = CombinedDocument::new(self.project.name.clone());
        for file in scanner.scan()? {
            let content =
                std::fs::read_to_string(&file.path).map_err(|source| CollectError::ReadFile {
                    path: file.path.clone(),
                    source,
                })?;
            debug!(file = %file.name, bytes = content.len(), "collected");
            document.push(Section::new(&file, &content));
        }

        Ok(document)
    }

    fn output_in_source_dir(&self) -> bool {
        let parent = match self.output.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        match (parent.canonicalize(), self.source_dir.canonicalize()) {
            (Ok(parent), Ok(source_dir)) => parent == source_dir,
            _ => parent == self.source_dir,
        }
    }

    /// Collects and writes the combined document, returning it.
    #[tracing::instrument(skip(self), fields(source = %self.source_dir.display()))]
    pub fn run(&self) -> Result<CombinedDocument, CollectError> {
        let document = self.collect()?;

        std::fs::write(&self.output, document.to_markdown()).map_err(|source| {
            CollectError::Write {
                path: self.output.clone(),
                source,
            }
        })?;

        info!(
            files = document.len(),
            output = %self.output.display(),
            "combined markdown files"
        );

        Ok(document)
    }
}
