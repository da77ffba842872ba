use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::markdown::{MarkdownError, MarkdownRenderer};
use crate::template::{PageContext, PageTemplate, TemplateError};

pub const DEFAULT_OUTPUT_FILE: &str = "index.html";

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("combined document not found: {} (run collect first)", path.display())]
    MissingInput { path: PathBuf },
    #[error("cannot read {}: {source}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Markdown(#[from] MarkdownError),
    #[error(transparent)]
    Template(#[from] TemplateError),
    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Turns a combined markdown document into a standalone HTML page.
pub struct PageRenderer<R> {
    markdown: R,
    template: PageTemplate,
    title: String,
}

impl<R: MarkdownRenderer> PageRenderer<R> {
    pub fn new<S: Into<String>>(markdown: R, title: S) -> Result<Self, RenderError> {
        Ok(Self {
            markdown,
            template: PageTemplate::new()?,
            title: title.into(),
        })
    }

    /// Builds the full page for a markdown string without touching the disk.
    pub fn render(&self, markdown: &str) -> Result<String, RenderError> {
        let content = self.markdown.render(markdown)?;
        let page = self.template.render(&PageContext {
            title: &self.title,
            content: &content,
        })?;

        Ok(page)
    }

    #[tracing::instrument(skip_all, fields(input = %input.display(), output = %output.display()))]
    pub fn render_file(&self, input: &Path, output: &Path) -> Result<(), RenderError> {
        let markdown = std::fs::read_to_string(input).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                RenderError::MissingInput {
                    path: input.to_path_buf(),
                }
            } else {
                RenderError::ReadInput {
                    path: input.to_path_buf(),
                    source,
                }
            }
        })?;

        let html = self.render(&markdown)?;

        std::fs::write(output, html).map_err(|source| RenderError::Write {
            path: output.to_path_buf(),
            source,
        })?;

        info!(bytes = markdown.len(), "rendered page");
        Ok(())
    }
}
