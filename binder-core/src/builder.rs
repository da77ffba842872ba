use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::collector::{CollectError, Collector, DEFAULT_COMBINED_FILE};
use crate::config::Config;
use crate::document::CombinedDocument;
use crate::markdown::{CmarkRenderer, MarkdownRenderer, PlainRenderer};
use crate::renderer::{DEFAULT_OUTPUT_FILE, PageRenderer, RenderError};

#[derive(Debug, Error)]
pub enum BuildError {
    #[error(transparent)]
    Collect(#[from] CollectError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Wires the collector and the page renderer to one source directory.
///
/// The combined document and the HTML page default to `CombinedDocs.md` and
/// `index.html` inside the source directory. Relative overrides are resolved
/// against the source directory too.
#[derive(Debug, Clone)]
pub struct DocsBuilder {
    source_dir: PathBuf,
    combined: PathBuf,
    output: PathBuf,
    config: Config,
}

impl DocsBuilder {
    pub fn new<P: AsRef<Path>>(source_dir: P) -> Self {
        Self {
            source_dir: source_dir.as_ref().to_path_buf(),
            combined: PathBuf::from(DEFAULT_COMBINED_FILE),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            config: Config::default(),
        }
    }

    pub fn combined_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.combined = path.as_ref().to_path_buf();
        self
    }

    pub fn output_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.output = path.as_ref().to_path_buf();
        self
    }

    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn combined_path(&self) -> PathBuf {
        self.source_dir.join(&self.combined)
    }

    pub fn output_path(&self) -> PathBuf {
        self.source_dir.join(&self.output)
    }

    pub fn collector(&self) -> Collector {
        Collector::new(&self.source_dir)
            .output(self.combined_path())
            .project(self.config.project.clone())
            .collect_config(self.config.collect.clone())
    }

    /// The markdown backend picked by `render.highlight`.
    pub fn markdown_renderer(&self) -> Result<Box<dyn MarkdownRenderer>, RenderError> {
        let render = &self.config.render;
        if render.highlight {
            debug!(theme = %render.syntax_theme, "highlighting code blocks");
            Ok(Box::new(CmarkRenderer::new(&render.syntax_theme)?))
        } else {
            Ok(Box::new(PlainRenderer))
        }
    }

    pub fn collect(&self) -> Result<CombinedDocument, BuildError> {
        Ok(self.collector().run()?)
    }

    pub fn render(&self) -> Result<(), BuildError> {
        self.render_with(self.markdown_renderer()?)
    }

    /// Renders with a caller supplied markdown backend.
    pub fn render_with<R: MarkdownRenderer>(&self, markdown: R) -> Result<(), BuildError> {
        let renderer = PageRenderer::new(markdown, self.config.project.page_title())?;
        renderer.render_file(&self.combined_path(), &self.output_path())?;
        Ok(())
    }

    /// Collect, then render from the freshly written document.
    pub fn build(&self) -> Result<CombinedDocument, BuildError> {
        // Fail on a bad theme before anything is written
        let markdown = self.markdown_renderer()?;
        let document = self.collect()?;
        self.render_with(markdown)?;
        Ok(document)
    }
}

/// Collects and renders `source_dir` with default file names.
pub fn build_docs(config: &Config, source_dir: &Path) -> Result<CombinedDocument, BuildError> {
    DocsBuilder::new(source_dir).config(config.clone()).build()
}
