pub mod builder;
pub mod collector;
pub mod config;
pub mod document;
pub mod markdown;
pub mod renderer;
pub mod scanner;
pub mod template;

// Re-export main types
pub use builder::{BuildError, DocsBuilder, build_docs};
pub use collector::{CollectError, Collector};
pub use document::{CombinedDocument, Section, SourceFile, section_title};
pub use markdown::{CmarkRenderer, MarkdownError, MarkdownRenderer, PlainRenderer};
pub use renderer::{PageRenderer, RenderError};
pub use scanner::{DocScanner, ScanError};
pub use template::{PageTemplate, TemplateError};
