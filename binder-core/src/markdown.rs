use std::sync::LazyLock;

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd, html};
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::{SyntaxReference, SyntaxSet};
use thiserror::Error;

// Initialize syntax highlighting resources once
static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

#[derive(Debug, Error)]
pub enum MarkdownError {
    #[error("unknown syntax theme: {0}")]
    UnknownTheme(String),
    #[error("failed to highlight {lang} code block: {source}")]
    Highlight {
        lang: String,
        #[source]
        source: syntect::Error,
    },
}

/// Converts markdown text into an HTML fragment.
pub trait MarkdownRenderer {
    fn render(&self, markdown: &str) -> Result<String, MarkdownError>;
}

impl<R: MarkdownRenderer + ?Sized> MarkdownRenderer for Box<R> {
    fn render(&self, markdown: &str) -> Result<String, MarkdownError> {
        (**self).render(markdown)
    }
}

fn options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_FOOTNOTES
}

/// CommonMark with the GitHub extensions, no highlighting.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainRenderer;

impl MarkdownRenderer for PlainRenderer {
    fn render(&self, markdown: &str) -> Result<String, MarkdownError> {
        let mut out = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut out, Parser::new_ext(markdown, options()));
        Ok(out)
    }
}

/// pulldown-cmark with syntect highlighting for fenced code blocks.
pub struct CmarkRenderer {
    theme: &'static Theme,
}

impl CmarkRenderer {
    pub fn new(theme_name: &str) -> Result<Self, MarkdownError> {
        let theme = THEME_SET
            .themes
            .get(theme_name)
            .ok_or_else(|| MarkdownError::UnknownTheme(theme_name.to_string()))?;

        Ok(Self { theme })
    }

    fn highlight(&self, lang: &str, code: &str) -> Result<String, MarkdownError> {
        match find_syntax(lang) {
            Some(syntax) => highlighted_html_for_string(code, &SYNTAX_SET, syntax, self.theme)
                .map_err(|source| MarkdownError::Highlight {
                    lang: lang.to_string(),
                    source,
                }),
            None => Ok(plain_code_block(lang, code)),
        }
    }
}

impl MarkdownRenderer for CmarkRenderer {
    fn render(&self, markdown: &str) -> Result<String, MarkdownError> {
        let events: Vec<Event> = Parser::new_ext(markdown, options()).collect();
        let mut processed_events = Vec::with_capacity(events.len());
        let mut i = 0;

        while i < events.len() {
            match &events[i] {
                Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(lang))) => {
                    // Collect all text events until the end of the code block
                    let mut code = String::new();
                    i += 1;

                    while i < events.len() {
                        match &events[i] {
                            Event::End(TagEnd::CodeBlock) => break,
                            Event::Text(text) => code.push_str(text),
                            _ => {}
                        }
                        i += 1;
                    }

                    let lang = lang.split_whitespace().next().unwrap_or_default();
                    processed_events.push(Event::Html(self.highlight(lang, &code)?.into()));
                }
                event => processed_events.push(event.clone()),
            }
            i += 1;
        }

        let mut out = String::new();
        html::push_html(&mut out, processed_events.into_iter());

        Ok(out)
    }
}

fn find_syntax(lang: &str) -> Option<&'static SyntaxReference> {
    if lang.is_empty() {
        return None;
    }

    SYNTAX_SET.find_syntax_by_token(lang).or_else(|| {
        // Fallback mappings for languages the default set lacks
        match lang {
            "toml" => SYNTAX_SET.find_syntax_by_name("YAML"),
            "ts" | "typescript" => SYNTAX_SET.find_syntax_by_name("JavaScript"),
            _ => None,
        }
    })
}

fn plain_code_block(lang: &str, code: &str) -> String {
    if lang.is_empty() {
        format!("<pre><code>{}</code></pre>\n", html_escape::encode_text(code))
    } else {
        format!(
            "<pre><code class=\"language-{}\">{}</code></pre>\n",
            html_escape::encode_double_quoted_attribute(lang),
            html_escape::encode_text(code)
        )
    }
}
