use serde::Serialize;
use tera::{Context, Tera};
use thiserror::Error;

const PAGE_TEMPLATE_NAME: &str = "page.html";

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0"/>
  <title>{{ title }}</title>
  <style>
    body {
      font-family: system-ui, sans-serif;
      padding: 2rem;
      max-width: 900px;
      margin: auto;
      line-height: 1.6;
    }
    pre {
      background: #f4f4f4;
      padding: 1rem;
      overflow-x: auto;
    }
    code {
      font-family: Consolas, monospace;
    }
    h1, h2, h3 {
      margin-top: 2rem;
    }
    hr {
      margin: 3rem 0;
    }
  </style>
</head>
<body>
{{ content | safe }}
</body>
</html>
"#;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("template error: {0}")]
    Tera(#[from] tera::Error),
}

/// Values interpolated into the page template.
#[derive(Debug, Serialize)]
pub struct PageContext<'a> {
    pub title: &'a str,
    pub content: &'a str,
}

/// The standalone HTML page wrapped around rendered markdown.
pub struct PageTemplate {
    tera: Tera,
}

impl PageTemplate {
    pub fn new() -> Result<Self, TemplateError> {
        let mut tera = Tera::default();
        tera.add_raw_template(PAGE_TEMPLATE_NAME, PAGE_TEMPLATE)?;

        Ok(Self { tera })
    }

    pub fn render(&self, page: &PageContext) -> Result<String, TemplateError> {
        let context = Context::from_serialize(page)?;
        Ok(self.tera.render(PAGE_TEMPLATE_NAME, &context)?)
    }
}
