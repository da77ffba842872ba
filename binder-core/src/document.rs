use std::path::PathBuf;

pub const MARKDOWN_EXTENSION: &str = ".md";

/// A markdown file picked up from the source directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub name: String,
    pub path: PathBuf,
}

impl SourceFile {
    pub fn title(&self) -> String {
        section_title(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub body: String,
}

impl Section {
    pub fn new(file: &SourceFile, content: &str) -> Self {
        Self {
            title: file.title(),
            // Editors on Windows like to leave a BOM behind
            body: content.trim_start_matches('\u{feff}').trim().to_string(),
        }
    }

    fn write_to(&self, out: &mut String) {
        out.push_str("\n\n---\n\n# ");
        out.push_str(&self.title);
        out.push_str("\n\n");
        out.push_str(&self.body);
        out.push('\n');
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinedDocument {
    pub project: String,
    pub sections: Vec<Section>,
}

impl CombinedDocument {
    pub fn new<S: Into<String>>(project: S) -> Self {
        Self {
            project: project.into(),
            sections: Vec::new(),
        }
    }

    pub fn push(&mut self, section: Section) {
        self.sections.push(section);
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn to_markdown(&self) -> String {
        let mut out = format!("# {} Documentation\n\n", self.project);
        for section in &self.sections {
            section.write_to(&mut out);
        }
        out
    }
}

/// Turns a file name into a heading.
///
/// The `.md` suffix is dropped and every ASCII uppercase letter gets a space in
/// front of it, so `MyFile.md` becomes `My File`. Acronyms are split letter by
/// letter (`API.md` is `A P I`).
pub fn section_title(file_name: &str) -> String {
    let stem = file_name
        .strip_suffix(MARKDOWN_EXTENSION)
        .unwrap_or(file_name);

    let mut title = String::with_capacity(stem.len() * 2);
    for c in stem.chars() {
        if c.is_ascii_uppercase() {
            title.push(' ');
        }
        title.push(c);
    }

    title.trim().to_string()
}
