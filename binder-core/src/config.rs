use serde::{Deserialize, Serialize};

/// Everything the collector and renderer need to know beyond paths.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub project: ProjectConfig,
    pub collect: CollectConfig,
    pub render: RenderConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct ProjectConfig {
    /// Used in the `# <name> Documentation` preamble
    pub name: String,
    /// Page `<title>`, falls back to `<name> Docs`
    pub title: Option<String>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: "FishNet".into(),
            title: None,
        }
    }
}

impl ProjectConfig {
    pub fn page_title(&self) -> String {
        match &self.title {
            Some(title) => title.clone(),
            None => format!("{} Docs", self.name),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct CollectConfig {
    /// File names that are never treated as content
    pub exclude: Vec<String>,
}

impl Default for CollectConfig {
    fn default() -> Self {
        Self {
            exclude: vec!["README.md".to_string(), "_sidebar.md".to_string()],
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct RenderConfig {
    pub highlight: bool,
    pub syntax_theme: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            highlight: true,
            syntax_theme: "base16-ocean.dark".to_string(),
        }
    }
}
