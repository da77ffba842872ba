use anyhow::Result;
use binder_core::DocsBuilder;
use binder_core::config::{CollectConfig, Config, ProjectConfig, RenderConfig};
use clap::ArgMatches;
use config::{Config as ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "./binder.toml";

/// Complete configuration that merges CLI args, env vars, config files, and defaults
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BinderConfig {
    pub build: BuildConfig,
    pub project: ProjectConfig,
    pub collect: CollectConfig,
    pub render: RenderConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BuildConfig {
    /// Directory holding the markdown files
    pub source: String,
    /// Combined markdown document, relative to the source directory
    pub combined: String,
    /// Generated HTML page, relative to the source directory
    pub output: String,
    /// Configuration file path
    pub config: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            source: ".".to_string(),
            combined: binder_core::collector::DEFAULT_COMBINED_FILE.to_string(),
            output: binder_core::renderer::DEFAULT_OUTPUT_FILE.to_string(),
            config: DEFAULT_CONFIG_FILE.to_string(),
        }
    }
}

impl BinderConfig {
    /// Load configuration with cascading precedence:
    /// 1. CLI arguments (highest priority)
    /// 2. Environment variables (BINDER_*)
    /// 3. Configuration file
    /// 4. Defaults (lowest priority)
    pub fn load(args: &ArgMatches) -> Result<Self> {
        let config_file = arg(args, "config").unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_string());

        let mut builder = ConfigBuilder::builder();

        // 1. Start with defaults
        let defaults = Self::default();
        builder = builder.add_source(ConfigBuilder::try_from(&defaults)?);

        // 2. Add configuration file if it exists
        if Path::new(&config_file).exists() {
            builder = builder.add_source(File::from(Path::new(&config_file)));
        }

        // 3. Add environment variables with BINDER_ prefix
        builder = builder.add_source(
            Environment::with_prefix("BINDER")
                .prefix_separator("_")
                .separator("__") // Use double underscore for nested keys
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("collect.exclude"),
        );

        // 4. Override with CLI arguments that were actually given
        builder = builder.set_override("build.config", config_file)?;
        for (arg_name, key) in [
            ("source", "build.source"),
            ("combined", "build.combined"),
            ("output", "build.output"),
            ("project", "project.name"),
            ("title", "project.title"),
            ("theme", "render.syntax_theme"),
        ] {
            if let Some(value) = arg(args, arg_name) {
                builder = builder.set_override(key, value)?;
            }
        }
        if flag(args, "no-highlight") {
            builder = builder.set_override("render.highlight", false)?;
        }

        let config: BinderConfig = builder.build()?.try_deserialize()?;
        debug!(?config, "loaded configuration");

        Ok(config)
    }

    /// The library side of the configuration
    pub fn docs_config(&self) -> Config {
        Config {
            project: self.project.clone(),
            collect: self.collect.clone(),
            render: self.render.clone(),
        }
    }

    pub fn docs_builder(&self) -> DocsBuilder {
        DocsBuilder::new(&self.build.source)
            .combined_file(&self.build.combined)
            .output_file(&self.build.output)
            .config(self.docs_config())
    }
}

// Subcommands may not define every argument
fn arg(args: &ArgMatches, name: &str) -> Option<String> {
    args.try_get_one::<String>(name).ok().flatten().cloned()
}

fn flag(args: &ArgMatches, name: &str) -> bool {
    args.try_get_one::<bool>(name)
        .ok()
        .flatten()
        .copied()
        .unwrap_or(false)
}
