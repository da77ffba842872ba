use anyhow::{Context, Result};
use clap::{ArgMatches, Command};

use super::{add_doc_args, add_render_args};
use crate::config::BinderConfig;

pub fn make_subcommand() -> Command {
    add_render_args(add_doc_args(Command::new("build")))
        .about("Collect, then render, in one go")
}

pub fn execute(args: &ArgMatches) -> Result<()> {
    let config = BinderConfig::load(args)?;
    let builder = config.docs_builder();

    let document = builder
        .build()
        .with_context(|| format!("failed to build docs from {}", config.build.source))?;

    println!(
        "Combined {} markdown files into {}",
        document.len(),
        builder.combined_path().display()
    );
    println!(
        "Markdown successfully embedded into {}",
        builder.output_path().display()
    );

    Ok(())
}
