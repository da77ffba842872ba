use anyhow::{Context, Result};
use clap::{ArgMatches, Command};

use super::add_doc_args;
use crate::config::BinderConfig;

pub fn make_subcommand() -> Command {
    add_doc_args(Command::new("collect"))
        .about("Combine the markdown files of a directory into one document")
}

pub fn execute(args: &ArgMatches) -> Result<()> {
    let config = BinderConfig::load(args)?;
    let builder = config.docs_builder();

    let document = builder
        .collect()
        .with_context(|| format!("failed to collect {}", config.build.source))?;

    println!(
        "Combined {} markdown files into {}",
        document.len(),
        builder.combined_path().display()
    );

    Ok(())
}
