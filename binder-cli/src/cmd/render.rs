use anyhow::{Context, Result};
use clap::{ArgMatches, Command};

use super::{add_doc_args, add_render_args};
use crate::config::BinderConfig;

pub fn make_subcommand() -> Command {
    add_render_args(add_doc_args(Command::new("render")))
        .about("Render the combined document into a static HTML page")
}

pub fn execute(args: &ArgMatches) -> Result<()> {
    let config = BinderConfig::load(args)?;
    let builder = config.docs_builder();

    builder.render().with_context(|| {
        format!("failed to render {}", builder.combined_path().display())
    })?;

    println!(
        "Markdown successfully embedded into {}",
        builder.output_path().display()
    );

    Ok(())
}
