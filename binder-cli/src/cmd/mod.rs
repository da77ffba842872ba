use clap::{Arg, ArgAction, Command};

pub mod build;
pub mod collect;
pub mod render;

/// Arguments shared by every subcommand. No clap defaults here, otherwise
/// they would shadow values coming from the config file and environment.
pub fn add_doc_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("source")
                .short('s')
                .long("source")
                .value_name("DIR")
                .help("Directory containing the markdown files [default: .]"),
        )
        .arg(
            Arg::new("combined")
                .long("combined")
                .value_name("FILE")
                .help("Combined markdown document, relative to the source directory [default: CombinedDocs.md]"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Generated HTML page, relative to the source directory [default: index.html]"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file [default: ./binder.toml]"),
        )
        .arg(
            Arg::new("project")
                .short('p')
                .long("project")
                .value_name("NAME")
                .help("Project name used in the document heading"),
        )
}

/// Arguments that only matter when HTML gets produced.
pub fn add_render_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("title")
                .long("title")
                .value_name("TITLE")
                .help("Page title [default: <project> Docs]"),
        )
        .arg(
            Arg::new("theme")
                .long("theme")
                .value_name("NAME")
                .help("Syntax highlighting theme"),
        )
        .arg(
            Arg::new("no-highlight")
                .long("no-highlight")
                .help("Disable syntax highlighting of code blocks")
                .action(ArgAction::SetTrue),
        )
}
