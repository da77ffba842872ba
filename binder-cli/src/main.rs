use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use tracing_subscriber::EnvFilter;

mod cmd;
mod config;

fn cli() -> Command {
    Command::new("binder")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Bind a folder of markdown files into one document and one HTML page")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("More logging (-v info, -vv debug)")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(cmd::collect::make_subcommand())
        .subcommand(cmd::render::make_subcommand())
        .subcommand(cmd::build::make_subcommand())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    // RUST_LOG wins over -v
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let matches = cli().get_matches();
    init_tracing(matches.get_count("verbose"));

    match matches.subcommand() {
        Some(("collect", args)) => cmd::collect::execute(args),
        Some(("render", args)) => cmd::render::execute(args),
        Some(("build", args)) => cmd::build::execute(args),
        _ => unreachable!("clap requires a subcommand"),
    }
}
