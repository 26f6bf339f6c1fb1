//! noteblob - structured notes packed into a reminder's plain-text field

pub mod cli;
pub mod codec;
pub mod domain;
pub mod infra;
pub mod logging;

use anyhow::Result;
use clap::Parser;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_completions, handle_critical, handle_format, handle_link, handle_merge,
        handle_normalize, handle_show, handle_uncritical, handle_unlink,
    },
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);
    let config = Config::load()?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Command::Show(args) => handle_show(args, &config, &mut out),
        Command::Format(args) => handle_format(args, &mut out),
        Command::Normalize(args) => handle_normalize(args, &config, &mut out),
        Command::Merge(args) => handle_merge(args, &config, &mut out),
        Command::Link(args) => handle_link(args, &config, &mut out),
        Command::Unlink(args) => handle_unlink(args, &config, &mut out),
        Command::Critical(args) => handle_critical(args, &config, &mut out),
        Command::Uncritical(args) => handle_uncritical(args, &config, &mut out),
        Command::Completions(args) => handle_completions(args, &mut out),
    }
}
