//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// noteblob - structured notes packed into a reminder's plain-text field
#[derive(Parser, Debug)]
#[command(name = "noteblob", version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decode notes text and show its fields
    Show(ShowArgs),

    /// Encode a JSON record into notes text
    Format(FormatArgs),

    /// Decode and re-encode notes text
    Normalize(NormalizeArgs),

    /// Merge content, a critical note, or links into notes text
    Merge(MergeArgs),

    /// Add related ids
    Link(LinkArgs),

    /// Remove related ids
    Unlink(UnlinkArgs),

    /// Set the critical annotation
    Critical(CriticalArgs),

    /// Remove the critical annotation
    Uncritical(UncriticalArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Where mutated text goes.
#[derive(Args, Debug, Clone)]
pub struct TargetArgs {
    /// Notes file to read (`-` for stdin)
    pub file: PathBuf,

    /// Write the result back to FILE instead of printing it
    #[arg(short = 'i', long)]
    pub in_place: bool,
}

/// Arguments for the `show` command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Notes file to read (stdin if omitted or `-`)
    pub file: Option<PathBuf>,

    /// Output format (defaults to the config file setting, then human)
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Arguments for the `format` command
#[derive(Parser, Debug)]
pub struct FormatArgs {
    /// JSON file holding a record (stdin if omitted or `-`)
    pub file: Option<PathBuf>,
}

/// Arguments for the `normalize` command
#[derive(Parser, Debug)]
pub struct NormalizeArgs {
    #[command(flatten)]
    pub target: TargetArgs,
}

/// Arguments for the `merge` command
#[derive(Parser, Debug)]
pub struct MergeArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Content to append
    #[arg(short, long)]
    pub content: Option<String>,

    /// Critical annotation to set
    #[arg(short = 'C', long)]
    pub critical: Option<String>,

    /// Related id to add (can be specified multiple times)
    #[arg(short, long = "link", action = ArgAction::Append)]
    pub links: Vec<String>,
}

/// Arguments for the `link` command
#[derive(Parser, Debug)]
pub struct LinkArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Related ids to add, in order
    #[arg(required = true)]
    pub ids: Vec<String>,
}

/// Arguments for the `unlink` command
#[derive(Parser, Debug)]
pub struct UnlinkArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Related ids to remove
    #[arg(required = true)]
    pub ids: Vec<String>,
}

/// Arguments for the `critical` command
#[derive(Parser, Debug)]
pub struct CriticalArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Critical annotation (a single line)
    pub value: String,
}

/// Arguments for the `uncritical` command
#[derive(Parser, Debug)]
pub struct UncriticalArgs {
    #[command(flatten)]
    pub target: TargetArgs,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
