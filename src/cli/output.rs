//! Output format types for CLI commands.

use clap::ValueEnum;
use serde::Deserialize;

/// Output format for decoded notes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable field listing (default)
    #[default]
    Human,
    /// JSON record for programmatic consumption
    Json,
    /// Re-encoded notes text
    Text,
}
