//! CLI command definitions.
//!
//! Each subcommand wraps one calculator. Results print as text by default or
//! as JSON with `--json`.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use knit_gauge::Warning;
use serde::Serialize;

use crate::config::EngineConfig;

pub mod convert;
pub mod hammer_sleeve;
pub mod resize;
pub mod shape;
pub mod templates;

/// knitwise - gauge and shaping calculations for knitters
#[derive(Parser)]
#[command(name = "knit")]
#[command(version, about = "knitwise - gauge and shaping calculations for knitters")]
#[command(long_about = r#"
knitwise turns measurements into stitch and row counts.

COMMANDS:
  shape          → Spread increases or decreases evenly over a number of rows
  resize         → Rescale a pattern to a new gauge or size
  hammer-sleeve  → Matching sleeve cap and body cutout for a hammer sleeve
  convert        → Convert a length between cm and inches
  templates      → List the garment templates resize understands

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments
  3 - Validation failure
  4 - Impossible shaping (not enough rows)
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file (defaults to ./knit.toml when present)
    #[arg(long, global = true, env = "KNIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Calculate an even increase/decrease schedule
    Shape(shape::ShapeArgs),

    /// Resize a pattern described in a request file
    Resize(resize::ResizeArgs),

    /// Calculate hammer-sleeve stitch and row counts
    #[command(name = "hammer-sleeve")]
    HammerSleeve(hammer_sleeve::HammerSleeveArgs),

    /// Convert a length to another unit
    Convert(convert::ConvertArgs),

    /// List available templates
    Templates(templates::TemplatesArgs),
}

/// Shared state handed to every command.
pub struct Context {
    pub config: EngineConfig,
    pub json: bool,
}

pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(crate) fn print_warnings(warnings: &[Warning]) {
    if warnings.is_empty() {
        return;
    }
    println!();
    for warning in warnings {
        println!("⚠️  {}", warning);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_hammer_sleeve_arguments_parse_lengths() {
        let cli = Cli::try_parse_from([
            "knit",
            "hammer-sleeve",
            "--shoulder",
            "45cm",
            "--neckline",
            "25 cm",
            "--upper-arm",
            "12.5in",
            "--armhole-depth",
            "20cm",
            "--stitches",
            "20",
            "--rows",
            "28",
            "--component",
            "front",
            "--json",
        ])
        .unwrap();

        assert!(cli.json);
        assert!(matches!(cli.command, Commands::HammerSleeve(_)));
    }

    #[test]
    fn test_length_without_unit_is_rejected() {
        let result = Cli::try_parse_from(["knit", "convert", "50", "--to", "in"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_convert_gauge_flags_go_together() {
        let result =
            Cli::try_parse_from(["knit", "convert", "50cm", "--to", "in", "--stitches", "20"]);
        assert!(result.is_err());
    }
}
