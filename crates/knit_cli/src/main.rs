//! knitwise CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: General error
//! - 2: Invalid arguments
//! - 3: Validation failure
//! - 4: Impossible shaping

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;

use commands::{Cli, Commands, Context};
use config::EngineConfig;
use knit_gauge::GaugeError;
use knit_resize::ResizeError;
use knit_shaping::ShapingError;
use knit_sleeve::SleeveError;

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const INVALID_ARGS: u8 = 2;
    pub const VALIDATION_FAILURE: u8 = 3;
    pub const IMPOSSIBLE_SHAPING: u8 = 4;
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        "knit=debug"
    } else if cli.quiet {
        "knit=error"
    } else {
        "knit=info"
    };
    let mut filter = EnvFilter::from_default_env();
    for directive in [default_level, "warn"] {
        if let Ok(directive) = directive.parse() {
            filter = filter.add_directive(directive);
        }
    }

    // Logs go to stderr so `--json` output stays machine-readable.
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let result = run(cli);

    match result {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            let exit_code = categorize_error(&e);
            eprintln!("❌ Error: {:#}", e);
            ExitCode::from(exit_code)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let current_dir = std::env::current_dir()?;
    let config = EngineConfig::load(cli.config.as_deref(), &current_dir)?;
    let ctx = Context {
        config,
        json: cli.json,
    };

    match cli.command {
        Commands::Shape(args) => commands::shape::execute(args, &ctx),
        Commands::Resize(args) => commands::resize::execute(args, &ctx),
        Commands::HammerSleeve(args) => commands::hammer_sleeve::execute(args, &ctx),
        Commands::Convert(args) => commands::convert::execute(args, &ctx),
        Commands::Templates(args) => commands::templates::execute(args, &ctx),
    }
}

/// Categorize error to determine exit code
fn categorize_error(e: &anyhow::Error) -> u8 {
    for cause in e.chain() {
        if let Some(err) = cause.downcast_ref::<ShapingError>() {
            return shaping_exit_code(err);
        }
        if let Some(err) = cause.downcast_ref::<ResizeError>() {
            return match err {
                ResizeError::Shaping(inner) => shaping_exit_code(inner),
                ResizeError::UnknownTemplate(_) | ResizeError::Validation(_) => {
                    ExitCodes::VALIDATION_FAILURE
                }
            };
        }
        if let Some(err) = cause.downcast_ref::<SleeveError>() {
            return match err {
                SleeveError::Validation(_) => ExitCodes::VALIDATION_FAILURE,
                SleeveError::UnknownComponent(_) => ExitCodes::INVALID_ARGS,
            };
        }
        if cause.downcast_ref::<GaugeError>().is_some() {
            return ExitCodes::INVALID_ARGS;
        }
    }

    ExitCodes::GENERAL_ERROR
}

fn shaping_exit_code(err: &ShapingError) -> u8 {
    match err {
        ShapingError::Validation(_) => ExitCodes::VALIDATION_FAILURE,
        ShapingError::NotEnoughRows { .. } => ExitCodes::IMPOSSIBLE_SHAPING,
    }
}
