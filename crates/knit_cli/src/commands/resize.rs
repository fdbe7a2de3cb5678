//! Resize command - Rescale a pattern to a new gauge or size.

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Args;
use tracing::info;

use knit_resize::{PatternResizer, ResizeOutputs, ResizeRequest};

use super::{print_json, print_warnings, Context};
use crate::config::load_file;

#[derive(Args)]
pub struct ResizeArgs {
    /// Request file (.yaml, .yml, .json or .toml)
    #[arg(short, long)]
    request: PathBuf,

    /// Override the template named in the request
    #[arg(short, long)]
    template: Option<String>,
}

pub fn execute(args: ResizeArgs, ctx: &Context) -> Result<()> {
    let mut request: ResizeRequest = load_file(&args.request)
        .with_context(|| format!("Failed to read resize request {:?}", args.request))?;
    if let Some(template) = args.template {
        request.template = template;
    }
    info!("Resizing template '{}'", request.template);

    let resizer = PatternResizer::new()
        .with_tolerances(ctx.config.resize)
        .with_shaping_limits(ctx.config.shaping);
    let result = resizer.resize(&request).context("Resize failed")?;

    if ctx.json {
        return print_json(&result);
    }

    println!("✅ {} ({})", result.template, result.family);
    for (name, value) in result.named_outputs() {
        println!("   {:<24} {}", name.replace('_', " "), value);
    }

    if let ResizeOutputs::Tapered { shaping, .. } = &result.outputs {
        if let Some(event) = &shaping.event {
            println!();
            for step in event.shaping_steps() {
                println!("   • {}", step.instruction);
            }
        }
    }

    print_warnings(&result.warnings);
    Ok(())
}
