//! Shape command - Even increase/decrease distribution.

use anyhow::{Context as _, Result};
use clap::Args;
use tracing::info;

use knit_gauge::Unit;
use knit_shaping::{ShapingCalculator, ShapingInput, StepKind};

use super::{print_json, print_warnings, Context};

#[derive(Args)]
pub struct ShapeArgs {
    /// Stitches on the needle before shaping
    #[arg(long)]
    start: u32,

    /// Stitches wanted after shaping
    #[arg(long)]
    target: u32,

    /// Rows available for the shaping
    #[arg(long)]
    rows: u32,

    /// Stitches changed on each shaping row
    #[arg(long, default_value_t = 2)]
    per_event: u32,

    /// Row gauge, used to report the shaped length
    #[arg(long)]
    rows_per_unit: f64,

    /// Unit of --rows-per-unit
    #[arg(long, default_value = "cm")]
    unit: Unit,

    /// Only print the summary line
    #[arg(long)]
    summary_only: bool,
}

pub fn execute(args: ShapeArgs, ctx: &Context) -> Result<()> {
    info!(
        "Shaping {} -> {} stitches over {} rows",
        args.start, args.target, args.rows
    );

    let input = ShapingInput::new(
        args.start,
        args.target,
        args.rows,
        args.per_event,
        args.rows_per_unit,
        args.unit,
    );
    let schedule = ShapingCalculator::with_limits(ctx.config.shaping)
        .calculate(&input)
        .context("Shaping calculation failed")?;

    if ctx.json {
        return print_json(&schedule);
    }

    let Some(event) = &schedule.event else {
        println!("✅ No shaping needed: already at {} stitches", args.start);
        return Ok(());
    };

    println!("✅ {}", event.simple_instruction);
    println!(
        "   {} → {} stitches over {} rows ({})",
        args.start, event.final_stitch_count, schedule.total_shaping_rows, schedule.shaping_length
    );

    if !args.summary_only {
        println!();
        for step in &event.steps {
            match step.kind {
                StepKind::Plain => println!("   {}", step.instruction),
                StepKind::Shaping => println!("   • {}", step.instruction),
            }
        }
    }

    print_warnings(&schedule.warnings);
    Ok(())
}
