//! Hammer-sleeve command - Sleeve cap and body cutout counts.

use anyhow::{Context as _, Result};
use clap::Args;
use tracing::info;

use knit_gauge::{Gauge, Length};
use knit_sleeve::{HammerComponent, HammerSleeveCalculator, HammerSleeveInput};

use super::{print_json, print_warnings, Context};

#[derive(Args)]
pub struct HammerSleeveArgs {
    /// Total shoulder width, e.g. 45cm
    #[arg(long)]
    shoulder: Length,

    /// Neckline width, e.g. 25cm
    #[arg(long)]
    neckline: Length,

    /// Upper arm width, e.g. 32cm
    #[arg(long)]
    upper_arm: Length,

    /// Armhole depth, e.g. 20cm
    #[arg(long)]
    armhole_depth: Length,

    /// Stitches across the swatch
    #[arg(long)]
    stitches: f64,

    /// Rows up the swatch
    #[arg(long)]
    rows: f64,

    /// Swatch size (square), e.g. 10cm
    #[arg(long, default_value = "10cm")]
    swatch: Length,

    /// Garment piece to print directions for: front, back or sleeve
    #[arg(long, default_value = "sleeve")]
    component: HammerComponent,
}

pub fn execute(args: HammerSleeveArgs, ctx: &Context) -> Result<()> {
    let gauge = Gauge::square(args.stitches, args.rows, args.swatch.value, args.swatch.unit)
        .context("Invalid gauge")?;
    info!("Hammer sleeve at {}", gauge);

    let input = HammerSleeveInput::new(
        args.shoulder,
        args.upper_arm,
        args.armhole_depth,
        args.neckline,
        gauge,
    )
    .with_component(args.component);

    let result = HammerSleeveCalculator::with_limits(ctx.config.sleeve)
        .calculate(&input)
        .context("Hammer sleeve calculation failed")?;

    if ctx.json {
        return print_json(&result);
    }

    let ext = &result.sleeve_cap_extension;
    let vertical = &result.sleeve_cap_vertical_part;
    let body = &result.body_panel_shaping;

    println!("✅ Hammer sleeve ({})", result.component);
    println!(
        "   Sleeve cap extension:   {} sts × {} rows",
        ext.width_stitches, ext.length_rows
    );
    println!(
        "   Sleeve cap vertical:    {} sts × {} rows",
        vertical.width_stitches, vertical.height_rows
    );
    println!(
        "   Body panel:             strap {} sts, cutout {} sts × {} rows, chest {} sts",
        body.shoulder_strap_width,
        body.armhole_cutout_width,
        body.armhole_depth_rows,
        body.total_body_width_at_chest
    );
    println!(
        "   Achieved:               shoulder {}, upper arm {}, armhole {}",
        result.achieved.shoulder_width,
        result.achieved.upper_arm_width,
        result.achieved.armhole_depth
    );

    println!();
    for line in result.instructions() {
        println!("   • {}", line);
    }

    print_warnings(&result.warnings);
    Ok(())
}
