//! Convert command - Lengths between units, and to stitches/rows.

use anyhow::{Context as _, Result};
use clap::Args;
use serde::Serialize;

use knit_gauge::{length_to_rows, length_to_stitches, Gauge, Length, Unit};

use super::{print_json, Context};

#[derive(Args)]
pub struct ConvertArgs {
    /// Length to convert, e.g. 50cm or 19.5in
    length: Length,

    /// Unit to convert to
    #[arg(long)]
    to: Unit,

    /// Also count stitches and rows: stitches across the swatch
    #[arg(long, requires_all = ["rows", "swatch"])]
    stitches: Option<f64>,

    /// Rows up the swatch
    #[arg(long, requires_all = ["stitches", "swatch"])]
    rows: Option<f64>,

    /// Swatch size (square), e.g. 10cm
    #[arg(long, requires_all = ["stitches", "rows"])]
    swatch: Option<Length>,
}

#[derive(Serialize)]
struct Conversion {
    from: Length,
    to: Length,
    #[serde(skip_serializing_if = "Option::is_none")]
    stitches: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rows: Option<u32>,
}

pub fn execute(args: ConvertArgs, ctx: &Context) -> Result<()> {
    let converted = args.length.to(args.to);

    let mut conversion = Conversion {
        from: args.length,
        to: converted,
        stitches: None,
        rows: None,
    };

    if let (Some(stitches), Some(rows), Some(swatch)) = (args.stitches, args.rows, args.swatch) {
        let gauge = Gauge::square(stitches, rows, swatch.value, swatch.unit)
            .context("Invalid gauge")?;
        conversion.stitches = Some(length_to_stitches(args.length, &gauge));
        conversion.rows = Some(length_to_rows(args.length, &gauge));
    }

    if ctx.json {
        return print_json(&conversion);
    }

    println!("{} = {}", conversion.from, conversion.to);
    if let Some(stitches) = conversion.stitches {
        println!("   {} stitches", stitches);
    }
    if let Some(rows) = conversion.rows {
        println!("   {} rows", rows);
    }
    Ok(())
}
