//! Templates command - List resizable templates.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use knit_resize::{ShapeFamily, TemplateCatalog};

use super::{print_json, Context};

#[derive(Args)]
pub struct TemplatesArgs {
    /// Only list templates of this family: rectangular, tapered or cylindrical
    #[arg(short, long)]
    family: Option<String>,
}

#[derive(Serialize)]
struct TemplateEntry<'a> {
    id: &'a str,
    name: &'a str,
    family: ShapeFamily,
    target_fields: &'static [&'static str],
    original_fields: &'static [&'static str],
}

pub fn execute(args: TemplatesArgs, ctx: &Context) -> Result<()> {
    let catalog = TemplateCatalog::builtin();
    let family = args.family.as_deref().map(str::to_lowercase);

    let entries: Vec<_> = catalog
        .list()
        .filter(|t| family.as_deref().map_or(true, |f| t.family.as_str() == f))
        .map(|t| TemplateEntry {
            id: &t.id,
            name: &t.name,
            family: t.family,
            target_fields: t.family.target_fields(),
            original_fields: t.family.original_fields(),
        })
        .collect();

    if ctx.json {
        return print_json(&entries);
    }

    if entries.is_empty() {
        println!("⚠️  No templates found");
        return Ok(());
    }

    println!("📋 {} template(s)\n", entries.len());
    for entry in &entries {
        println!(
            "   {:<16} {:<12} {}",
            entry.id,
            entry.family.as_str(),
            entry.target_fields.join(", ")
        );
    }
    Ok(())
}
