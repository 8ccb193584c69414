//! List command implementation.
//!
//! Decodes discovered assets and prints an inventory. Reads the models
//! through their public accessors only; nothing is generated or mutated.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::codegen::GraphicsBundle;
use crate::discovery::{load_bundle, scan, Manifest};
use crate::error::{GfxError, Result};
use crate::output::{plural, Printer};

/// List discovered assets and their contents
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Project root containing gfxgen.yaml and the asset directories
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Emit the inventory as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct Inventory {
    sprites: Vec<SheetSummary>,
    backgrounds: Vec<SheetSummary>,
    fonts: Vec<SheetSummary>,
    palettes: Vec<GroupSummary>,
    maps: Vec<MapSummary>,
}

#[derive(Serialize)]
struct SheetSummary {
    name: String,
    version: String,
    tiles: Vec<String>,
}

#[derive(Serialize)]
struct GroupSummary {
    name: String,
    version: String,
    palettes: Vec<String>,
}

#[derive(Serialize)]
struct MapSummary {
    name: String,
    version: String,
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    let manifest = Manifest::load_or_default(&args.root)?;
    let scanned = scan(&args.root, &manifest);
    let bundle = load_bundle(&scanned)?;

    if args.json {
        let inventory = inventory(&bundle);
        let text = serde_json::to_string_pretty(&inventory).map_err(|e| GfxError::Build {
            message: format!("Failed to serialize inventory: {}", e),
            help: None,
        })?;
        println!("{}", text);
        return Ok(());
    }

    print_inventory(&bundle, printer);
    Ok(())
}

fn inventory(bundle: &GraphicsBundle) -> Inventory {
    let sheet_summary = |sheets: &[crate::types::SpriteSheet]| -> Vec<SheetSummary> {
        sheets
            .iter()
            .map(|s| SheetSummary {
                name: s.name.clone(),
                version: s.version.to_string(),
                tiles: s.labels().map(str::to_string).collect(),
            })
            .collect()
    };

    Inventory {
        sprites: sheet_summary(&bundle.sprites),
        backgrounds: sheet_summary(&bundle.backgrounds),
        fonts: sheet_summary(&bundle.fonts),
        palettes: bundle
            .palettes
            .iter()
            .map(|g| GroupSummary {
                name: g.name.clone(),
                version: g.version.to_string(),
                palettes: g.labels().map(str::to_string).collect(),
            })
            .collect(),
        maps: bundle
            .maps
            .iter()
            .map(|m| MapSummary {
                name: m.name.clone(),
                version: m.version.to_string(),
            })
            .collect(),
    }
}

fn print_inventory(bundle: &GraphicsBundle, printer: &Printer) {
    for sheet in bundle
        .sprites
        .iter()
        .chain(&bundle.backgrounds)
        .chain(&bundle.fonts)
    {
        printer.info(
            "Sheet",
            &format!(
                "{} (v{}, {}): {}",
                sheet.name,
                sheet.version,
                plural(sheet.len(), "tile", "tiles"),
                sheet.labels().collect::<Vec<_>>().join(", ")
            ),
        );
    }

    for group in &bundle.palettes {
        printer.info(
            "Palettes",
            &format!(
                "{} (v{}, {}): {}",
                group.name,
                group.version,
                plural(group.len(), "palette", "palettes"),
                group.labels().collect::<Vec<_>>().join(", ")
            ),
        );
    }

    for map in &bundle.maps {
        printer.info("Map", &format!("{} (v{})", map.name, map.version));
    }

    printer.success(
        "Found",
        &plural(bundle.total(), "asset file", "asset files"),
    );
}
