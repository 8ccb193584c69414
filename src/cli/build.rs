//! Build command implementation.
//!
//! Decodes every discovered asset file and writes the generated C
//! artifacts: per-category enum headers, the dynamic linkage pair, and
//! the static library pair.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::codegen::{
    graphics_header, graphics_source, library_header, library_source, map_header, palette_header,
    sprite_header, GraphicsBundle,
};
use crate::discovery::{load_bundle, scan, Manifest, ScanResult};
use crate::error::{GfxError, Result};
use crate::output::{display_path, plural, Printer};

/// Generate C headers and linkage sources from binary assets
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Project root containing gfxgen.yaml and the asset directories
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Shared library name baked into the dynamic linkage source
    #[arg(long)]
    pub library: Option<String>,
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    let mut manifest = Manifest::load_or_default(&args.root)?;
    if let Some(library) = args.library {
        manifest.library = library;
    }

    generate(&args.root, &manifest, printer)?;
    Ok(())
}

/// Run one full generation pass. Returns the number of files written.
///
/// Also used by the watch command on every change event.
pub fn generate(root: &Path, manifest: &Manifest, printer: &Printer) -> Result<usize> {
    let scanned = scan(root, manifest);
    let bundle = load_bundle(&scanned)?;
    report(&scanned, &bundle, printer);

    let include_dir = root.join(&manifest.output.include);
    let src_dir = root.join(&manifest.output.src);
    let lib_dir = root.join(&manifest.output.lib);

    let outputs = [
        (
            include_dir.join("sprite.h"),
            sprite_header(&bundle.sprites, "sprite.h"),
        ),
        (
            include_dir.join("background.h"),
            sprite_header(&bundle.backgrounds, "background.h"),
        ),
        (
            include_dir.join("font.h"),
            sprite_header(&bundle.fonts, "font.h"),
        ),
        (
            include_dir.join("palette.h"),
            palette_header(&bundle.palettes, "palette.h"),
        ),
        (include_dir.join("map.h"), map_header("map.h")),
        (include_dir.join("graphics.h"), graphics_header(&bundle)),
        (
            src_dir.join("graphics.c"),
            graphics_source(&bundle, &manifest.library),
        ),
        (lib_dir.join("graphics.h"), library_header(&bundle)),
        (lib_dir.join("graphics.c"), library_source(&bundle)),
    ];

    for (path, text) in &outputs {
        write_file(path, text)?;
        printer.status("Writing", &display_path(path));
    }

    printer.success(
        "Generated",
        &format!(
            "{} from {}",
            plural(outputs.len(), "file", "files"),
            plural(bundle.total(), "asset", "assets")
        ),
    );

    Ok(outputs.len())
}

fn report(scan: &ScanResult, bundle: &GraphicsBundle, printer: &Printer) {
    for (path, sheet) in scan.sprites.iter().zip(&bundle.sprites) {
        printer.status(
            "Decoding",
            &format!(
                "{} (v{}, {})",
                display_path(path),
                sheet.version,
                plural(sheet.len(), "sprite", "sprites")
            ),
        );
    }
    for (path, sheet) in scan.backgrounds.iter().zip(&bundle.backgrounds) {
        printer.status(
            "Decoding",
            &format!(
                "{} (v{}, {})",
                display_path(path),
                sheet.version,
                plural(sheet.len(), "tile", "tiles")
            ),
        );
    }
    for (path, sheet) in scan.fonts.iter().zip(&bundle.fonts) {
        printer.status(
            "Decoding",
            &format!(
                "{} (v{}, {})",
                display_path(path),
                sheet.version,
                plural(sheet.len(), "character", "characters")
            ),
        );
    }
    for (path, group) in scan.palettes.iter().zip(&bundle.palettes) {
        printer.status(
            "Decoding",
            &format!(
                "{} (v{}, {})",
                display_path(path),
                group.version,
                plural(group.len(), "palette", "palettes")
            ),
        );
    }
    for (path, map) in scan.maps.iter().zip(&bundle.maps) {
        printer.status(
            "Decoding",
            &format!("{} (v{})", display_path(path), map.version),
        );
    }
}

fn write_file(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| GfxError::Io {
            path: parent.to_path_buf(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }
    fs::write(path, text).map_err(|e| GfxError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write file: {}", e),
    })
}
