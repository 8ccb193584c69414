//! Palette import command.
//!
//! Samples the most frequent opaque colours of a PNG and writes them as
//! a well-formed `.pal` palette group, ready for the build pipeline.
//! A convenience for bootstrapping palettes from reference art; the
//! pixel editors remain the canonical producers of `.pal` files.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::codec::encode_palette_group;
use crate::error::{GfxError, Result};
use crate::output::{display_path, plural, Printer};
use crate::types::{Colour, FormatKind, Palette, PaletteGroup, PALETTE_LEN};

/// Sample a PNG into a .pal palette group
#[derive(Args, Debug)]
pub struct PaletteArgs {
    /// PNG file to sample colours from
    #[arg(required = true)]
    pub file: PathBuf,

    /// Output path (default: input file name with a .pal extension)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Maximum number of palettes (8 colours each) to emit
    #[arg(long, default_value = "1")]
    pub max: usize,
}

/// Explicit counter for default record labels.
///
/// Owned by the importer and threaded through label creation; labels
/// never depend on shared process state.
struct LabelSequence {
    next: usize,
}

impl LabelSequence {
    fn new() -> Self {
        Self { next: 0 }
    }

    fn next_label(&mut self, prefix: &str) -> String {
        let label = format!("{}_{}", prefix, self.next);
        self.next += 1;
        label
    }
}

pub fn run(args: PaletteArgs, printer: &Printer) -> Result<()> {
    let path = &args.file;

    let img = image::open(path)
        .map_err(|e| GfxError::Io {
            path: path.clone(),
            message: e.to_string(),
        })?
        .to_rgba8();

    // Count pixel frequencies, skipping fully transparent pixels
    let mut counts: HashMap<[u8; 4], usize> = HashMap::new();
    for pixel in img.pixels() {
        let rgba = pixel.0;
        if rgba[3] == 0 {
            continue;
        }
        *counts.entry(rgba).or_insert(0) += 1;
    }

    // Most frequent first; ties broken by channel value so the same
    // image always samples the same palette
    let mut colours: Vec<([u8; 4], usize)> = counts.into_iter().collect();
    colours.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    colours.truncate(args.max * PALETTE_LEN);

    if colours.is_empty() {
        return Err(GfxError::Build {
            message: format!("No opaque pixels in {}", display_path(path)),
            help: None,
        });
    }

    let sampled = colours.len();
    printer.status(
        "Sampled",
        &format!(
            "{} from {}",
            plural(sampled, "colour", "colours"),
            display_path(path)
        ),
    );

    let output = args
        .output
        .unwrap_or_else(|| path.with_extension(FormatKind::Palette.extension()));
    let group = build_group(&output, &colours);

    fs::write(&output, encode_palette_group(&group)).map_err(|e| GfxError::Io {
        path: output.clone(),
        message: format!("Failed to write palette group: {}", e),
    })?;

    printer.success(
        "Created",
        &format!(
            "{} ({})",
            display_path(&output),
            plural(group.len(), "palette", "palettes")
        ),
    );

    Ok(())
}

fn build_group(output: &std::path::Path, colours: &[([u8; 4], usize)]) -> PaletteGroup {
    let name = output
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("imported");

    let mut group = PaletteGroup::new(name, FormatKind::Palette.expected_version());
    let mut labels = LabelSequence::new();

    for chunk in colours.chunks(PALETTE_LEN) {
        let mut palette = Palette::new(labels.next_label("palette"));
        for (i, (rgba, _)) in chunk.iter().enumerate() {
            palette.colours[i] = Colour::rgb(rgba[0], rgba[1], rgba[2]);
        }
        // Short final chunks leave the remaining slots black
        group.palettes.push(palette);
    }

    group
}
