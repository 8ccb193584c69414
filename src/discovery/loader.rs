//! Loads and decodes scanned asset files into a graphics bundle.
//!
//! Existence of every input is checked up front, before any file is
//! parsed; a dangling path fails the run with `MissingFile` rather than
//! surfacing halfway through a batch. Decoding then proceeds file by
//! file in scan order, and the first malformed file aborts the load.

use std::path::Path;

use crate::codec::{decode_map, decode_palette_group, decode_spritesheet};
use crate::codegen::GraphicsBundle;
use crate::error::{GfxError, Result};

use super::scanner::ScanResult;

/// Decode every scanned file into a bundle, in category then file order.
pub fn load_bundle(scan: &ScanResult) -> Result<GraphicsBundle> {
    for path in scan.all_files() {
        if !path.is_file() {
            return Err(GfxError::MissingFile { path: path.clone() });
        }
    }

    let mut bundle = GraphicsBundle::default();

    for path in &scan.sprites {
        let (name, data) = read_asset(path)?;
        bundle.sprites.push(decode_spritesheet(&name, &data)?);
    }
    for path in &scan.backgrounds {
        let (name, data) = read_asset(path)?;
        bundle.backgrounds.push(decode_spritesheet(&name, &data)?);
    }
    for path in &scan.fonts {
        let (name, data) = read_asset(path)?;
        bundle.fonts.push(decode_spritesheet(&name, &data)?);
    }
    for path in &scan.palettes {
        let (name, data) = read_asset(path)?;
        bundle.palettes.push(decode_palette_group(&name, &data)?);
    }
    for path in &scan.maps {
        let (name, data) = read_asset(path)?;
        bundle.maps.push(decode_map(&name, &data)?);
    }

    Ok(bundle)
}

/// Read a file and derive its asset name from the file stem.
pub fn read_asset(path: &Path) -> Result<(String, Vec<u8>)> {
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| GfxError::Io {
            path: path.to_path_buf(),
            message: "File name is not valid UTF-8".to_string(),
        })?
        .to_string();

    let data = std::fs::read(path).map_err(|e| GfxError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read file: {}", e),
    })?;

    Ok((name, data))
}
