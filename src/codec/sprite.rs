//! `.4bpp` sprite sheet codec.
//!
//! A sheet is the version tag followed by labeled records with 32-byte
//! payloads: 8x8 pixels, two per byte, high nibble first. Bits 0-2 of a
//! nibble are the colour index, bit 3 is the collision flag.

use crate::codec::RecordReader;
use crate::error::Result;
use crate::types::{FormatKind, SpriteSheet, Tile, TILE_BYTES};

/// Decode a `.4bpp` buffer into a sprite sheet.
///
/// `name` is the file stem; it becomes the base for generated symbols.
pub fn decode_spritesheet(name: &str, data: &[u8]) -> Result<SpriteSheet> {
    let mut reader = RecordReader::new(data, FormatKind::Sprite)?;
    let mut sheet = SpriteSheet::new(name, reader.version());

    while !reader.is_done() {
        let record = reader.read_labeled_record(TILE_BYTES)?;
        let payload: &[u8; TILE_BYTES] = record
            .payload
            .try_into()
            .expect("record payload has fixed size");
        sheet.tiles.push(Tile::from_packed(record.label, payload));
    }

    Ok(sheet)
}

/// Encode a sprite sheet to the `.4bpp` byte layout.
pub fn encode_spritesheet(sheet: &SpriteSheet) -> Vec<u8> {
    let mut out = Vec::with_capacity(3 + sheet.len() * (1 + TILE_BYTES));
    out.extend_from_slice(&sheet.version.to_bytes());

    for tile in &sheet.tiles {
        debug_assert!(tile.label.len() <= u8::MAX as usize);
        out.push(tile.label.len() as u8);
        out.extend_from_slice(tile.label.as_bytes());
        out.extend_from_slice(&tile.to_packed());
    }

    out
}
