//! `.pal` palette group codec.
//!
//! A group is the version tag followed by labeled records with 24-byte
//! payloads: 8 colours of literal RGB channel bytes, no packing.

use crate::codec::RecordReader;
use crate::error::Result;
use crate::types::{FormatKind, Palette, PaletteGroup, PALETTE_BYTES};

/// Decode a `.pal` buffer into a palette group.
pub fn decode_palette_group(name: &str, data: &[u8]) -> Result<PaletteGroup> {
    let mut reader = RecordReader::new(data, FormatKind::Palette)?;
    let mut group = PaletteGroup::new(name, reader.version());

    while !reader.is_done() {
        let record = reader.read_labeled_record(PALETTE_BYTES)?;
        let payload: &[u8; PALETTE_BYTES] = record
            .payload
            .try_into()
            .expect("record payload has fixed size");
        group
            .palettes
            .push(Palette::from_channels(record.label, payload));
    }

    Ok(group)
}

/// Encode a palette group to the `.pal` byte layout.
pub fn encode_palette_group(group: &PaletteGroup) -> Vec<u8> {
    let mut out = Vec::with_capacity(3 + group.len() * (1 + PALETTE_BYTES));
    out.extend_from_slice(&group.version.to_bytes());

    for palette in &group.palettes {
        debug_assert!(palette.label.len() <= u8::MAX as usize);
        out.push(palette.label.len() as u8);
        out.extend_from_slice(palette.label.as_bytes());
        out.extend_from_slice(&palette.to_channels());
    }

    out
}
