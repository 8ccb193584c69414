//! `.map` tile map codec.
//!
//! A map file is the version tag followed by two fixed-layout planes with
//! no labels: 40x25 tile indices packed two per byte (500 bytes, row-major,
//! high nibble = even column), then the palette-index plane in the same
//! packing. Trailing bytes past the second plane are ignored, matching the
//! editor's writer which never produces them.

use crate::codec::RecordReader;
use crate::error::Result;
use crate::types::{FormatKind, TileMap, MAP_CELLS};

/// Packed bytes per plane.
const PLANE_BYTES: usize = MAP_CELLS / 2;

/// Decode a `.map` buffer into a tile map.
pub fn decode_map(name: &str, data: &[u8]) -> Result<TileMap> {
    let mut reader = RecordReader::new(data, FormatKind::Map)?;
    let mut map = TileMap::new(name, reader.version());

    unpack_plane(reader.take(PLANE_BYTES)?, &mut map.tiles);
    unpack_plane(reader.take(PLANE_BYTES)?, &mut map.palettes);

    Ok(map)
}

/// Encode a tile map to the `.map` byte layout, tile plane first.
pub fn encode_map(map: &TileMap) -> Vec<u8> {
    let mut out = Vec::with_capacity(3 + 2 * PLANE_BYTES);
    out.extend_from_slice(&map.version.to_bytes());
    pack_plane(&map.tiles, &mut out);
    pack_plane(&map.palettes, &mut out);
    out
}

fn unpack_plane(packed: &[u8], cells: &mut [u8]) {
    for (i, &byte) in packed.iter().enumerate() {
        cells[i * 2] = byte >> 4;
        cells[i * 2 + 1] = byte & 0x0F;
    }
}

fn pack_plane(cells: &[u8], out: &mut Vec<u8>) {
    for pair in cells.chunks_exact(2) {
        out.push((pair[0] & 0x0F) << 4 | (pair[1] & 0x0F));
    }
}
