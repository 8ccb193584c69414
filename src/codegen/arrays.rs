//! C array literal emission.
//!
//! Array text reproduces the payload bytes in each model's declared
//! shape. Sprite and map bytes are uppercase `0x%02X`; palette entries
//! are widened to lowercase `0xffrrggbb` words with a fixed opaque alpha.

use std::fmt::Write;

use crate::codegen::CSymbol;
use crate::types::{PaletteGroup, SpriteSheet, TileMap, TILE_BYTES, TILE_PX};

/// Emit the packed tile data of a sheet: `uint8_t NAME_SPRITE[][32]`.
///
/// Each tile is a brace block of its 32 packed bytes, four per line (one
/// pixel row). Consumers unpack colour index and collision at runtime.
pub fn sprite_array(sheet: &SpriteSheet) -> String {
    let mut out = format!(
        "{} {}[][{}] = {{\n",
        sheet.element_type(),
        sheet.symbol(),
        TILE_BYTES
    );
    for tile in &sheet.tiles {
        out.push_str("    {\n");
        for row in tile.to_packed().chunks_exact(TILE_PX / 2) {
            out.push_str("    ");
            out.push_str(&hex_row(row));
            out.push_str(",\n");
        }
        out.push_str("    },\n");
    }
    out.push_str("};\n");
    out
}

/// Emit the colour data of a group: `uint32_t NAME_PAL[][8]`, one
/// `0xffrrggbb` word per line.
pub fn palette_array(group: &PaletteGroup) -> String {
    let mut out = format!("{} {}[][8] = {{\n", group.element_type(), group.symbol());
    for palette in &group.palettes {
        out.push_str("    {\n");
        for colour in &palette.colours {
            let _ = writeln!(out, "        0x{:08x},", colour.to_argb());
        }
        out.push_str("    },\n");
    }
    out.push_str("};\n");
    out
}

/// Emit the two planes of a map: `uint8_t NAME_MAP[][2][1000]`, plane 0 =
/// tile indices, plane 1 = palette indices, each flattened row-major.
pub fn map_array(map: &TileMap) -> String {
    let mut out = format!(
        "{} {}[][2][{}] = {{\n",
        map.element_type(),
        map.symbol(),
        map.tiles.len()
    );
    out.push_str("    {\n");
    for plane in [&map.tiles, &map.palettes] {
        out.push_str("        {\n");
        for row in plane.chunks(8) {
            out.push_str("            ");
            out.push_str(&hex_row(row));
            out.push_str(",\n");
        }
        out.push_str("        },\n");
    }
    out.push_str("    },\n");
    out.push_str("};\n");
    out
}

fn hex_row(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("0x{:02X}", b))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Colour, FormatKind, FormatVersion, Palette, Pixel, Tile, MAP_CELLS};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sprite_array_zero_tile() {
        let mut sheet = SpriteSheet::new("player", FormatVersion::new(0, 0, 1));
        sheet.tiles.push(Tile::new("a"));

        let text = sprite_array(&sheet);
        assert!(text.starts_with("uint8_t PLAYER_SPRITE[][32] = {\n"));
        assert!(text.ends_with("};\n"));
        // 8 pixel rows of 4 zero bytes
        assert_eq!(
            text.matches("    0x00, 0x00, 0x00, 0x00,\n").count(),
            TILE_PX
        );
    }

    #[test]
    fn test_sprite_array_packs_nibbles() {
        let mut sheet = SpriteSheet::new("s", FormatVersion::new(0, 0, 1));
        let mut tile = Tile::new("a");
        tile.pixels[0][0] = Pixel::new(1, true); // 0b1001
        tile.pixels[0][1] = Pixel::new(7, false); // 0b0111
        sheet.tiles.push(tile);

        let text = sprite_array(&sheet);
        assert!(text.contains("0x97, 0x00, 0x00, 0x00,"));
    }

    #[test]
    fn test_palette_array_widens_to_argb() {
        let mut group = PaletteGroup::new("hud", FormatKind::Palette.expected_version());
        let mut palette = Palette::new("r");
        palette.colours = [Colour::rgb(255, 0, 0); 8];
        group.palettes.push(palette);

        let text = palette_array(&group);
        assert!(text.starts_with("uint32_t HUD_PAL[][8] = {\n"));
        assert_eq!(text.matches("        0xffff0000,\n").count(), 8);
    }

    #[test]
    fn test_map_array_shape_and_planes() {
        let mut map = TileMap::new("level1", FormatKind::Map.expected_version());
        map.tiles[0] = 0xF;
        map.palettes[0] = 0x3;

        let text = map_array(&map);
        assert!(text.starts_with("uint8_t LEVEL1_MAP[][2][1000] = {\n"));
        // Two plane blocks
        assert_eq!(text.matches("        {\n").count(), 2);
        // 1000 cells / 8 per line, per plane
        assert_eq!(text.matches("            ").count(), 2 * MAP_CELLS / 8);
        // Tile plane first
        let tiles_at = text.find("0x0F").unwrap();
        let pal_at = text.find("0x03").unwrap();
        assert!(tiles_at < pal_at);
    }

    #[test]
    fn test_arrays_deterministic() {
        let mut sheet = SpriteSheet::new("p", FormatVersion::new(0, 0, 1));
        sheet.tiles.push(Tile::new("a"));
        assert_eq!(sprite_array(&sheet), sprite_array(&sheet));
    }
}
