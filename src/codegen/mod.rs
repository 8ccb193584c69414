//! C code generation from decoded asset models.
//!
//! Emitters produce text only; they assume their input models already
//! satisfy the codec invariants and perform no validation of their own.
//! Output is deterministic: the same models in the same order always
//! produce byte-identical text.

mod arrays;
mod enums;
mod linkage;

pub use arrays::{map_array, palette_array, sprite_array};
pub use enums::{map_header, palette_enum, palette_header, sprite_enum, sprite_header};
pub use linkage::{
    graphics_header, graphics_source, library_header, library_source, GraphicsBundle,
};

use crate::types::{PaletteGroup, SpriteSheet, TileMap, MAP_CELLS, PALETTE_LEN, TILE_BYTES};

/// A model that is emitted as a named C array.
///
/// The linkage generator walks every category through this one interface:
/// the same symbol name and shape back both the static array definition
/// and the dynamically resolved pointer, so the two linkage modes stay
/// interchangeable.
pub trait CSymbol {
    /// Linker-visible symbol name, e.g. `PLAYER_SPRITE`.
    fn symbol(&self) -> String;

    /// C element type of the emitted array.
    fn element_type(&self) -> &'static str;

    /// Array dimensions, e.g. `[4][32]`.
    fn dims(&self) -> String;

    /// Sized array definition: `uint8_t PLAYER_SPRITE[4][32]`.
    fn definition(&self) -> String {
        format!("{} {}{}", self.element_type(), self.symbol(), self.dims())
    }

    /// Pointer-to-array declaration used by the dynamic pair.
    fn pointer(&self) -> String {
        format!("{} (*{}){}", self.element_type(), self.symbol(), self.dims())
    }

    /// Cast applied to the `dlsym` result.
    fn cast(&self) -> String {
        format!("({} (*){})", self.element_type(), self.dims())
    }
}

impl CSymbol for SpriteSheet {
    fn symbol(&self) -> String {
        format!("{}_SPRITE", self.name.to_uppercase())
    }

    fn element_type(&self) -> &'static str {
        "uint8_t"
    }

    fn dims(&self) -> String {
        format!("[{}][{}]", self.len(), TILE_BYTES)
    }
}

impl CSymbol for PaletteGroup {
    fn symbol(&self) -> String {
        format!("{}_PAL", self.name.to_uppercase())
    }

    fn element_type(&self) -> &'static str {
        "uint32_t"
    }

    fn dims(&self) -> String {
        format!("[{}][{}]", self.len(), PALETTE_LEN)
    }
}

impl CSymbol for TileMap {
    fn symbol(&self) -> String {
        format!("{}_MAP", self.name.to_uppercase())
    }

    fn element_type(&self) -> &'static str {
        "uint8_t"
    }

    fn dims(&self) -> String {
        format!("[1][2][{}]", MAP_CELLS)
    }
}

/// The block comment that opens every generated file.
pub(crate) fn generated_comment(text: &str) -> String {
    format!("/**\n * {}\n**/\n", text)
}

/// Include guard derived from the output file name: `sprite.h` -> `SPRITE_H_`.
pub(crate) fn include_guard(file_name: &str) -> String {
    let mut guard = file_name.to_uppercase().replace('.', "_");
    guard.push('_');
    guard
}

/// Enum type stem: first character upper, rest lower (`player` -> `Player`).
pub(crate) fn type_stem(name: &str) -> String {
    let lower = name.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => lower,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FormatKind, FormatVersion, Tile};

    fn sheet(name: &str, tiles: usize) -> SpriteSheet {
        let mut sheet = SpriteSheet::new(name, FormatVersion::new(0, 0, 1));
        for i in 0..tiles {
            sheet.tiles.push(Tile::new(format!("t{}", i)));
        }
        sheet
    }

    #[test]
    fn test_sprite_symbol_strings() {
        let sheet = sheet("player", 4);
        assert_eq!(sheet.symbol(), "PLAYER_SPRITE");
        assert_eq!(sheet.definition(), "uint8_t PLAYER_SPRITE[4][32]");
        assert_eq!(sheet.pointer(), "uint8_t (*PLAYER_SPRITE)[4][32]");
        assert_eq!(sheet.cast(), "(uint8_t (*)[4][32])");
    }

    #[test]
    fn test_palette_symbol_strings() {
        let mut group = PaletteGroup::new("hud", FormatKind::Palette.expected_version());
        group.palettes.push(crate::types::Palette::new("a"));
        assert_eq!(group.symbol(), "HUD_PAL");
        assert_eq!(group.definition(), "uint32_t HUD_PAL[1][8]");
        assert_eq!(group.cast(), "(uint32_t (*)[1][8])");
    }

    #[test]
    fn test_map_symbol_strings() {
        let map = TileMap::new("level1", FormatKind::Map.expected_version());
        assert_eq!(map.symbol(), "LEVEL1_MAP");
        assert_eq!(map.definition(), "uint8_t LEVEL1_MAP[1][2][1000]");
        assert_eq!(map.pointer(), "uint8_t (*LEVEL1_MAP)[1][2][1000]");
    }

    #[test]
    fn test_include_guard() {
        assert_eq!(include_guard("sprite.h"), "SPRITE_H_");
        assert_eq!(include_guard("background.h"), "BACKGROUND_H_");
    }

    #[test]
    fn test_type_stem() {
        assert_eq!(type_stem("player"), "Player");
        assert_eq!(type_stem("PLAYER_SHIP"), "Player_ship");
        assert_eq!(type_stem(""), "");
    }
}
