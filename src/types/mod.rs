//! Decoded asset models.
//!
//! Each model is self-contained: the codecs build these from a byte buffer
//! and the buffer can be dropped afterwards. Code generation only reads.

mod colour;
mod map;
mod palette;
mod sprite;
mod version;

pub use colour::Colour;
pub use map::TileMap;
pub use palette::{Palette, PaletteGroup, PALETTE_BYTES, PALETTE_LEN};
pub use sprite::{Pixel, SpriteSheet, Tile, TILE_BYTES, TILE_PX};
pub use version::{FormatKind, FormatVersion};

/// Tile map width in tiles.
pub const MAP_W: usize = 40;

/// Tile map height in tiles.
pub const MAP_H: usize = 25;

/// Cells per map plane.
pub const MAP_CELLS: usize = MAP_W * MAP_H;
