//! gfxgen - binary game-asset codec and C code generator
//!
//! A library and CLI for decoding hand-authored binary asset files
//! (`.4bpp` sprite sheets, `.pal` palette groups, `.map` tile maps) and
//! generating the C enums, data arrays, and linkage sources a game links
//! against - either statically or through runtime-resolved symbols for
//! asset hot-reload.

pub mod cli;
pub mod codec;
pub mod codegen;
pub mod discovery;
pub mod error;
pub mod output;
pub mod types;

pub use codec::{
    decode_map, decode_palette_group, decode_spritesheet, encode_map, encode_palette_group,
    encode_spritesheet, LabeledRecord, RecordReader,
};
pub use codegen::{
    graphics_header, graphics_source, library_header, library_source, map_array, map_header,
    palette_array, palette_header, sprite_array, sprite_header, CSymbol, GraphicsBundle,
};
pub use discovery::{load_bundle, scan, Manifest, ScanResult, MANIFEST_FILENAME};
pub use error::{GfxError, Result};
pub use types::{
    Colour, FormatKind, FormatVersion, Palette, PaletteGroup, Pixel, SpriteSheet, Tile, TileMap,
    MAP_CELLS, MAP_H, MAP_W, PALETTE_BYTES, PALETTE_LEN, TILE_BYTES, TILE_PX,
};
