//! Linkage layer generation.
//!
//! Emits two views of the same symbol set:
//!
//! - the dynamic pair (`graphics.h` / `graphics.c`): pointer declarations
//!   plus `GRAPHICS_init()` / `GRAPHICS_reload()` bodies that resolve
//!   every symbol by name from a loaded shared library, aborting on the
//!   first unresolved symbol;
//! - the static pair (`lib/graphics.h` / `lib/graphics.c`): sized extern
//!   declarations and the array data itself, compiled either directly
//!   into the consumer or into the shared library the dynamic pair loads.
//!
//! Symbol order is category declaration order (sprites, backgrounds,
//! fonts, palettes, maps), then file order within a category.

use std::fmt::Write;

use crate::codegen::{generated_comment, map_array, palette_array, sprite_array, CSymbol};
use crate::types::{PaletteGroup, SpriteSheet, TileMap};

/// All decoded models for one generation run, grouped by category.
///
/// Sprites, backgrounds, and fonts share the `SpriteSheet` model; the
/// bundle only tracks which collection each file was discovered under.
/// The bundle is read-only input to the emitters.
#[derive(Debug, Default)]
pub struct GraphicsBundle {
    pub sprites: Vec<SpriteSheet>,
    pub backgrounds: Vec<SpriteSheet>,
    pub fonts: Vec<SpriteSheet>,
    pub palettes: Vec<PaletteGroup>,
    pub maps: Vec<TileMap>,
}

impl GraphicsBundle {
    /// Categories in declaration order with their symbols.
    fn categories(&self) -> [(&'static str, Vec<&dyn CSymbol>); 5] {
        [
            ("Sprites", symbols(&self.sprites)),
            ("Backgrounds", symbols(&self.backgrounds)),
            ("Fonts", symbols(&self.fonts)),
            ("Palettes", symbols(&self.palettes)),
            ("Maps", symbols(&self.maps)),
        ]
    }

    /// Every symbol in emission order.
    pub fn symbol_names(&self) -> Vec<String> {
        self.categories()
            .iter()
            .flat_map(|(_, syms)| syms.iter().map(|s| s.symbol()))
            .collect()
    }

    /// Total number of decoded files across all categories.
    pub fn total(&self) -> usize {
        self.sprites.len()
            + self.backgrounds.len()
            + self.fonts.len()
            + self.palettes.len()
            + self.maps.len()
    }
}

fn symbols<T: CSymbol>(items: &[T]) -> Vec<&dyn CSymbol> {
    items.iter().map(|i| i as &dyn CSymbol).collect()
}

/// Emit the consumer header `graphics.h`: init/reload declarations and
/// extern pointer declarations for every symbol.
pub fn graphics_header(bundle: &GraphicsBundle) -> String {
    let mut out = generated_comment("Generated file");
    out.push_str("#ifndef GRAPHICS_H_\n");
    out.push_str("#define GRAPHICS_H_\n");
    out.push('\n');
    out.push_str("#include <stdint.h>\n");
    out.push_str("\n\n");
    out.push_str("int GRAPHICS_init();\n");
    out.push_str("int GRAPHICS_reload();\n");
    out.push_str("\n\n");

    let categories = bundle.categories();
    for (idx, (banner, syms)) in categories.iter().enumerate() {
        out.push_str(&generated_comment(banner));
        for sym in syms {
            let _ = writeln!(out, "extern {};", sym.pointer());
        }
        if idx + 1 < categories.len() {
            out.push_str("\n\n");
        }
    }

    out.push_str("\n\n");
    out.push_str("#endif // GRAPHICS_H_");
    out
}

/// Emit the dynamic source `graphics.c`.
///
/// Every pointer starts `NULL`; `GRAPHICS_init` loads the library and
/// resolves each symbol in emission order, printing the symbol and
/// library name to stderr and returning 1 on the first failure.
pub fn graphics_source(bundle: &GraphicsBundle, library: &str) -> String {
    let mut definitions = String::new();
    let categories = bundle.categories();
    for (idx, (banner, syms)) in categories.iter().enumerate() {
        definitions.push_str(&generated_comment(banner));
        for sym in syms {
            let _ = writeln!(definitions, "{} = NULL;", sym.pointer());
        }
        if idx + 1 < categories.len() {
            definitions.push_str("\n\n");
        }
    }

    let mut resolutions = String::new();
    for (_, syms) in &categories {
        for sym in syms {
            let name = sym.symbol();
            let _ = writeln!(
                resolutions,
                "    {} = {}dlsym(libgraphics, \"{}\");",
                name,
                sym.cast(),
                name
            );
            let _ = writeln!(resolutions, "    if ({} == NULL) {{", name);
            let _ = writeln!(
                resolutions,
                "        fprintf(stderr, \"Could not find {} in %s: %s\\n\", LIBGRAPHICS_NAME, dlerror());",
                name
            );
            resolutions.push_str("        return 1;\n");
            resolutions.push_str("    }\n\n");
        }
    }

    SOURCE_TEMPLATE
        .replace("{library}", library)
        .replace("{definitions}", &definitions)
        .replace("{resolutions}", &resolutions)
}

const SOURCE_TEMPLATE: &str = r#"/**
 * Generated file
**/
#include <dlfcn.h>
#include <stdint.h>
#include <stdio.h>

#include "graphics.h"

#define LIBGRAPHICS_NAME "{library}"

static void *libgraphics = NULL;

{definitions}

int GRAPHICS_init() {
    libgraphics = dlopen(LIBGRAPHICS_NAME, RTLD_NOW);
    if (libgraphics == NULL) {
        fprintf(stderr, "Could not load %s: %s\n", LIBGRAPHICS_NAME, dlerror());
        return 1;
    }

{resolutions}
    return 0;
}

int GRAPHICS_reload() {
    if (libgraphics != NULL) {
        dlclose(libgraphics);
        libgraphics = NULL;
    }

    return GRAPHICS_init();
}
"#;

/// Emit the static header `lib/graphics.h`: sized extern declarations for
/// the array data.
pub fn library_header(bundle: &GraphicsBundle) -> String {
    let mut out = generated_comment("Generated file");
    out.push('\n');
    out.push_str("#include <stdint.h>\n");
    out.push_str("\n\n");
    for (_, syms) in &bundle.categories() {
        for sym in syms {
            let _ = writeln!(out, "extern {};", sym.definition());
        }
    }
    out
}

/// Emit the static source `lib/graphics.c`: the array data definitions.
pub fn library_source(bundle: &GraphicsBundle) -> String {
    let mut out = generated_comment("Generated file");
    out.push('\n');
    out.push_str("#include \"graphics.h\"\n");
    out.push_str("#include <stdint.h>\n");
    out.push_str("\n\n");

    let arrays: Vec<String> = bundle
        .sprites
        .iter()
        .map(sprite_array)
        .chain(bundle.backgrounds.iter().map(sprite_array))
        .chain(bundle.fonts.iter().map(sprite_array))
        .chain(bundle.palettes.iter().map(palette_array))
        .chain(bundle.maps.iter().map(map_array))
        .collect();
    out.push_str(&arrays.join("\n"));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FormatKind, FormatVersion, Palette, Tile};

    fn bundle() -> GraphicsBundle {
        let mut player = SpriteSheet::new("player", FormatVersion::new(0, 0, 1));
        player.tiles.push(Tile::new("idle"));
        player.tiles.push(Tile::new("walk"));

        let mut forest = SpriteSheet::new("forest", FormatVersion::new(0, 0, 1));
        forest.tiles.push(Tile::new("tree"));

        let mut mono = SpriteSheet::new("mono", FormatVersion::new(0, 0, 1));
        mono.tiles.push(Tile::new("glyph_a"));

        let mut world = PaletteGroup::new("world", FormatKind::Palette.expected_version());
        world.palettes.push(Palette::new("day"));

        GraphicsBundle {
            sprites: vec![player],
            backgrounds: vec![forest],
            fonts: vec![mono],
            palettes: vec![world],
            maps: vec![TileMap::new("level1", FormatKind::Map.expected_version())],
        }
    }

    #[test]
    fn test_symbol_names_category_then_file_order() {
        assert_eq!(
            bundle().symbol_names(),
            [
                "PLAYER_SPRITE",
                "FOREST_SPRITE",
                "MONO_SPRITE",
                "WORLD_PAL",
                "LEVEL1_MAP"
            ]
        );
    }

    #[test]
    fn test_graphics_header_declares_pointers() {
        let header = graphics_header(&bundle());

        assert!(header.starts_with("/**\n * Generated file\n**/\n#ifndef GRAPHICS_H_\n"));
        assert!(header.contains("int GRAPHICS_init();\n"));
        assert!(header.contains("int GRAPHICS_reload();\n"));
        assert!(header.contains("extern uint8_t (*PLAYER_SPRITE)[2][32];\n"));
        assert!(header.contains("extern uint32_t (*WORLD_PAL)[1][8];\n"));
        assert!(header.contains("extern uint8_t (*LEVEL1_MAP)[1][2][1000];\n"));
        assert!(header.ends_with("#endif // GRAPHICS_H_"));

        // Category banners in declaration order
        let positions: Vec<usize> = ["Sprites", "Backgrounds", "Fonts", "Palettes", "Maps"]
            .iter()
            .map(|banner| header.find(&format!(" * {}\n", banner)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_graphics_source_resolves_in_order() {
        let source = graphics_source(&bundle(), "libgraphics.so");

        assert!(source.contains("#define LIBGRAPHICS_NAME \"libgraphics.so\""));
        assert!(source.contains("uint8_t (*PLAYER_SPRITE)[2][32] = NULL;"));
        assert!(source.contains(
            "PLAYER_SPRITE = (uint8_t (*)[2][32])dlsym(libgraphics, \"PLAYER_SPRITE\");"
        ));
        assert!(source.contains(
            "fprintf(stderr, \"Could not find PLAYER_SPRITE in %s: %s\\n\", LIBGRAPHICS_NAME, dlerror());"
        ));

        // First failure aborts: every lookup is followed by a return 1
        // before the next lookup starts.
        let lookups = source.matches("dlsym(libgraphics,").count();
        assert_eq!(lookups, 5);
        let aborts = source.matches("        return 1;\n").count();
        // One per symbol plus the dlopen failure path
        assert_eq!(aborts, 6);

        // Resolution order matches declaration order
        let order: Vec<usize> = ["PLAYER_SPRITE", "FOREST_SPRITE", "MONO_SPRITE", "WORLD_PAL", "LEVEL1_MAP"]
            .iter()
            .map(|sym| source.find(&format!("dlsym(libgraphics, \"{}\")", sym)).unwrap())
            .collect();
        assert!(order.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_graphics_source_custom_library_name() {
        let source = graphics_source(&bundle(), "libassets.so");
        assert!(source.contains("#define LIBGRAPHICS_NAME \"libassets.so\""));
    }

    #[test]
    fn test_library_header_sized_externs() {
        let header = library_header(&bundle());
        assert!(header.contains("extern uint8_t PLAYER_SPRITE[2][32];\n"));
        assert!(header.contains("extern uint32_t WORLD_PAL[1][8];\n"));
        assert!(header.contains("extern uint8_t LEVEL1_MAP[1][2][1000];\n"));
        // The static pair carries no pointer declarations
        assert!(!header.contains("(*"));
    }

    #[test]
    fn test_static_and_dynamic_declare_same_symbols() {
        let b = bundle();
        let dynamic = graphics_header(&b);
        let library = library_header(&b);
        for name in b.symbol_names() {
            assert!(dynamic.contains(&name), "{} missing from graphics.h", name);
            assert!(library.contains(&name), "{} missing from lib header", name);
        }
    }

    #[test]
    fn test_library_source_contains_arrays() {
        let source = library_source(&bundle());
        assert!(source.contains("#include \"graphics.h\"\n"));
        assert!(source.contains("uint8_t PLAYER_SPRITE[][32] = {"));
        assert!(source.contains("uint32_t WORLD_PAL[][8] = {"));
        assert!(source.contains("uint8_t LEVEL1_MAP[][2][1000] = {"));
    }

    #[test]
    fn test_emission_deterministic() {
        let b = bundle();
        assert_eq!(graphics_header(&b), graphics_header(&b));
        assert_eq!(
            graphics_source(&b, "libgraphics.so"),
            graphics_source(&b, "libgraphics.so")
        );
        assert_eq!(library_source(&b), library_source(&b));
    }

    #[test]
    fn test_empty_bundle_emits_skeleton() {
        let b = GraphicsBundle::default();
        assert_eq!(b.total(), 0);
        let header = graphics_header(&b);
        assert!(header.contains("int GRAPHICS_init();"));
        assert!(!header.contains("extern"));
    }
}
