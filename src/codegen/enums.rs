//! Enum header emission.
//!
//! Every sheet and palette group becomes a C `typedef enum` whose
//! constants index the generated arrays. Constant order is file record
//! order and the trailing sentinel equals the record count. Map headers
//! carry no enum or symbol body, only the include guard; the map format
//! defines no symbolic names and the asymmetry is part of the format.

use std::fmt::Write;

use crate::codegen::{generated_comment, include_guard, type_stem};
use crate::types::{PaletteGroup, SpriteSheet};

/// Emit the enum for one sprite sheet.
pub fn sprite_enum(sheet: &SpriteSheet) -> String {
    emit_enum(
        &sheet.name,
        sheet.labels(),
        "Spr_e",
        &format!("NUM_{}_SPRITES", sheet.name.to_uppercase()),
    )
}

/// Emit the enum for one palette group.
pub fn palette_enum(group: &PaletteGroup) -> String {
    emit_enum(
        &group.name,
        group.labels(),
        "Pal_e",
        &format!("NUM_{}_PALETTES", group.name.to_uppercase()),
    )
}

fn emit_enum<'a>(
    name: &str,
    labels: impl Iterator<Item = &'a str>,
    type_suffix: &str,
    sentinel: &str,
) -> String {
    let mut out = String::from("typedef enum {\n");
    for (idx, label) in labels.enumerate() {
        if idx == 0 {
            let _ = writeln!(out, "    {} = 0,", label.to_uppercase());
        } else {
            let _ = writeln!(out, "    {},", label.to_uppercase());
        }
    }
    let _ = writeln!(out, "    {}", sentinel);
    let _ = writeln!(out, "}} {}{};", type_stem(name), type_suffix);
    out
}

/// Emit a category header (`sprite.h`, `background.h`, `font.h`) holding
/// one enum per sheet.
pub fn sprite_header(sheets: &[SpriteSheet], file_name: &str) -> String {
    let enums: Vec<String> = sheets.iter().map(sprite_enum).collect();
    header(file_name, &enums.join("\n"))
}

/// Emit the palette category header holding one enum per group.
pub fn palette_header(groups: &[PaletteGroup], file_name: &str) -> String {
    let enums: Vec<String> = groups.iter().map(palette_enum).collect();
    header(file_name, &enums.join("\n"))
}

/// Emit the map category header: include guard only, no body.
pub fn map_header(file_name: &str) -> String {
    header(file_name, "")
}

fn header(file_name: &str, body: &str) -> String {
    let guard = include_guard(file_name);
    let mut out = generated_comment("Generated file");
    let _ = writeln!(out, "#ifndef {}", guard);
    let _ = writeln!(out, "#define {}", guard);
    out.push('\n');
    out.push_str("#include <stdint.h>\n");
    out.push_str("\n\n");
    out.push_str(body);
    out.push_str("\n\n");
    let _ = write!(out, "#endif // {}", guard);
    out
}
