//! Project manifest (gfxgen.yaml) parsing.
//!
//! The manifest defines where each asset category lives and where the
//! generated C files go. Every field has a convention default, so a
//! project without a manifest still builds.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GfxError, Result};

/// Manifest file name looked up in the project root.
pub const MANIFEST_FILENAME: &str = "gfxgen.yaml";

/// Project manifest loaded from gfxgen.yaml.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Per-category asset source directories.
    pub assets: AssetDirs,

    /// Output locations for generated files.
    pub output: OutputDirs,

    /// Shared library name baked into the dynamic linkage source.
    pub library: String,
}

/// Asset source directories, one per category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetDirs {
    pub sprites: PathBuf,
    pub backgrounds: PathBuf,
    pub fonts: PathBuf,
    pub palettes: PathBuf,
    pub maps: PathBuf,
}

/// Output directories for the generated header/source files.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputDirs {
    /// Category enum headers and graphics.h.
    pub include: PathBuf,
    /// Dynamic linkage source (graphics.c).
    pub src: PathBuf,
    /// Static pair (lib/graphics.h, lib/graphics.c).
    pub lib: PathBuf,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            assets: AssetDirs::default(),
            output: OutputDirs::default(),
            library: "libgraphics.so".to_string(),
        }
    }
}

impl Default for AssetDirs {
    fn default() -> Self {
        Self {
            sprites: PathBuf::from("assets/sprites"),
            backgrounds: PathBuf::from("assets/backgrounds"),
            fonts: PathBuf::from("assets/fonts"),
            palettes: PathBuf::from("assets/palettes"),
            maps: PathBuf::from("assets/maps"),
        }
    }
}

impl Default for OutputDirs {
    fn default() -> Self {
        Self {
            include: PathBuf::from("include/assets"),
            src: PathBuf::from("src/assets"),
            lib: PathBuf::from("src/lib"),
        }
    }
}

impl Manifest {
    /// Load a manifest from a gfxgen.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| GfxError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse a manifest from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| GfxError::Manifest {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check gfxgen.yaml syntax".to_string()),
        })
    }

    /// Load the manifest from `root` if present, falling back to defaults.
    pub fn load_or_default(root: &Path) -> Result<Self> {
        let path = root.join(MANIFEST_FILENAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Asset directories in category declaration order.
    pub fn asset_dirs(&self) -> [&PathBuf; 5] {
        [
            &self.assets.sprites,
            &self.assets.backgrounds,
            &self.assets.fonts,
            &self.assets.palettes,
            &self.assets.maps,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let manifest = Manifest::default();
        assert_eq!(manifest.assets.sprites, PathBuf::from("assets/sprites"));
        assert_eq!(manifest.output.include, PathBuf::from("include/assets"));
        assert_eq!(manifest.library, "libgraphics.so");
    }

    #[test]
    fn test_parse_partial_manifest() {
        let manifest = Manifest::parse("library: libassets.so\n").unwrap();
        assert_eq!(manifest.library, "libassets.so");
        // Unspecified sections keep their defaults
        assert_eq!(manifest.assets.maps, PathBuf::from("assets/maps"));
    }

    #[test]
    fn test_parse_nested_override() {
        let manifest = Manifest::parse(
            "assets:\n  sprites: art/sprites\noutput:\n  include: gen/include\n",
        )
        .unwrap();
        assert_eq!(manifest.assets.sprites, PathBuf::from("art/sprites"));
        assert_eq!(manifest.output.include, PathBuf::from("gen/include"));
        assert_eq!(manifest.output.src, PathBuf::from("src/assets"));
    }

    #[test]
    fn test_parse_rejects_bad_yaml() {
        let result = Manifest::parse("assets: [not a mapping");
        assert!(result.is_err());
    }

    #[test]
    fn test_roundtrip_through_yaml() {
        let manifest = Manifest::default();
        let yaml = serde_yaml::to_string(&manifest).unwrap();
        let back = Manifest::parse(&yaml).unwrap();
        assert_eq!(back.library, manifest.library);
        assert_eq!(back.assets.fonts, manifest.assets.fonts);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = Manifest::load_or_default(dir.path()).unwrap();
        assert_eq!(manifest.library, "libgraphics.so");
    }
}
