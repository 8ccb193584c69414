//! File system scanner for binary asset files.
//!
//! Walks each category directory from the manifest and collects files by
//! extension. Results are sorted lexically so a build sees the same file
//! order on every run; the generated text depends on it.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::types::FormatKind;

use super::manifest::Manifest;

/// Discovered asset files, grouped by category, each list sorted lexically.
#[derive(Debug, Default, Clone)]
pub struct ScanResult {
    pub sprites: Vec<PathBuf>,
    pub backgrounds: Vec<PathBuf>,
    pub fonts: Vec<PathBuf>,
    pub palettes: Vec<PathBuf>,
    pub maps: Vec<PathBuf>,
}

impl ScanResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of discovered files.
    pub fn total(&self) -> usize {
        self.sprites.len()
            + self.backgrounds.len()
            + self.fonts.len()
            + self.palettes.len()
            + self.maps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// All paths in category declaration order.
    pub fn all_files(&self) -> impl Iterator<Item = &PathBuf> {
        self.sprites
            .iter()
            .chain(&self.backgrounds)
            .chain(&self.fonts)
            .chain(&self.palettes)
            .chain(&self.maps)
    }
}

/// Scan the manifest's asset directories under `root`.
///
/// Missing directories are treated as empty categories; a project may
/// have no fonts at all.
pub fn scan(root: &Path, manifest: &Manifest) -> ScanResult {
    let mut result = ScanResult::new();

    result.sprites = scan_dir(&root.join(&manifest.assets.sprites), FormatKind::Sprite);
    result.backgrounds = scan_dir(&root.join(&manifest.assets.backgrounds), FormatKind::Sprite);
    result.fonts = scan_dir(&root.join(&manifest.assets.fonts), FormatKind::Sprite);
    result.palettes = scan_dir(&root.join(&manifest.assets.palettes), FormatKind::Palette);
    result.maps = scan_dir(&root.join(&manifest.assets.maps), FormatKind::Map);

    result
}

fn scan_dir(dir: &Path, kind: FormatKind) -> Vec<PathBuf> {
    if !dir.exists() {
        return Vec::new();
    }

    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .filter(|e| has_extension(e.path(), kind))
        .map(|e| e.path().to_path_buf())
        .collect();

    // Lexical order keeps generation deterministic across platforms
    files.sort();
    files
}

/// Check a path against a format's extension.
pub fn has_extension(path: &Path, kind: FormatKind) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e == kind.extension())
}
