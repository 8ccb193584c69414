//! Watch command implementation.
//!
//! Re-runs generation whenever an asset file changes. Paired with the
//! dynamic linkage mode this gives live asset reload: rebuild the shared
//! library from the regenerated sources and call `GRAPHICS_reload()` in
//! the running program.

use std::path::PathBuf;
use std::sync::mpsc;

use clap::Args;
use notify::{RecursiveMode, Watcher};

use crate::cli::build;
use crate::discovery::{has_extension, Manifest};
use crate::error::{GfxError, Result};
use crate::output::{display_path, Printer};
use crate::types::FormatKind;

/// Rebuild automatically when assets change
#[derive(Args, Debug)]
pub struct WatchArgs {
    /// Project root containing gfxgen.yaml and the asset directories
    #[arg(default_value = ".")]
    pub root: PathBuf,
}

pub fn run(args: WatchArgs, printer: &Printer) -> Result<()> {
    let manifest = Manifest::load_or_default(&args.root)?;

    // Initial pass; later failures keep the watcher alive
    build::generate(&args.root, &manifest, printer)?;

    let (tx, rx) = mpsc::channel();
    let mut watcher = notify::recommended_watcher(tx).map_err(watch_error)?;

    let mut watched = 0;
    for dir in manifest.asset_dirs() {
        let path = args.root.join(dir);
        if path.is_dir() {
            watcher
                .watch(&path, RecursiveMode::Recursive)
                .map_err(watch_error)?;
            watched += 1;
        }
    }

    if watched == 0 {
        return Err(GfxError::Build {
            message: "No asset directories to watch".to_string(),
            help: Some("Run gfxgen init or create the asset directories first".to_string()),
        });
    }

    printer.info("Watching", &display_path(&args.root));

    for event in rx {
        match event {
            Ok(event) if is_asset_event(&event) => {
                if let Err(e) = build::generate(&args.root, &manifest, printer) {
                    printer.error("Failed", &e.to_string());
                }
            }
            Ok(_) => {}
            Err(e) => printer.warning("Watch", &e.to_string()),
        }
    }

    Ok(())
}

fn is_asset_event(event: &notify::Event) -> bool {
    event.paths.iter().any(|p| {
        has_extension(p, FormatKind::Sprite)
            || has_extension(p, FormatKind::Palette)
            || has_extension(p, FormatKind::Map)
    })
}

fn watch_error(e: notify::Error) -> GfxError {
    GfxError::Build {
        message: format!("File watcher error: {}", e),
        help: None,
    }
}
