//! Init command implementation.
//!
//! Writes a default `gfxgen.yaml` manifest into the project root.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::discovery::{Manifest, MANIFEST_FILENAME};
use crate::error::{GfxError, Result};
use crate::output::{display_path, Printer};

/// Initialize a gfxgen project by generating a gfxgen.yaml manifest
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to initialize (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite an existing gfxgen.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    if manifest_path.exists() && !args.force {
        return Err(GfxError::Build {
            message: format!("{} already exists", MANIFEST_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    let yaml = serde_yaml::to_string(&Manifest::default()).map_err(|e| GfxError::Manifest {
        message: format!("Failed to serialize default manifest: {}", e),
        help: None,
    })?;

    fs::write(&manifest_path, &yaml).map_err(|e| GfxError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    printer.success("Created", &display_path(&manifest_path));

    Ok(())
}
