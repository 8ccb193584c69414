//! Asset discovery: manifest, directory scanning, and decoding.

mod loader;
mod manifest;
mod scanner;

pub use loader::{load_bundle, read_asset};
pub use manifest::{AssetDirs, Manifest, OutputDirs, MANIFEST_FILENAME};
pub use scanner::{has_extension, scan, ScanResult};
