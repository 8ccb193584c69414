use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use crate::types::{FormatKind, FormatVersion};

/// Main error type for gfxgen operations
#[derive(Error, Diagnostic, Debug)]
pub enum GfxError {
    #[error("IO error: {0}")]
    #[diagnostic(code(gfxgen::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(gfxgen::io))]
    Io { path: PathBuf, message: String },

    #[error("Missing input file: {path}")]
    #[diagnostic(code(gfxgen::missing_file))]
    MissingFile { path: PathBuf },

    #[error("{kind} version mismatch: expected {expected}, found {found}")]
    #[diagnostic(
        code(gfxgen::version_mismatch),
        help("Re-save the file with a current editor; no version skew is tolerated")
    )]
    VersionMismatch {
        kind: FormatKind,
        expected: FormatVersion,
        found: FormatVersion,
    },

    #[error("Record label at offset {offset} is not valid UTF-8")]
    #[diagnostic(code(gfxgen::invalid_encoding))]
    InvalidEncoding { offset: usize },

    #[error("Truncated record at offset {offset}: needed {needed} bytes, {remaining} remain")]
    #[diagnostic(code(gfxgen::truncated_record))]
    TruncatedRecord {
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    #[error("Manifest error: {message}")]
    #[diagnostic(code(gfxgen::manifest))]
    Manifest {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Build error: {message}")]
    #[diagnostic(code(gfxgen::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, GfxError>;
