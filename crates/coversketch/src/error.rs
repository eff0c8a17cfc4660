//! Error types for sketch operations.

use std::io;

use thiserror::Error;

/// The main error type for sketch operations.
#[derive(Debug, Error)]
pub enum SketchError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(#[from] crate::export::Error),

    /// An export was requested before any sketch was created.
    #[error("Create a sketch first.")]
    NoSketch,
}
