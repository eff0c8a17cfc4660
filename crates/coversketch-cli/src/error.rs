//! Error type for the CLI.

use std::io;

use thiserror::Error;

use coversketch::SketchError;

use crate::{config::ConfigError, job::JobError};

/// Everything that can stop a CLI run.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Job(#[from] JobError),

    #[error(transparent)]
    Sketch(#[from] SketchError),
}
