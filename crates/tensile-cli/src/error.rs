//! Errors raised by the CLI.

use std::io;

use thiserror::Error;

use tensile::TensileError;

use crate::{config::ConfigError, graph_file::GraphFileError};

/// Everything that can stop a CLI run.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Graph(#[from] GraphFileError),

    #[error(transparent)]
    Layout(#[from] TensileError),
}
