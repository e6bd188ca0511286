//! Error types for Tensile operations.
//!
//! This module provides the main error type [`TensileError`]. Numerical
//! trouble inside a running simulation is never reported here: coincident
//! particles and invalid boundaries are recovered locally by the engine.
//! What remains are configuration mistakes and graphs that do not hang
//! together.

use std::io;

use thiserror::Error;

use tensile_core::GeometryError;

/// The main error type for Tensile operations.
#[derive(Debug, Error)]
pub enum TensileError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),

    #[error("Edge {edge} references a node that is not part of the layout: {node}")]
    MissingEndpoint { edge: usize, node: String },
}
