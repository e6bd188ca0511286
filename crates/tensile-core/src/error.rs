//! Error types for geometric configuration.

use thiserror::Error;

/// Errors raised while building geometric values from user input.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    #[error("bounds take 1 to 4 clockwise values (top, right, bottom, left), got {0}")]
    InvalidBoundsArity(usize),
}
