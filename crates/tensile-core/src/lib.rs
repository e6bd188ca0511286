//! Tensile Core - Shared types for the Tensile layout engine.
//!
//! Geometry primitives and the graph contract used by the simulation.

pub mod error;
pub mod geometry;
pub mod graph;

pub use error::GeometryError;
