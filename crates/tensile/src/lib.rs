//! Tensile - Force-directed graph layout by particle and spring simulation.
//!
//! Nodes become particles, edges become springs. Every step, the registered
//! forces push particles around, a damped integrator moves them, and the
//! layout settles once the total kinetic energy drops to a threshold.
//!
//! # Overview
//!
//! - [`ForceBasedLayout`] - The layout engine, driven through [`GraphLayout`].
//! - [`RepulsionForce`] and [`SpringForce`] - The built-in [`Force`]s.
//! - [`Simulation`] - Runs a layout to completion and reports progress to observers.
//! - [`graph::layout_graph`] - One-call layout of a `petgraph` graph.
//! - [`config`] - Serde-deserializable configuration.

pub mod config;
pub mod forces;
pub mod graph;

mod error;
mod layout;
mod particle;
mod simulation;
mod spring;
mod system;

pub use tensile_core::{
    geometry,
    graph::{DirectedEdge, Edge},
};

pub use error::TensileError;
pub use forces::{Force, ForceKind, RepulsionForce, SpringForce};
pub use layout::{ForceBasedLayout, GraphLayout, Integrator, LayoutState};
pub use particle::{Particle, ParticleIndex};
pub use simulation::{RunSummary, Simulation, SimulationEvent, SimulationObserver};
pub use spring::{Spring, SpringParams};
pub use system::ParticleSystem;
