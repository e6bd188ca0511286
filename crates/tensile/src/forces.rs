//! Forces acting on a particle system
//!
//! A force is a rule that adds contributions to the accumulated force of
//! particles. A layout holds an ordered list of forces and runs each of them
//! once per step before integrating. Contributions are additive, so any
//! number of forces can be combined.

mod repulsion;
mod spring;

pub use repulsion::RepulsionForce;
pub use spring::SpringForce;

use std::fmt;

use serde::Deserialize;

use crate::system::ParticleSystem;

/// Scale of the jitter used to separate exactly coincident particles.
pub(crate) const COINCIDENCE_JITTER: f64 = 0.01;

/// A force contributing to the accumulated force of particles.
///
/// Implementations must only add through [`ParticleSystem::add_force`]; they
/// never clear what other forces accumulated and never move particles.
pub trait Force<N, E>: fmt::Debug {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Adds this force's contributions for the current step.
    fn apply(&self, system: &mut ParticleSystem<N, E>);
}

/// The built-in forces, as named in configuration files.
///
/// ```toml
/// forces = [
///     { kind = "repulsion", strength = 0.05 },
///     { kind = "spring" },
/// ]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ForceKind {
    /// Pairwise electrostatic-like repulsion between all particles
    Repulsion {
        #[serde(default = "RepulsionForce::default_strength")]
        strength: f64,
    },
    /// Hookean attraction along every spring
    Spring,
}

impl ForceKind {
    /// The forces a layout uses when none are configured: repulsion first,
    /// then springs.
    pub fn standard() -> Vec<ForceKind> {
        vec![
            ForceKind::Repulsion {
                strength: RepulsionForce::default_strength(),
            },
            ForceKind::Spring,
        ]
    }

    /// Creates the force described by this kind.
    pub fn build<N, E>(&self) -> Box<dyn Force<N, E>> {
        match *self {
            ForceKind::Repulsion { strength } => Box::new(RepulsionForce::new(strength)),
            ForceKind::Spring => Box::new(SpringForce::new()),
        }
    }
}
