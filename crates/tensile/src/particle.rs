//! Particles: the unit of simulation state.

use std::fmt;

use tensile_core::geometry::Vector;

/// Position of a particle inside its owning [`ParticleSystem`].
///
/// Springs name their endpoints through this index, so a spring can never
/// refer to a particle of another layout.
///
/// [`ParticleSystem`]: crate::system::ParticleSystem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticleIndex(usize);

impl ParticleIndex {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the numeric index
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ParticleIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A point mass standing in for one graph node.
///
/// Besides its kinematic state a particle keeps the handle of the node it
/// represents, so results can be reported per node. The accumulated force is
/// only meaningful during a single step: it is cleared before the forces run
/// and consumed by the integrator.
#[derive(Debug, Clone)]
pub struct Particle<N> {
    position: Vector,
    velocity: Vector,
    force: Vector,
    mass: f64,
    node: N,
}

impl<N> Particle<N> {
    /// Creates a particle at rest with unit mass.
    pub fn new(node: N, position: Vector) -> Self {
        Self {
            position,
            velocity: Vector::ZERO,
            force: Vector::ZERO,
            mass: 1.0,
            node,
        }
    }

    /// Sets the initial velocity
    pub fn with_velocity(mut self, velocity: Vector) -> Self {
        self.velocity = velocity;
        self
    }

    /// Sets the mass. Non-positive or non-finite masses are ignored and the
    /// particle keeps its previous mass.
    pub fn with_mass(mut self, mass: f64) -> Self {
        if mass > 0.0 && mass.is_finite() {
            self.mass = mass;
        }
        self
    }

    pub fn position(&self) -> Vector {
        self.position
    }

    pub fn velocity(&self) -> Vector {
        self.velocity
    }

    /// Force accumulated so far in the current step
    pub fn force(&self) -> Vector {
        self.force
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// The node this particle stands for
    pub fn node(&self) -> &N {
        &self.node
    }

    /// Kinetic energy: `m * |v|² / 2`
    pub fn kinetic_energy(&self) -> f64 {
        self.mass * self.velocity.length_squared() / 2.0
    }

    pub(crate) fn set_position(&mut self, position: Vector) {
        self.position = position;
    }

    pub(crate) fn set_velocity(&mut self, velocity: Vector) {
        self.velocity = velocity;
    }

    pub(crate) fn add_force(&mut self, force: Vector) {
        self.force += force;
    }

    pub(crate) fn clear_force(&mut self) {
        self.force = Vector::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_particle_defaults() {
        let particle = Particle::new("a", Vector::new(1.0, 2.0));
        assert_eq!(particle.position(), Vector::new(1.0, 2.0));
        assert!(particle.velocity().is_zero());
        assert!(particle.force().is_zero());
        assert_eq!(particle.mass(), 1.0);
        assert_eq!(*particle.node(), "a");
    }

    #[test]
    fn test_particle_rejects_bad_mass() {
        let particle = Particle::new((), Vector::ZERO).with_mass(-2.0);
        assert_eq!(particle.mass(), 1.0);

        let particle = Particle::new((), Vector::ZERO).with_mass(f64::NAN);
        assert_eq!(particle.mass(), 1.0);

        let particle = Particle::new((), Vector::ZERO).with_mass(3.0);
        assert_eq!(particle.mass(), 3.0);
    }

    #[test]
    fn test_particle_kinetic_energy() {
        let particle = Particle::new((), Vector::ZERO)
            .with_mass(2.0)
            .with_velocity(Vector::new(3.0, 4.0));
        assert_eq!(particle.kinetic_energy(), 25.0);
    }

    #[test]
    fn test_force_accumulates() {
        let mut particle = Particle::new((), Vector::ZERO);
        particle.add_force(Vector::new(1.0, 0.5));
        particle.add_force(Vector::new(-0.25, 0.5));
        assert_eq!(particle.force(), Vector::new(0.75, 1.0));

        particle.clear_force();
        assert!(particle.force().is_zero());
    }
}
