//! The particle system shared by forces and the integrator.
//!
//! A [`ParticleSystem`] owns every particle and spring of one layout together
//! with the random number generator used for symmetry-breaking jitter.
//! Forces receive it mutably, but the only mutation they can perform is
//! [`ParticleSystem::add_force`]: positions and velocities stay under the
//! control of the layout's integrator.

use rand::{Rng, SeedableRng, rngs::StdRng};

use tensile_core::geometry::Vector;

use crate::{
    particle::{Particle, ParticleIndex},
    spring::Spring,
};

/// Particles, springs and the jitter source of a single layout.
#[derive(Debug)]
pub struct ParticleSystem<N, E> {
    particles: Vec<Particle<N>>,
    springs: Vec<Spring<E>>,
    rng: StdRng,
}

impl<N, E> ParticleSystem<N, E> {
    /// Creates an empty system seeded from the operating system.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Creates an empty system with a reproducible jitter sequence.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            particles: Vec::new(),
            springs: Vec::new(),
            rng,
        }
    }

    pub fn particles(&self) -> &[Particle<N>] {
        &self.particles
    }

    pub fn springs(&self) -> &[Spring<E>] {
        &self.springs
    }

    /// Returns the particle at `index`.
    ///
    /// # Panics
    ///
    /// Panics if the index does not belong to this system.
    pub fn particle(&self, index: ParticleIndex) -> &Particle<N> {
        &self.particles[index.index()]
    }

    /// Iterates over the indices of all particles
    pub fn indices(&self) -> impl Iterator<Item = ParticleIndex> + use<N, E> {
        (0..self.particles.len()).map(ParticleIndex::new)
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Adds a contribution to the force accumulated by a particle this step.
    pub fn add_force(&mut self, index: ParticleIndex, force: Vector) {
        self.particles[index.index()].add_force(force);
    }

    /// Draws a vector uniformly from `[-scale/2, scale/2)` on each axis.
    pub fn jitter(&mut self, scale: f64) -> Vector {
        let x = self.rng.random::<f64>() - 0.5;
        let y = self.rng.random::<f64>() - 0.5;
        Vector::new(x * scale, y * scale)
    }

    /// Total kinetic energy: `Σ m * |v|² / 2`
    pub fn kinetic_energy(&self) -> f64 {
        self.particles.iter().map(Particle::kinetic_energy).sum()
    }

    pub(crate) fn clear_forces(&mut self) {
        self.particles.iter_mut().for_each(Particle::clear_force);
    }

    pub(crate) fn particles_mut(&mut self) -> &mut [Particle<N>] {
        &mut self.particles
    }

    /// Replaces both collections at once.
    pub(crate) fn replace(&mut self, particles: Vec<Particle<N>>, springs: Vec<Spring<E>>) {
        self.particles = particles;
        self.springs = springs;
    }

    pub(crate) fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Appends a particle. Used by tests that need exact starting positions.
    #[cfg(test)]
    pub(crate) fn push_particle(&mut self, particle: Particle<N>) -> ParticleIndex {
        self.particles.push(particle);
        ParticleIndex::new(self.particles.len() - 1)
    }

    #[cfg(test)]
    pub(crate) fn push_spring(&mut self, spring: Spring<E>) {
        self.springs.push(spring);
    }
}

impl<N, E> Default for ParticleSystem<N, E> {
    fn default() -> Self {
        Self::new()
    }
}
