//! Pairwise repulsion between all particles

use tensile_core::geometry::Vector;

use crate::{
    forces::{COINCIDENCE_JITTER, Force},
    particle::ParticleIndex,
    system::ParticleSystem,
};

/// Coulomb-like repulsion between every pair of particles.
///
/// All particles carry a unit charge. For a pair at distance `d` the
/// magnitude is `strength / max(d, 1)`, directed along the displacement and
/// applied with equal and opposite sign to both members. The distance floor
/// of 1 bounds the force between close pairs. Pairs sitting on
/// exactly the same spot are separated by a small random displacement.
///
/// Every unordered pair is visited once, so a step costs O(n²).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RepulsionForce {
    strength: f64,
}

impl RepulsionForce {
    /// Creates a repulsion force with the given Coulomb constant
    pub fn new(strength: f64) -> Self {
        Self { strength }
    }

    pub(crate) fn default_strength() -> f64 {
        0.05
    }

    pub fn strength(&self) -> f64 {
        self.strength
    }

    /// Force exerted on a particle displaced by `delta` from the other one.
    fn pair_force(&self, delta: Vector) -> Vector {
        let distance = delta.hypot().max(1.0);
        let magnitude = self.strength / distance;
        delta.scale(magnitude / distance)
    }
}

impl Default for RepulsionForce {
    fn default() -> Self {
        Self::new(Self::default_strength())
    }
}

impl<N, E> Force<N, E> for RepulsionForce {
    fn name(&self) -> &'static str {
        "repulsion"
    }

    fn apply(&self, system: &mut ParticleSystem<N, E>) {
        let count = system.len();

        for i in 0..count {
            for j in (i + 1)..count {
                let (p, q) = (ParticleIndex::new(i), ParticleIndex::new(j));
                let mut delta = system.particle(p).position() - system.particle(q).position();
                if delta.is_zero() {
                    delta = system.jitter(COINCIDENCE_JITTER);
                }

                let force = self.pair_force(delta);
                system.add_force(p, force);
                system.add_force(q, -force);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;

    use super::*;
    use crate::particle::Particle;

    fn system_with(positions: &[Vector]) -> ParticleSystem<usize, ()> {
        let mut system = ParticleSystem::with_seed(11);
        for (i, &position) in positions.iter().enumerate() {
            system.push_particle(Particle::new(i, position));
        }
        system
    }

    #[test]
    fn test_single_particle_feels_nothing() {
        let mut system = system_with(&[Vector::new(3.0, 4.0)]);
        RepulsionForce::default().apply(&mut system);
        assert!(system.particles()[0].force().is_zero());
    }

    #[test]
    fn test_pair_pushes_apart() {
        let mut system = system_with(&[Vector::new(0.0, 0.0), Vector::new(2.0, 0.0)]);
        RepulsionForce::new(0.05).apply(&mut system);

        let left = system.particles()[0].force();
        let right = system.particles()[1].force();

        // magnitude = 0.05 / 2, along the x axis
        assert!(approx_eq!(f64, left.x(), -0.025));
        assert!(approx_eq!(f64, left.y(), 0.0));
        assert!(approx_eq!(f64, right.x(), 0.025));
        assert!(approx_eq!(f64, right.y(), 0.0));
    }

    #[test]
    fn test_close_pair_uses_distance_floor() {
        let mut system = system_with(&[Vector::new(0.0, 0.0), Vector::new(0.0, 0.5)]);
        RepulsionForce::new(1.0).apply(&mut system);

        // d = 0.5 is floored to 1: magnitude 1, scaled by dy / 1
        let bottom = system.particles()[0].force();
        assert!(approx_eq!(f64, bottom.y(), -0.5));
        assert!(bottom.is_finite());
    }

    #[test]
    fn test_coincident_pair_is_separated() {
        let mut system = system_with(&[Vector::new(1.0, 1.0), Vector::new(1.0, 1.0)]);
        RepulsionForce::default().apply(&mut system);

        let first = system.particles()[0].force();
        let second = system.particles()[1].force();
        assert!(!first.is_zero());
        assert!(first.is_finite());
        assert!(approx_eq!(f64, first.x(), -second.x()));
        assert!(approx_eq!(f64, first.y(), -second.y()));
    }

    #[test]
    fn test_forces_add_to_existing() {
        let mut system = system_with(&[Vector::new(0.0, 0.0), Vector::new(4.0, 0.0)]);
        system.add_force(ParticleIndex::new(0), Vector::new(0.0, 1.0));
        RepulsionForce::new(0.4).apply(&mut system);

        let force = system.particles()[0].force();
        assert!(approx_eq!(f64, force.x(), -0.1));
        assert!(approx_eq!(f64, force.y(), 1.0));
    }

    #[test]
    fn test_net_force_is_zero() {
        let mut system = system_with(&[
            Vector::new(0.0, 0.0),
            Vector::new(3.0, 1.0),
            Vector::new(-2.0, 5.0),
            Vector::new(0.3, -0.2),
        ]);
        RepulsionForce::default().apply(&mut system);

        let net = system
            .particles()
            .iter()
            .fold(Vector::ZERO, |acc, p| acc + p.force());
        assert!(approx_eq!(f64, net.x(), 0.0, epsilon = 1e-12));
        assert!(approx_eq!(f64, net.y(), 0.0, epsilon = 1e-12));
    }
}
