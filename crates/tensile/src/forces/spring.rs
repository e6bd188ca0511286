//! Hookean attraction along springs

use tensile_core::geometry::Vector;

use crate::{
    forces::{COINCIDENCE_JITTER, Force},
    system::ParticleSystem,
};

/// Restoring force of every spring in the system.
///
/// For a spring of natural length `L` and strength `k` whose endpoints are
/// `d` apart, the coefficient `k * (d - L)` pulls the endpoints together when
/// stretched and pushes them apart when compressed. The force on the first
/// endpoint is `-k * (d - L) * delta / max(d, 1)`; the second endpoint gets
/// the exact opposite.
///
/// Endpoints sitting on exactly the same spot are given a small random
/// displacement first. Springs looping on a single particle are skipped.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpringForce;

impl SpringForce {
    pub fn new() -> Self {
        Self
    }
}

impl<N, E> Force<N, E> for SpringForce {
    fn name(&self) -> &'static str {
        "spring"
    }

    fn apply(&self, system: &mut ParticleSystem<N, E>) {
        for index in 0..system.springs().len() {
            let spring = &system.springs()[index];
            if spring.is_loop() {
                continue;
            }
            let (a, b) = (spring.a(), spring.b());
            let (length, strength) = (spring.length(), spring.strength());

            let mut delta = system.particle(a).position() - system.particle(b).position();
            if delta.is_zero() {
                delta = system.jitter(COINCIDENCE_JITTER);
            }

            let force = hooke(delta, length, strength);
            system.add_force(a, force);
            system.add_force(b, -force);
        }
    }
}

/// Force on the first endpoint of a spring displaced by `delta`.
fn hooke(delta: Vector, length: f64, strength: f64) -> Vector {
    let distance = delta.hypot();
    let coefficient = strength * (distance - length);
    delta.scale(-coefficient / distance.max(1.0))
}
