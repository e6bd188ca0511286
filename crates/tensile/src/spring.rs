//! Springs: the elastic constraint standing in for one graph edge.

use serde::Deserialize;

use crate::particle::ParticleIndex;

/// A spring between two particles of the same system.
///
/// A spring is a passive record. Its geometric effect is recomputed every
/// step by [`SpringForce`](crate::forces::SpringForce) from the current
/// endpoint positions; nothing about the spring changes after creation.
///
/// The damping coefficient defaults to a tenth of the natural length.
#[derive(Debug, Clone)]
pub struct Spring<E> {
    a: ParticleIndex,
    b: ParticleIndex,
    length: f64,
    strength: f64,
    damping: f64,
    edge: E,
}

impl<E> Spring<E> {
    /// Creates a spring of unit length and unit strength.
    pub fn new(a: ParticleIndex, b: ParticleIndex, edge: E) -> Self {
        Self {
            a,
            b,
            length: 1.0,
            strength: 1.0,
            damping: 0.1,
            edge,
        }
    }

    /// Sets the stiffness
    pub fn with_strength(mut self, strength: f64) -> Self {
        self.strength = strength;
        self
    }

    /// Sets the natural length and resets damping to `length / 10`.
    pub fn with_length(mut self, length: f64) -> Self {
        self.length = length;
        self.damping = length / 10.0;
        self
    }

    /// Overrides the damping coefficient
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Applies a set of spring parameters, keeping the derived damping unless
    /// the parameters override it.
    pub fn with_params(self, params: &SpringParams) -> Self {
        let spring = self
            .with_strength(params.strength())
            .with_length(params.length());
        match params.damping() {
            Some(damping) => spring.with_damping(damping),
            None => spring,
        }
    }

    /// First endpoint
    pub fn a(&self) -> ParticleIndex {
        self.a
    }

    /// Second endpoint
    pub fn b(&self) -> ParticleIndex {
        self.b
    }

    /// Natural length
    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn strength(&self) -> f64 {
        self.strength
    }

    pub fn damping(&self) -> f64 {
        self.damping
    }

    /// The edge this spring stands for
    pub fn edge(&self) -> &E {
        &self.edge
    }

    /// Whether both endpoints are the same particle
    pub fn is_loop(&self) -> bool {
        self.a == self.b
    }
}

/// Parameters given to every spring created when a layout is initialized.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpringParams {
    length: f64,
    strength: f64,
    damping: Option<f64>,
}

impl SpringParams {
    /// Creates spring parameters; `damping: None` derives it from the length.
    pub fn new(length: f64, strength: f64, damping: Option<f64>) -> Self {
        Self {
            length,
            strength,
            damping,
        }
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn strength(&self) -> f64 {
        self.strength
    }

    /// Explicit damping override, if any
    pub fn damping(&self) -> Option<f64> {
        self.damping
    }
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            length: 1.0,
            strength: 1.0,
            damping: None,
        }
    }
}
