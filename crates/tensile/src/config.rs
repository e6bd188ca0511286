//! Configuration types for the layout engine and its driver.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from
//! external sources such as TOML files. Every field is optional and falls
//! back to the engine defaults.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout and simulation settings.
//! - [`LayoutConfig`] - Physics of the [`ForceBasedLayout`](crate::ForceBasedLayout).
//! - [`SimulationConfig`] - How the [`Simulation`](crate::Simulation) drives steps.
//!
//! # Example
//!
//! ```toml
//! [layout]
//! threshold = 0.1
//! damping = 0.9
//! integrator = "damped_semi_implicit"
//! bounds = [50.0, 80.0]
//! forces = [{ kind = "repulsion", strength = 0.05 }, { kind = "spring" }]
//!
//! [layout.spring]
//! length = 1.0
//! strength = 1.0
//!
//! [simulation]
//! time_step = 1.0
//! max_steps = 5000
//! ```

use serde::Deserialize;

use crate::{error::TensileError, forces::ForceKind, layout::Integrator, spring::SpringParams};

/// Top-level configuration combining layout and simulation settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Simulation configuration section.
    #[serde(default)]
    simulation: SimulationConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its two sections.
    pub fn new(layout: LayoutConfig, simulation: SimulationConfig) -> Self {
        Self { layout, simulation }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the simulation configuration.
    pub fn simulation(&self) -> &SimulationConfig {
        &self.simulation
    }

    /// Checks both sections.
    ///
    /// # Errors
    ///
    /// Returns [`TensileError::Config`] describing the first invalid value.
    pub fn validate(&self) -> Result<(), TensileError> {
        self.layout.validate()?;
        self.simulation.validate()
    }
}

/// Physical parameters of a force-based layout.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Kinetic energy at or below which the layout is settled.
    threshold: f64,

    /// Velocity damping factor in `(0, 1]`.
    damping: f64,

    /// Integration scheme.
    integrator: Integrator,

    /// Optional boundary as 1 to 4 clockwise values (top, right, bottom, left).
    bounds: Option<Vec<f64>>,

    /// Seed for initial positions and jitter; random when absent.
    seed: Option<u64>,

    /// Active forces, applied in this order.
    forces: Vec<ForceKind>,

    /// Parameters of every spring.
    spring: SpringParams,
}

impl LayoutConfig {
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn damping(&self) -> f64 {
        self.damping
    }

    pub fn integrator(&self) -> Integrator {
        self.integrator
    }

    pub fn bounds(&self) -> Option<&[f64]> {
        self.bounds.as_deref()
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn forces(&self) -> &[ForceKind] {
        &self.forces
    }

    pub fn spring(&self) -> SpringParams {
        self.spring
    }

    /// Returns a copy with the given seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`TensileError::Config`] when the threshold is negative or not
    /// finite, when damping lies outside `(0, 1]`, when the spring length is
    /// negative or the spring strength is not positive, or when a parameter
    /// is not finite.
    pub fn validate(&self) -> Result<(), TensileError> {
        if !(self.threshold.is_finite() && self.threshold >= 0.0) {
            return Err(TensileError::Config(format!(
                "threshold must be a non-negative number, got {}",
                self.threshold
            )));
        }
        if !(self.damping > 0.0 && self.damping <= 1.0) {
            return Err(TensileError::Config(format!(
                "damping must lie in (0, 1], got {}",
                self.damping
            )));
        }
        let (length, strength) = (self.spring.length(), self.spring.strength());
        if !(length.is_finite() && length >= 0.0) {
            return Err(TensileError::Config(format!(
                "spring length must be a non-negative number, got {length}"
            )));
        }
        if !(strength.is_finite() && strength > 0.0) {
            return Err(TensileError::Config(format!(
                "spring strength must be a positive number, got {strength}"
            )));
        }
        for force in &self.forces {
            if let ForceKind::Repulsion { strength } = force
                && !strength.is_finite()
            {
                return Err(TensileError::Config(format!(
                    "repulsion strength must be finite, got {strength}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            damping: 0.9,
            integrator: Integrator::default(),
            bounds: None,
            seed: None,
            forces: ForceKind::standard(),
            spring: SpringParams::default(),
        }
    }
}

/// Settings of the driving loop.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Time step handed to every layout step.
    time_step: f64,

    /// Upper bound on the number of steps of a batch run; unbounded when absent.
    max_steps: Option<usize>,
}

impl SimulationConfig {
    pub fn new(time_step: f64, max_steps: Option<usize>) -> Self {
        Self {
            time_step,
            max_steps,
        }
    }

    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    pub fn max_steps(&self) -> Option<usize> {
        self.max_steps
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`TensileError::Config`] when the time step is not a positive
    /// finite number.
    pub fn validate(&self) -> Result<(), TensileError> {
        if !(self.time_step.is_finite() && self.time_step > 0.0) {
            return Err(TensileError::Config(format!(
                "time_step must be a positive number, got {}",
                self.time_step
            )));
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            time_step: 1.0,
            max_steps: None,
        }
    }
}
