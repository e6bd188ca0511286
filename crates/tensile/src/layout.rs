//! Force-based graph layout
//!
//! This module contains the layout engine. It binds graph nodes to particles
//! and graph edges to springs, then advances the particle system one time
//! step at a time until the total kinetic energy falls to the configured
//! threshold.

use std::{collections::HashMap, fmt, hash::Hash};

use log::{debug, trace, warn};
use serde::Deserialize;

use tensile_core::{
    geometry::{Rect, Vector},
    graph::DirectedEdge,
};

use crate::{
    config::LayoutConfig,
    error::TensileError,
    forces::{Force, ForceKind},
    particle::{Particle, ParticleIndex},
    spring::{Spring, SpringParams},
    system::ParticleSystem,
};

/// Scale of the random offset given to every particle at initialization.
const INITIAL_JITTER: f64 = 1.0;

/// Interface of a step-wise graph layout algorithm.
///
/// A driver calls [`init`](GraphLayout::init) once with the graph, then
/// [`compute_next_step`](GraphLayout::compute_next_step) until it returns
/// `false`, then [`terminate`](GraphLayout::terminate).
pub trait GraphLayout<N, E> {
    /// Prepares the layout for the given graph, discarding any previous one.
    fn init(&mut self, nodes: &[N], edges: &[E]) -> Result<(), TensileError>;

    /// Signals that no further steps will be requested.
    fn terminate(&mut self);

    /// Advances the layout by one step. Returns whether more steps are needed.
    fn compute_next_step(&mut self, time_step: f64) -> bool;
}

/// Lifecycle of a layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LayoutState {
    #[default]
    Uninitialized,
    Running,
    Terminated,
}

/// Numerical scheme used to advance particles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Integrator {
    /// `v += (f / m) * dt² / 2`, then `v *= damping`, then `x += v * dt`.
    #[default]
    DampedSemiImplicit,
    /// `v += f * dt`, then `x += v * dt`. Ignores mass and damping.
    ExplicitEuler,
}

impl fmt::Display for Integrator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Integrator::DampedSemiImplicit => write!(f, "damped_semi_implicit"),
            Integrator::ExplicitEuler => write!(f, "explicit_euler"),
        }
    }
}

/// Force-directed layout driven by a particle simulation.
///
/// Each node becomes a unit-mass particle, each edge a spring between the
/// particles of its head and tail. Every step applies the registered forces
/// in order, integrates, optionally clamps particles into the boundary, and
/// compares the kinetic energy against the threshold.
///
/// The engine has no iteration cap: a graph whose energy never drops to the
/// threshold keeps asking for more steps. Drivers needing a bound must
/// enforce it themselves.
///
/// # Examples
///
/// ```
/// use tensile::{ForceBasedLayout, GraphLayout, RepulsionForce, SpringForce};
/// use tensile_core::graph::Edge;
///
/// let nodes = ["a", "b", "c"];
/// let edges = [Edge::new("a", "b"), Edge::new("b", "c")];
///
/// let mut layout = ForceBasedLayout::new()
///     .with_seed(7)
///     .with_force(RepulsionForce::default())
///     .with_force(SpringForce::new());
/// layout.init(&nodes, &edges).unwrap();
///
/// let mut steps = 0;
/// while layout.compute_next_step(1.0) && steps < 10_000 {
///     steps += 1;
/// }
/// layout.terminate();
///
/// for (node, position) in layout.positions() {
///     println!("{node}: {}, {}", position.x(), position.y());
/// }
/// ```
#[derive(Debug)]
pub struct ForceBasedLayout<N, E> {
    system: ParticleSystem<N, E>,
    forces: Vec<Box<dyn Force<N, E>>>,
    spring_params: SpringParams,
    threshold: f64,
    damping: f64,
    integrator: Integrator,
    bounds: Option<Rect>,
    bounds_enforced: bool,
    state: LayoutState,
    energy: f64,
}

impl<N, E> ForceBasedLayout<N, E> {
    /// Create a new layout with no particles, no springs and no forces
    pub fn new() -> Self {
        Self {
            system: ParticleSystem::new(),
            forces: Vec::new(),
            spring_params: SpringParams::default(),
            threshold: 0.1,
            damping: 0.9,
            integrator: Integrator::default(),
            bounds: None,
            bounds_enforced: false,
            state: LayoutState::Uninitialized,
            energy: 0.0,
        }
    }

    /// Create a layout from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TensileError::Config`] for out-of-range values and
    /// [`TensileError::Geometry`] when the bounds list has the wrong length.
    pub fn from_config(config: &LayoutConfig) -> Result<Self, TensileError> {
        config.validate()?;

        let mut layout = Self::new()
            .with_threshold(config.threshold())
            .with_damping(config.damping())
            .with_integrator(config.integrator())
            .with_spring_params(config.spring());
        if let Some(seed) = config.seed() {
            layout = layout.with_seed(seed);
        }
        for kind in config.forces() {
            layout.forces.push(kind.build());
        }
        if let Some(bounds) = config.bounds() {
            layout.set_bounds(bounds)?;
        }

        debug!(
            threshold = layout.threshold,
            damping = layout.damping,
            integrator:% = layout.integrator,
            forces = layout.forces.len(),
            bounds_enforced = layout.bounds_enforced;
            "Layout configured"
        );
        Ok(layout)
    }

    /// Set the kinetic energy at or below which the layout is settled
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the velocity damping factor applied every step
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the integration scheme
    pub fn with_integrator(mut self, integrator: Integrator) -> Self {
        self.integrator = integrator;
        self
    }

    /// Make initial positions and jitter reproducible
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.system.reseed(seed);
        self
    }

    /// Set the parameters of springs created by [`GraphLayout::init`]
    pub fn with_spring_params(mut self, params: SpringParams) -> Self {
        self.spring_params = params;
        self
    }

    /// Append a force to the force list
    pub fn with_force(mut self, force: impl Force<N, E> + 'static) -> Self {
        self.forces.push(Box::new(force));
        self
    }

    /// Append the standard repulsion and spring forces
    pub fn with_standard_forces(mut self) -> Self {
        self.forces
            .extend(ForceKind::standard().iter().map(ForceKind::build));
        self
    }

    /// Set the boundary from one to four clockwise values.
    ///
    /// Enforcement is switched on when the resulting rectangle is valid and
    /// off otherwise; an invalid rectangle is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`TensileError::Geometry`] for an empty list or more than four
    /// values. The previous boundary is kept in that case.
    pub fn set_bounds(&mut self, values: &[f64]) -> Result<(), TensileError> {
        let rect = Rect::from_clockwise(values)?;
        self.bounds = Some(rect);
        self.bounds_enforced = rect.is_valid();
        if !self.bounds_enforced {
            warn!(
                top = rect.top(),
                right = rect.right(),
                bottom = rect.bottom(),
                left = rect.left();
                "Degenerate bounds, enforcement disabled"
            );
        }
        Ok(())
    }

    /// Switch boundary enforcement on or off.
    ///
    /// Switching on without a valid rectangle leaves enforcement off.
    pub fn set_bounds_enforced(&mut self, enforced: bool) {
        self.bounds_enforced = enforced && self.bounds.is_some_and(|rect| rect.is_valid());
    }

    /// The configured boundary, valid or not
    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    pub fn bounds_enforced(&self) -> bool {
        self.bounds_enforced
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn damping(&self) -> f64 {
        self.damping
    }

    pub fn integrator(&self) -> Integrator {
        self.integrator
    }

    pub fn state(&self) -> LayoutState {
        self.state
    }

    pub fn particles(&self) -> &[Particle<N>] {
        self.system.particles()
    }

    pub fn springs(&self) -> &[Spring<E>] {
        self.system.springs()
    }

    pub fn forces(&self) -> &[Box<dyn Force<N, E>>] {
        &self.forces
    }

    /// Kinetic energy measured at the end of the last step
    pub fn energy(&self) -> f64 {
        self.energy
    }

    /// Current position of every node
    pub fn positions(&self) -> impl Iterator<Item = (&N, Vector)> {
        self.system
            .particles()
            .iter()
            .map(|particle| (particle.node(), particle.position()))
    }

    /// Advance velocities and positions from the accumulated forces, then
    /// clear the forces.
    fn integrate(&mut self, time_step: f64) {
        let (integrator, damping) = (self.integrator, self.damping);

        for particle in self.system.particles_mut() {
            let velocity = match integrator {
                Integrator::DampedSemiImplicit => {
                    let acceleration = particle.force().scale(1.0 / particle.mass());
                    let velocity =
                        particle.velocity() + acceleration.scale(time_step * time_step / 2.0);
                    velocity.scale(damping)
                }
                Integrator::ExplicitEuler => {
                    particle.velocity() + particle.force().scale(time_step)
                }
            };
            particle.set_velocity(velocity);
            particle.set_position(particle.position() + velocity.scale(time_step));
            particle.clear_force();
        }
    }

    fn enforce_bounds(&mut self) {
        let Some(rect) = self.bounds.filter(|_| self.bounds_enforced) else {
            return;
        };
        for particle in self.system.particles_mut() {
            particle.set_position(rect.clamp(particle.position()));
        }
    }
}

impl<N, E> Default for ForceBasedLayout<N, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, E> GraphLayout<N, E> for ForceBasedLayout<N, E>
where
    N: Clone + Eq + Hash + fmt::Debug,
    E: DirectedEdge<N> + Clone,
{
    fn init(&mut self, nodes: &[N], edges: &[E]) -> Result<(), TensileError> {
        let mut particles = Vec::with_capacity(nodes.len());
        let mut attached: HashMap<&N, ParticleIndex> = HashMap::with_capacity(nodes.len());

        for node in nodes {
            if attached.contains_key(node) {
                warn!(node:?; "Duplicate node ignored");
                continue;
            }
            let position = self.system.jitter(INITIAL_JITTER);
            attached.insert(node, ParticleIndex::new(particles.len()));
            particles.push(Particle::new(node.clone(), position));
        }

        let mut springs = Vec::with_capacity(edges.len());
        for (index, edge) in edges.iter().enumerate() {
            let endpoint = |node: &N| {
                attached
                    .get(node)
                    .copied()
                    .ok_or_else(|| TensileError::MissingEndpoint {
                        edge: index,
                        node: format!("{node:?}"),
                    })
            };
            let (a, b) = (endpoint(edge.head())?, endpoint(edge.tail())?);
            springs.push(Spring::new(a, b, edge.clone()).with_params(&self.spring_params));
        }

        debug!(
            particles = particles.len(),
            springs = springs.len(),
            forces = self.forces.len();
            "Layout initialized"
        );

        self.system.replace(particles, springs);
        self.energy = 0.0;
        self.state = LayoutState::Running;
        Ok(())
    }

    fn terminate(&mut self) {
        debug!(energy = self.energy; "Layout terminated");
        self.state = LayoutState::Terminated;
    }

    fn compute_next_step(&mut self, time_step: f64) -> bool {
        if self.state != LayoutState::Running {
            warn!(state:? = self.state; "Step requested on a layout that is not running");
            return false;
        }

        self.system.clear_forces();
        for force in &self.forces {
            force.apply(&mut self.system);
        }

        self.integrate(time_step);
        self.enforce_bounds();

        self.energy = self.system.kinetic_energy();
        trace!(energy = self.energy, threshold = self.threshold; "Layout step computed");

        self.energy > self.threshold
    }
}
