//! Driving a [`GraphLayout`] to completion.
//!
//! A [`Simulation`] owns the graph being laid out and the layout itself. It
//! runs the init, step and terminate lifecycle and reports every transition
//! to registered [`SimulationObserver`]s, so callers such as renderers can
//! follow a layout while it settles.

use std::fmt;

use log::{debug, info};

use crate::{config::SimulationConfig, error::TensileError, layout::GraphLayout};

/// A lifecycle transition of a [`Simulation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationEvent {
    /// The layout was initialized with the simulation's graph.
    Started,
    /// One step was computed. `more` is the layout's answer to whether
    /// further steps are needed.
    Changed { step: usize, more: bool },
    /// The layout was terminated.
    Stopped,
    /// A batch run hit its step limit before the layout settled.
    Interrupted { step: usize },
}

/// Receives the events of a [`Simulation`].
///
/// Any `FnMut(&SimulationEvent)` closure is an observer.
pub trait SimulationObserver {
    fn notify(&mut self, event: &SimulationEvent);
}

impl<F> SimulationObserver for F
where
    F: FnMut(&SimulationEvent),
{
    fn notify(&mut self, event: &SimulationEvent) {
        self(event)
    }
}

/// Outcome of [`Simulation::batch_run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    steps: usize,
    settled: bool,
}

impl RunSummary {
    /// Number of steps computed
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Whether the layout reported that no more steps were needed, as opposed
    /// to the run being cut off by the step limit.
    pub fn settled(&self) -> bool {
        self.settled
    }
}

/// A graph together with the layout that positions it.
///
/// # Examples
///
/// ```
/// use tensile::{ForceBasedLayout, Simulation};
/// use tensile_core::graph::Edge;
///
/// let layout = ForceBasedLayout::new().with_seed(1).with_standard_forces();
/// let mut simulation = Simulation::new(layout)
///     .with_nodes(["a", "b"])
///     .with_edges([Edge::new("a", "b")])
///     .with_max_steps(10_000);
///
/// let summary = simulation.batch_run().unwrap();
/// assert!(summary.steps() > 0);
/// ```
pub struct Simulation<N, E, L> {
    nodes: Vec<N>,
    edges: Vec<E>,
    time_step: f64,
    max_steps: Option<usize>,
    layout: L,
    observers: Vec<Box<dyn SimulationObserver>>,
    steps: usize,
}

impl<N, E, L> Simulation<N, E, L>
where
    L: GraphLayout<N, E>,
{
    /// Creates a simulation with an empty graph and a unit time step.
    pub fn new(layout: L) -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            time_step: 1.0,
            max_steps: None,
            layout,
            observers: Vec::new(),
            steps: 0,
        }
    }

    /// Creates a simulation using the time step and step limit of `config`.
    ///
    /// # Errors
    ///
    /// Returns [`TensileError::Config`] when the configuration is invalid.
    pub fn from_config(layout: L, config: &SimulationConfig) -> Result<Self, TensileError> {
        config.validate()?;
        let mut simulation = Self::new(layout).with_time_step(config.time_step());
        simulation.max_steps = config.max_steps();
        Ok(simulation)
    }

    pub fn with_nodes(mut self, nodes: impl IntoIterator<Item = N>) -> Self {
        self.nodes.extend(nodes);
        self
    }

    pub fn with_edges(mut self, edges: impl IntoIterator<Item = E>) -> Self {
        self.edges.extend(edges);
        self
    }

    pub fn with_time_step(mut self, time_step: f64) -> Self {
        self.time_step = time_step;
        self
    }

    /// Limits [`batch_run`](Self::batch_run) to at most `max_steps` steps.
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    /// Registers an observer. Observers are notified in registration order.
    pub fn with_observer(mut self, observer: impl SimulationObserver + 'static) -> Self {
        self.subscribe(observer);
        self
    }

    pub fn subscribe(&mut self, observer: impl SimulationObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn add_node(&mut self, node: N) {
        self.nodes.push(node);
    }

    pub fn add_edge(&mut self, edge: E) {
        self.edges.push(edge);
    }

    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    pub fn edges(&self) -> &[E] {
        &self.edges
    }

    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    pub fn max_steps(&self) -> Option<usize> {
        self.max_steps
    }

    /// Steps computed since the last [`init`](Self::init)
    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn layout(&self) -> &L {
        &self.layout
    }

    pub fn layout_mut(&mut self) -> &mut L {
        &mut self.layout
    }

    /// Consumes the simulation, returning the layout.
    pub fn into_layout(self) -> L {
        self.layout
    }

    /// Initializes the layout with the current graph.
    ///
    /// # Errors
    ///
    /// Propagates the layout's initialization error. No event is emitted in
    /// that case.
    pub fn init(&mut self) -> Result<(), TensileError> {
        self.layout.init(&self.nodes, &self.edges)?;
        self.steps = 0;
        info!(nodes = self.nodes.len(), edges = self.edges.len(); "Simulation started");
        self.emit(SimulationEvent::Started);
        Ok(())
    }

    /// Computes one step and returns whether the layout needs more.
    pub fn step_run(&mut self) -> bool {
        let more = self.layout.compute_next_step(self.time_step);
        self.steps += 1;
        self.emit(SimulationEvent::Changed {
            step: self.steps,
            more,
        });
        more
    }

    pub fn terminate(&mut self) {
        self.layout.terminate();
        info!(steps = self.steps; "Simulation stopped");
        self.emit(SimulationEvent::Stopped);
    }

    /// Initializes, steps until the layout settles or the step limit is
    /// reached, then terminates.
    ///
    /// # Errors
    ///
    /// Propagates the layout's initialization error; the layout is neither
    /// stepped nor terminated in that case.
    pub fn batch_run(&mut self) -> Result<RunSummary, TensileError> {
        self.init()?;

        let settled = loop {
            if self.max_steps.is_some_and(|max| self.steps >= max) {
                debug!(step = self.steps; "Step limit reached");
                self.emit(SimulationEvent::Interrupted { step: self.steps });
                break false;
            }
            if !self.step_run() {
                break true;
            }
        };

        self.terminate();
        Ok(RunSummary {
            steps: self.steps,
            settled,
        })
    }

    fn emit(&mut self, event: SimulationEvent) {
        for observer in &mut self.observers {
            observer.notify(&event);
        }
    }
}

impl<N, E, L> fmt::Debug for Simulation<N, E, L>
where
    N: fmt::Debug,
    E: fmt::Debug,
    L: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Simulation")
            .field("nodes", &self.nodes)
            .field("edges", &self.edges)
            .field("time_step", &self.time_step)
            .field("max_steps", &self.max_steps)
            .field("layout", &self.layout)
            .field("observers", &self.observers.len())
            .field("steps", &self.steps)
            .finish()
    }
}
