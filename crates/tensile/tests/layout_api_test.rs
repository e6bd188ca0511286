//! Integration tests for the public layout API
//!
//! These tests drive the engine only through what the crate exports.

use std::{cell::Cell, rc::Rc};

use tensile::{
    Edge, Force, ForceBasedLayout, GraphLayout, LayoutState, ParticleSystem, RepulsionForce,
    Simulation, SimulationEvent, SpringForce, config::LayoutConfig, geometry::Rect,
};

/// Pulls every particle towards the origin.
#[derive(Debug)]
struct CenterGravity(f64);

impl<N, E> Force<N, E> for CenterGravity {
    fn name(&self) -> &'static str {
        "center_gravity"
    }

    fn apply(&self, system: &mut ParticleSystem<N, E>) {
        for index in system.indices() {
            let position = system.particle(index).position();
            system.add_force(index, -position.scale(self.0));
        }
    }
}

fn ring(size: usize) -> (Vec<String>, Vec<Edge<String>>) {
    let nodes: Vec<String> = (0..size).map(|i| format!("n{i}")).collect();
    let edges = (0..size)
        .map(|i| Edge::new(nodes[i].clone(), nodes[(i + 1) % size].clone()))
        .collect();
    (nodes, edges)
}

#[test]
fn test_ring_settles() {
    let (nodes, edges) = ring(6);
    let layout = ForceBasedLayout::new().with_seed(3).with_standard_forces();
    let mut simulation = Simulation::new(layout)
        .with_nodes(nodes)
        .with_edges(edges)
        .with_max_steps(100_000);

    let summary = simulation.batch_run().expect("ring should lay out");
    assert!(summary.settled(), "ring did not settle: {summary:?}");

    let layout = simulation.layout();
    assert_eq!(layout.state(), LayoutState::Terminated);
    assert!(layout.energy() <= layout.threshold());
    assert!(layout.positions().all(|(_, p)| p.is_finite()));
}

#[test]
fn test_same_seed_same_layout() {
    let run = || {
        let (nodes, edges) = ring(5);
        let mut layout = ForceBasedLayout::new().with_seed(17).with_standard_forces();
        layout.init(&nodes, &edges).unwrap();
        for _ in 0..200 {
            layout.compute_next_step(1.0);
        }
        layout.positions().map(|(_, p)| p).collect::<Vec<_>>()
    };

    assert_eq!(run(), run());
}

#[test]
fn test_custom_force() {
    let mut layout = ForceBasedLayout::new()
        .with_seed(8)
        .with_threshold(1e-9)
        .with_force(CenterGravity(0.5));
    layout.init(&["a", "b", "c"], &[] as &[Edge<&str>]).unwrap();

    for _ in 0..500 {
        layout.compute_next_step(1.0);
    }

    for (node, position) in layout.positions() {
        assert!(position.hypot() < 1e-3, "{node} not pulled in: {position:?}");
    }
}

#[test]
fn test_forces_combine_with_bounds() {
    let config: LayoutConfig = toml::from_str(
        r#"
        seed = 2
        threshold = 0.0
        bounds = [1.0, 2.0]
        forces = [{ kind = "repulsion", strength = 25.0 }]
        "#,
    )
    .unwrap();

    let mut layout = ForceBasedLayout::from_config(&config).unwrap();
    layout
        .init(&[1, 2, 3, 4, 5, 6], &[] as &[Edge<i32>])
        .unwrap();

    let rect = Rect::new(1.0, 2.0, -1.0, -2.0);
    for _ in 0..100 {
        layout.compute_next_step(1.0);
        assert!(layout.positions().all(|(_, p)| rect.contains(p)));
    }
}

#[test]
fn test_observer_sees_every_step() {
    let changes = Rc::new(Cell::new(0));
    let seen = Rc::clone(&changes);

    let layout = ForceBasedLayout::new()
        .with_seed(5)
        .with_force(RepulsionForce::default())
        .with_force(SpringForce::new());
    let mut simulation = Simulation::new(layout)
        .with_nodes(["x", "y", "z"])
        .with_edges([Edge::new("x", "y"), Edge::new("y", "z")])
        .with_max_steps(25)
        .with_observer(move |event: &SimulationEvent| {
            if let SimulationEvent::Changed { .. } = event {
                seen.set(seen.get() + 1);
            }
        });

    let summary = simulation.batch_run().unwrap();
    assert_eq!(changes.get(), summary.steps());
}

#[test]
fn test_missing_endpoint_is_reported() {
    let mut layout = ForceBasedLayout::new().with_standard_forces();
    let err = layout
        .init(&["a"], &[Edge::new("a", "ghost")])
        .unwrap_err();
    assert!(err.to_string().contains("ghost"), "unexpected message: {err}");
}
