//! CLI logic for the Tensile layout tool.
//!
//! Reads a graph file, lays it out with the configured force-based layout
//! and prints one `name x y` line per node to stdout.

pub mod error_adapter;

mod args;
mod config;
mod error;
mod graph_file;

pub use args::Args;
pub use error::CliError;
pub use graph_file::{GraphFile, GraphFileError};

use std::{
    fmt::Write as _,
    fs,
    io::{self, Write as _},
};

use log::{info, warn};

use tensile::{
    config::{AppConfig, SimulationConfig},
    graph::layout_graph,
};

/// Step limit used when neither the configuration nor the command line sets one.
pub const DEFAULT_MAX_STEPS: usize = 10_000;

/// Run the Tensile CLI application
///
/// Lays out the input graph and prints the final positions to stdout.
///
/// # Errors
///
/// Returns `CliError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Malformed graph files
/// - Invalid layout settings
pub fn run(args: &Args) -> Result<(), CliError> {
    let output = layout_positions(args)?;
    io::stdout().lock().write_all(output.as_bytes())?;
    Ok(())
}

/// Lay out the input graph and format one `name x y` line per node
///
/// Loads the configuration and applies command-line overrides. The run is
/// capped at [`DEFAULT_MAX_STEPS`] unless a limit is configured.
///
/// # Errors
///
/// Same as [`run`].
pub fn layout_positions(args: &Args) -> Result<String, CliError> {
    info!(input_path = args.input; "Processing graph");

    let config = apply_overrides(config::load_config(args.config.as_ref())?, args);

    let source = fs::read_to_string(&args.input)?;
    let graph = GraphFile::parse(&source)?.to_graph()?;

    let placed = layout_graph(&graph, &config)?;
    let summary = placed.summary();
    if summary.settled() {
        info!(steps = summary.steps(); "Layout settled");
    } else {
        warn!(steps = summary.steps(); "Layout stopped before settling");
    }

    let mut output = String::new();
    for (node, position) in placed.positions() {
        writeln!(output, "{} {:.6} {:.6}", graph[*node], position.x(), position.y())
            .expect("Writing to String buffer is infallible");
    }

    Ok(output)
}

fn apply_overrides(config: AppConfig, args: &Args) -> AppConfig {
    let mut layout = config.layout().clone();
    if let Some(seed) = args.seed {
        layout = layout.with_seed(seed);
    }

    let simulation = config.simulation();
    let max_steps = args
        .max_steps
        .or(simulation.max_steps())
        .unwrap_or(DEFAULT_MAX_STEPS);
    let simulation = SimulationConfig::new(simulation.time_step(), Some(max_steps));

    AppConfig::new(layout, simulation)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> Args {
        Args {
            input: "graph.toml".to_string(),
            config: None,
            seed: None,
            max_steps: None,
            log_level: "off".to_string(),
        }
    }

    #[test]
    fn test_no_overrides_keep_config() {
        let config: AppConfig =
            toml::from_str("[layout]\nseed = 3\n[simulation]\nmax_steps = 10").unwrap();
        let config = apply_overrides(config, &args());
        assert_eq!(config.layout().seed(), Some(3));
        assert_eq!(config.simulation().max_steps(), Some(10));
    }

    #[test]
    fn test_overrides_win() {
        let config: AppConfig =
            toml::from_str("[layout]\nseed = 3\n[simulation]\ntime_step = 0.5").unwrap();
        let args = Args {
            seed: Some(9),
            max_steps: Some(40),
            ..args()
        };
        let config = apply_overrides(config, &args);
        assert_eq!(config.layout().seed(), Some(9));
        assert_eq!(config.simulation().max_steps(), Some(40));
        assert_eq!(config.simulation().time_step(), 0.5);
    }

    #[test]
    fn test_step_limit_defaults_when_unset() {
        let config = apply_overrides(AppConfig::default(), &args());
        assert_eq!(config.simulation().max_steps(), Some(DEFAULT_MAX_STEPS));
    }

    #[test]
    fn test_bounded_repulsion_stops_at_default_limit() {
        let config: AppConfig = toml::from_str(
            r#"
            [layout]
            seed = 5
            bounds = [1.0]
            forces = [{ kind = "repulsion", strength = 2.0 }]
            "#,
        )
        .unwrap();
        let config = apply_overrides(config, &args());

        let file = GraphFile::parse(r#"nodes = ["a", "b", "c", "d", "e", "f"]"#).unwrap();
        let graph = file.to_graph().unwrap();

        let placed = layout_graph(&graph, &config).unwrap();
        assert!(!placed.summary().settled());
        assert_eq!(placed.summary().steps(), DEFAULT_MAX_STEPS);
    }
}
