//! Command-line argument definitions for the Tensile CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the input graph, the configuration file,
//! and logging verbosity, and can override a few layout settings.

use clap::Parser;

/// Command-line arguments for the Tensile layout tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input graph file (TOML)
    #[arg(help = "Path to the input graph file")]
    pub input: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Seed for initial positions, overriding the configuration
    #[arg(long)]
    pub seed: Option<u64>,

    /// Maximum number of steps, overriding the configuration (default 10000)
    #[arg(long)]
    pub max_steps: Option<usize>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
