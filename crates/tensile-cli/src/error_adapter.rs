//! Error adapter for converting CLI errors to miette diagnostics.
//!
//! This module provides the bridge between the standard error types of the
//! library and the CLI and miette's rich diagnostic formatting.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use tensile::TensileError;

use crate::{config::ConfigError, error::CliError, graph_file::GraphFileError};

/// Adapter rendering a [`CliError`] as a miette diagnostic.
pub struct ErrorAdapter<'a>(pub &'a CliError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.0 {
            CliError::Io(_) | CliError::Layout(TensileError::Io(_)) => "tensile::io",
            CliError::Config(_) | CliError::Layout(TensileError::Config(_)) => "tensile::config",
            CliError::Layout(TensileError::Geometry(_)) => "tensile::geometry",
            CliError::Graph(_) | CliError::Layout(TensileError::MissingEndpoint { .. }) => {
                "tensile::graph"
            }
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.0 {
            CliError::Config(ConfigError::MissingFile(_)) => {
                "check the path given with --config"
            }
            CliError::Graph(GraphFileError::UnknownNode { .. }) => {
                "every edge endpoint must be listed in `nodes`"
            }
            CliError::Layout(TensileError::Geometry(_)) => {
                "`bounds` takes between one and four values: top, right, bottom, left"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}
