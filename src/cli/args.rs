//! Command line argument parsing for DockerLens.
//!
//! This module handles parsing of command line arguments
//! using the clap crate.

use clap::Parser;

use crate::config::LensConfig;

/// Inspect a Docker image for useful metadata
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Image to inspect; prompted for when omitted
    pub image: Option<String>,

    /// Enable verbose output for detailed processing information
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the report as JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Docker executable to run
    #[arg(long, value_name = "PATH", default_value = "docker")]
    pub engine: String,
}

impl Cli {
    /// Build the run configuration from the parsed flags
    pub fn config(&self) -> LensConfig {
        LensConfig::with_engine(self.engine.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["dockerlens"]);
        assert!(cli.image.is_none());
        assert!(!cli.verbose);
        assert!(!cli.json);
        assert_eq!(cli.config().engine, "docker");
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::parse_from([
            "dockerlens",
            "-v",
            "--json",
            "--engine",
            "/opt/docker/bin/docker",
            "python:3.11-slim",
        ]);
        assert_eq!(cli.image.as_deref(), Some("python:3.11-slim"));
        assert!(cli.verbose);
        assert!(cli.json);
        assert_eq!(cli.config().engine, "/opt/docker/bin/docker");
    }
}
