//! Configuration management for DockerLens.
//!
//! This module holds the settings that shape an inspection run: which
//! docker executable to call, which interpreters to probe inside the
//! image, and how the result table is laid out.

use crate::error::LensError;
use crate::Result;

/// An interpreter whose version is probed by running it inside the image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterpreterProbe {
    /// Row label in the report
    pub label: String,
    /// Human name used in the fallback text
    pub name: String,
    /// Binary invoked inside the container
    pub binary: String,
}

impl InterpreterProbe {
    pub fn new(
        label: impl Into<String>,
        name: impl Into<String>,
        binary: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            name: name.into(),
            binary: binary.into(),
        }
    }

    /// Text shown when the interpreter cannot be run
    pub fn not_found(&self) -> String {
        format!("{} not found", self.name)
    }
}

/// Configuration for an inspection run
#[derive(Debug, Clone)]
pub struct LensConfig {
    /// Docker executable, looked up on PATH unless it is a path
    pub engine: String,
    /// Interpreter probes, in row order
    pub interpreters: Vec<InterpreterProbe>,
    /// Minimum width of the label column
    pub label_width: usize,
    /// Spaces between columns
    pub column_padding: usize,
}

impl Default for LensConfig {
    fn default() -> Self {
        Self {
            engine: "docker".to_string(),
            interpreters: vec![
                InterpreterProbe::new("Python Version", "Python", "python"),
                InterpreterProbe::new("Pip Version", "Pip", "pip"),
            ],
            label_width: 20,
            column_padding: 2,
        }
    }
}

impl LensConfig {
    /// Create a default configuration that calls a different docker executable
    pub fn with_engine(engine: impl Into<String>) -> Self {
        Self {
            engine: engine.into(),
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.engine.trim().is_empty() {
            return Err(LensError::Config(
                "Engine executable must not be empty".to_string(),
            ));
        }

        if let Some(probe) = self
            .interpreters
            .iter()
            .find(|probe| probe.binary.trim().is_empty())
        {
            return Err(LensError::Config(format!(
                "Interpreter probe '{}' has no binary",
                probe.label
            )));
        }

        Ok(())
    }
}
