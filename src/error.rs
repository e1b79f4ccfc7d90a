//! Error types for the DockerLens application.
use thiserror::Error;

/// Custom error type for DockerLens operations
#[derive(Debug, Error)]
pub enum LensError {
    /// The external program could not be started at all
    #[error("Failed to run {program}: {source}")]
    Spawn {
        /// Program that was being started
        program: String,
        /// Underlying OS error
        source: std::io::Error,
    },
    /// The program ran but exited unsuccessfully
    #[error("{program} exited with status {}: {output}", status_text(.code))]
    CommandFailed {
        /// Program that was run
        program: String,
        /// Exit code, if the process was not killed by a signal
        code: Option<i32>,
        /// Combined output of the failed run
        output: String,
    },
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
    /// Output rendering errors
    #[error("{message}: {source}")]
    Render {
        /// Error message
        message: String,
        /// Source of the error
        source: anyhow::Error,
    },
    /// IO operation errors
    #[error("IO error: {0}")]
    Io(std::io::Error),
    /// User interaction errors
    #[error("User input error: {0}")]
    UserInput(String),
}

fn status_text(code: &Option<i32>) -> String {
    code.map_or_else(|| "unknown".to_string(), |c| c.to_string())
}

impl From<std::io::Error> for LensError {
    fn from(err: std::io::Error) -> Self {
        LensError::Io(err)
    }
}

impl From<serde_json::Error> for LensError {
    fn from(err: serde_json::Error) -> Self {
        LensError::Render {
            message: "Failed to serialize report".to_string(),
            source: err.into(),
        }
    }
}
