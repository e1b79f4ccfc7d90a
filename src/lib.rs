//! DockerLens is a CLI tool for inspecting Docker images.
//!
//! This library provides functionality to:
//! - Run the docker CLI behind a replaceable `CommandRunner`
//! - Extract an image's size, base image, layers and interpreter versions
//! - Render the findings as an aligned table or as JSON

pub mod cli;
pub mod config;
pub mod docker;
pub mod error;

// Re-export commonly used types
pub use cli::{
    ui::{DefaultUI, UserInterface},
    Cli,
};
pub use config::{InterpreterProbe, LensConfig};
pub use docker::{
    CommandOutput, CommandRunner, ImageInspector, ImageReport, ProcessRunner, ReportRow,
};
pub use error::LensError;
pub type Result<T> = std::result::Result<T, LensError>;
