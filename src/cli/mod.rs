//! CLI interface for DockerLens.
//!
//! This module provides the command-line interface components,
//! organized into submodules for different concerns:
//! - args: Command line argument parsing
//! - terminal: Table output
//! - ui: Interactive prompts

pub mod args;
pub mod terminal;
pub mod ui;

pub use terminal::{print_report, TableFormatter};

// Re-export commonly used types
pub use args::Cli;
pub use ui::{prompt_image, DefaultUI, UserInterface};
