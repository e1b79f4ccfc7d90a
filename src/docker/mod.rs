//! Docker CLI access for inspecting images.
//!
//! This module provides:
//! - A `CommandRunner` seam over child processes
//! - An `ImageInspector` that turns docker output into report rows

pub mod inspector;
pub mod runner;
pub mod types;

pub use self::inspector::{find_base_image, parse_size, ImageInspector};
pub use self::runner::{CommandRunner, ProcessRunner};
pub use self::types::{format_size, CommandOutput, ImageReport, ReportRow};
