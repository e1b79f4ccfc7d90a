//! DockerLens is a CLI tool for inspecting Docker images.
//!
//! This is the main entry point that ties together the CLI interface
//! with the docker lookups.

use std::io::{self, Write};

use clap::Parser;
use dockerlens::cli::{print_report, prompt_image, Cli, DefaultUI};
use dockerlens::docker::{ImageInspector, ProcessRunner};
use tracing::{debug, Level};

#[tokio::main]
async fn main() -> dockerlens::Result<()> {
    let cli_arg_state = Cli::parse();

    // Initialize logging with appropriate level
    let level = if cli_arg_state.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let level_string = match level {
        Level::INFO => "dockerlens=info",
        _ => "dockerlens=debug",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(level_string)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .init();

    debug!("Logging initialized");

    let config = cli_arg_state.config();
    config.validate()?;

    // A failed prompt inspects the empty reference rather than aborting
    let image = match cli_arg_state.image {
        Some(image) => image,
        None => prompt_image(&DefaultUI).unwrap_or_else(|e| {
            debug!("Could not read image name: {}", e);
            String::new()
        }),
    };

    debug!("Inspecting image '{}' with {}", image, config.engine);

    let inspector = ImageInspector::new(ProcessRunner::new(), config);
    let report = inspector.inspect(&image).await;

    if cli_arg_state.json {
        let mut out = io::stdout().lock();
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        out.flush()?;
    } else {
        print_report(&report, inspector.config())?;
    }

    Ok(())
}
