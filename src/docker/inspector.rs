//! Metadata extraction for a single image.
//!
//! Every lookup is one docker invocation followed by light text handling.
//! Lookups never fail: a failed command or unparsable output is replaced
//! by a fixed placeholder so the report always has every row.

use tracing::debug;

use crate::config::{InterpreterProbe, LensConfig};
use crate::Result;

use super::runner::CommandRunner;
use super::types::{format_size, ImageReport, ReportRow};

const SIZE_ERROR: &str = "Error retrieving size";
const SIZE_INVALID: &str = "Invalid size format";
const LAYERS_ERROR: &str = "Error retrieving layers";
const BASE_IMAGE_ERROR: &str = "Error retrieving base image";
const BASE_IMAGE_NOT_FOUND: &str = "Base image not found";

/// Prefix docker puts in front of a `FROM` step in `{{.CreatedBy}}`
const FROM_PREFIX: &str = "/bin/sh -c #(nop) FROM ";

/// Turns docker CLI output into report rows for one image
pub struct ImageInspector<R> {
    runner: R,
    config: LensConfig,
}

impl<R: CommandRunner> ImageInspector<R> {
    pub fn new(runner: R, config: LensConfig) -> Self {
        Self { runner, config }
    }

    pub fn config(&self) -> &LensConfig {
        &self.config
    }

    /// Run the docker CLI, treating a non-zero exit as a failure
    async fn docker(&self, args: &[&str]) -> Result<String> {
        self.runner
            .run(&self.config.engine, args)
            .await?
            .into_result()
    }

    /// Image size, scaled to a readable unit
    pub async fn image_size(&self, image: &str) -> String {
        match self
            .docker(&["image", "inspect", image, "--format", "{{.Size}}"])
            .await
        {
            Ok(output) => parse_size(&output),
            Err(e) => {
                debug!("Size lookup for {} failed: {}", image, e);
                SIZE_ERROR.to_string()
            }
        }
    }

    /// One `<id>: <size>` line per layer, newest first
    pub async fn layer_history(&self, image: &str) -> String {
        match self
            .docker(&["history", "--format", "{{.ID}}: {{.Size}}", image])
            .await
        {
            Ok(output) => output.trim().to_string(),
            Err(e) => {
                debug!("Layer lookup for {} failed: {}", image, e);
                LAYERS_ERROR.to_string()
            }
        }
    }

    /// The image named by the first `FROM` step in the build history
    pub async fn base_image(&self, image: &str) -> String {
        match self
            .docker(&["history", "--format", "{{.CreatedBy}}", image])
            .await
        {
            Ok(output) => find_base_image(&output).unwrap_or_else(|| {
                debug!("No FROM step in history of {}", image);
                BASE_IMAGE_NOT_FOUND.to_string()
            }),
            Err(e) => {
                debug!("History lookup for {} failed: {}", image, e);
                BASE_IMAGE_ERROR.to_string()
            }
        }
    }

    /// Output of `<binary> --version` run in a throwaway container
    pub async fn interpreter_version(&self, image: &str, probe: &InterpreterProbe) -> String {
        match self
            .docker(&["run", "--rm", image, probe.binary.as_str(), "--version"])
            .await
        {
            Ok(output) => output.trim().to_string(),
            Err(e) => {
                debug!("{} probe in {} failed: {}", probe.name, image, e);
                probe.not_found()
            }
        }
    }

    /// Gather every row for `image`, one lookup at a time
    pub async fn inspect(&self, image: &str) -> ImageReport {
        let mut rows = vec![ReportRow::new("Image", image)];
        rows.push(ReportRow::new("Size", self.image_size(image).await));
        rows.push(ReportRow::new("Base Image", self.base_image(image).await));
        for probe in &self.config.interpreters {
            let version = self.interpreter_version(image, probe).await;
            rows.push(ReportRow::new(probe.label.as_str(), version));
        }
        rows.push(ReportRow::new("Layers", self.layer_history(image).await));

        ImageReport {
            image: image.to_string(),
            rows,
        }
    }
}

/// Parse the raw `{{.Size}}` output into a readable size
pub fn parse_size(output: &str) -> String {
    match output.trim().parse::<i64>() {
        Ok(bytes) => format_size(bytes),
        Err(_) => SIZE_INVALID.to_string(),
    }
}

/// Find the base image in `{{.CreatedBy}}` history output.
///
/// Only the exact `/bin/sh -c #(nop) FROM ` prefix is stripped; any other
/// line containing `FROM ` is returned trimmed but otherwise as is.
pub fn find_base_image(output: &str) -> Option<String> {
    output
        .split('\n')
        .find(|line| line.contains("FROM "))
        .map(|line| {
            line.strip_prefix(FROM_PREFIX)
                .unwrap_or(line)
                .trim()
                .to_string()
        })
}
