//! Terminal utilities for CLI formatting.
//!
//! This module provides functionality for rendering the
//! property/value report table.

use std::io::{self, BufWriter, Write};

use console::style;
use pad::{Alignment, PadStr};

use crate::config::LensConfig;
use crate::docker::ImageReport;

const TITLE: &str = "DockerLens - Docker Image Inspector";

/// A two-column table with right-aligned labels
pub struct TableFormatter {
    /// Minimum width a label is padded to before alignment
    label_width: usize,
    /// Spaces between the label column and the value
    padding: usize,
    rows: Vec<(String, String)>,
}

impl TableFormatter {
    /// Create a new table formatter with a `Property`/`Value` header
    pub fn new(label_width: usize, padding: usize) -> Self {
        Self {
            label_width,
            padding,
            rows: vec![("Property".to_string(), "Value".to_string())],
        }
    }

    pub fn from_config(config: &LensConfig) -> Self {
        Self::new(config.label_width, config.column_padding)
    }

    /// Queue a row of data
    pub fn add_row(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.rows.push((label.into(), value.into()));
    }

    /// Write all queued rows.
    ///
    /// A multi-line value keeps its later lines at the start of the line,
    /// the way a tab-stop writer ends a column at a line without a cell.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let cells: Vec<String> = self
            .rows
            .iter()
            .map(|(label, _)| {
                let width = self.label_width.max(label.chars().count() + self.padding);
                format!("{:<width$}", label, width = width)
            })
            .collect();
        let column = cells
            .iter()
            .map(|cell| cell.chars().count())
            .max()
            .unwrap_or_default()
            + self.padding;

        for (cell, (_, value)) in cells.iter().zip(&self.rows) {
            writeln!(
                out,
                "{}{}",
                cell.pad_to_width_with_alignment(column, Alignment::Right),
                value
            )?;
        }
        Ok(())
    }
}

/// Print the titled report table to stdout, flushing once at the end
pub fn print_report(report: &ImageReport, config: &LensConfig) -> io::Result<()> {
    let mut table = TableFormatter::from_config(config);
    for row in &report.rows {
        table.add_row(row.label.as_str(), row.value.as_str());
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    writeln!(out)?;
    writeln!(out, "{}", style(TITLE).bold())?;
    table.write_to(&mut out)?;
    out.flush()
}
