use serde::Serialize;

use crate::error::LensError;
use crate::Result;

/// Format a byte size into a human readable string
pub fn format_size(bytes: i64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    format!("{:.2} {}", size, UNITS[unit_index])
}

/// Captured result of a finished process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Program that was run
    pub program: String,
    /// Standard output and standard error, in the order they were written
    pub text: String,
    /// Exit code, `None` when terminated by a signal
    pub code: Option<i32>,
    /// Whether the process exited successfully
    pub success: bool,
}

impl CommandOutput {
    /// A successful run that printed `text`
    pub fn success(program: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            text: text.into(),
            code: Some(0),
            success: true,
        }
    }

    /// A run that exited with a non-zero `code`
    pub fn failure(program: impl Into<String>, text: impl Into<String>, code: i32) -> Self {
        Self {
            program: program.into(),
            text: text.into(),
            code: Some(code),
            success: false,
        }
    }

    /// Turn an unsuccessful exit into an error, keeping the output otherwise
    pub fn into_result(self) -> Result<String> {
        if self.success {
            Ok(self.text)
        } else {
            Err(LensError::CommandFailed {
                program: self.program,
                code: self.code,
                output: self.text,
            })
        }
    }
}

/// One labeled value in the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub label: String,
    pub value: String,
}

impl ReportRow {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Everything gathered about one image, in display order
#[derive(Debug, Clone, Serialize)]
pub struct ImageReport {
    pub image: String,
    pub rows: Vec<ReportRow>,
}

impl ImageReport {
    /// Look up a row value by its label
    pub fn value(&self, label: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|row| row.label == label)
            .map(|row| row.value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_below_one_kilobyte() {
        for n in [0, 1, 512, 1023] {
            assert_eq!(format_size(n), format!("{}.00 B", n));
        }
    }

    #[test]
    fn test_unit_thresholds() {
        assert_eq!(format_size(1024), "1.00 KB");
        assert_eq!(format_size(1536), "1.50 KB");
        assert_eq!(format_size(1024 * 1024 - 1), "1024.00 KB");
        assert_eq!(format_size(1024 * 1024), "1.00 MB");
        assert_eq!(format_size(1024_i64.pow(3)), "1.00 GB");
        assert_eq!(format_size(1024_i64.pow(4)), "1.00 TB");
    }

    #[test]
    fn test_never_scales_past_terabytes() {
        assert_eq!(format_size(1024_i64.pow(5)), "1024.00 TB");
        assert_eq!(format_size(i64::MAX), "8388608.00 TB");
    }

    #[test]
    fn test_success_passes_text_through() {
        let output = CommandOutput::success("docker", "2048\n");
        assert_eq!(output.into_result().unwrap(), "2048\n");
    }

    #[test]
    fn test_failure_becomes_error() {
        let output = CommandOutput::failure("docker", "Error: No such image: nope", 1);
        match output.into_result() {
            Err(LensError::CommandFailed {
                program,
                code,
                output,
            }) => {
                assert_eq!(program, "docker");
                assert_eq!(code, Some(1));
                assert_eq!(output, "Error: No such image: nope");
            }
            other => panic!("Expected CommandFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_report_lookup() {
        let report = ImageReport {
            image: "alpine".to_string(),
            rows: vec![ReportRow::new("Image", "alpine"), ReportRow::new("Size", "1.00 KB")],
        };
        assert_eq!(report.value("Size"), Some("1.00 KB"));
        assert_eq!(report.value("Layers"), None);
    }
}
