use std::io::Read;
use std::process::{Command, ExitStatus, Stdio};

use async_trait::async_trait;
use tracing::debug;

use crate::error::LensError;
use crate::Result;

use super::types::CommandOutput;

/// Runs external programs and captures what they print
#[async_trait]
pub trait CommandRunner {
    /// Run `program` with `args` to completion.
    ///
    /// A non-zero exit is still `Ok`; only a failure to start the process
    /// is an error.
    async fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput>;
}

/// Runner backed by real child processes
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput> {
        debug!("Running {} {}", program, args.join(" "));

        let program_name = program.to_string();
        let args: Vec<String> = args.iter().map(|arg| arg.to_string()).collect();
        let (bytes, status) =
            tokio::task::spawn_blocking(move || run_combined(&program_name, &args))
                .await
                .map_err(|e| LensError::Io(std::io::Error::other(e)))??;

        debug!("{} exited with {}", program, status);

        Ok(CommandOutput {
            program: program.to_string(),
            text: String::from_utf8_lossy(&bytes).into_owned(),
            code: status.code(),
            success: status.success(),
        })
    }
}

/// Run to completion with stdout and stderr sharing one pipe, so the
/// captured bytes keep the order the child wrote them in
fn run_combined(program: &str, args: &[String]) -> Result<(Vec<u8>, ExitStatus)> {
    let (mut reader, writer) = std::io::pipe()?;

    // The builder holds the write ends; it is dropped at the end of this
    // statement so the read below sees EOF once the child exits
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(writer.try_clone()?)
        .stderr(writer)
        .spawn()
        .map_err(|e| LensError::Spawn {
            program: program.to_string(),
            source: e,
        })?;

    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let status = child.wait()?;

    Ok((bytes, status))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_binary_is_spawn_error() {
        let runner = ProcessRunner::new();
        let result = runner
            .run("dockerlens-definitely-not-a-real-binary", &["--version"])
            .await;
        match result {
            Err(LensError::Spawn { program, .. }) => {
                assert_eq!(program, "dockerlens-definitely-not-a-real-binary")
            }
            other => panic!("Expected Spawn error, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_output_is_combined() {
        let runner = ProcessRunner::new();
        let output = runner
            .run("sh", &["-c", "echo out; echo err 1>&2"])
            .await
            .unwrap();
        assert!(output.success);
        assert_eq!(output.text, "out\nerr\n");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_combined_output_keeps_write_order() {
        let runner = ProcessRunner::new();
        let output = runner
            .run(
                "sh",
                &[
                    "-c",
                    "echo 'Unable to find image locally' 1>&2; echo 'Python 3.11.4'; echo done 1>&2",
                ],
            )
            .await
            .unwrap();
        assert_eq!(
            output.text,
            "Unable to find image locally\nPython 3.11.4\ndone\n"
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_non_zero_exit_is_not_an_error() {
        let runner = ProcessRunner::new();
        let output = runner
            .run("sh", &["-c", "echo nope 1>&2; exit 3"])
            .await
            .unwrap();
        assert!(!output.success);
        assert_eq!(output.code, Some(3));
        assert_eq!(output.text, "nope\n");
    }
}
