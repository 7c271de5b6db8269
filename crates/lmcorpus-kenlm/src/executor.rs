//! # Tool Executors

use std::{
    io::{self, Write},
    process::{Command, Stdio},
};

use crate::{ToolInvocation, ToolchainError, ToolchainResult};

/// Runs [`ToolInvocation`]s.
pub trait ToolExecutor {
    /// Run one invocation to completion.
    ///
    /// ## Errors
    /// * [`ToolchainError::Launch`] if the program could not be started.
    /// * [`ToolchainError::StageFailed`] if it exited unsuccessfully.
    fn execute(
        &mut self,
        invocation: &ToolInvocation,
    ) -> ToolchainResult<()>;
}

/// Spawns each invocation as a child process, inheriting stdout and stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessExecutor;

impl ToolExecutor for ProcessExecutor {
    fn execute(
        &mut self,
        invocation: &ToolInvocation,
    ) -> ToolchainResult<()> {
        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args);
        if invocation.stdin.is_some() {
            cmd.stdin(Stdio::piped());
        }

        let launch_error = |source| ToolchainError::Launch {
            stage: invocation.stage,
            program: invocation.program.clone(),
            source,
        };

        let mut child = cmd.spawn().map_err(launch_error)?;
        let mut piped = Ok(());
        if let Some(data) = &invocation.stdin
            && let Some(mut stdin) = child.stdin.take()
        {
            // Dropping stdin closes the pipe.
            piped = match stdin.write_all(data) {
                Err(err) if err.kind() == io::ErrorKind::BrokenPipe => {
                    log::debug!("{} stage closed its stdin early", invocation.stage);
                    Ok(())
                }
                other => other,
            };
        }

        // Always reap the child; its exit status outranks a write error.
        let status = child.wait()?;
        if !status.success() {
            return Err(ToolchainError::StageFailed {
                stage: invocation.stage,
                status: status.to_string(),
            });
        }
        piped?;
        Ok(())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::ToolStage;

    #[test]
    fn test_success_and_failure() {
        let mut executor = ProcessExecutor;

        let ok = ToolInvocation::new(ToolStage::Estimate, "sh").args(["-c", "exit 0"]);
        executor.execute(&ok).unwrap();

        let failed = ToolInvocation::new(ToolStage::Binarize, "sh").args(["-c", "exit 3"]);
        match executor.execute(&failed) {
            Err(ToolchainError::StageFailed { stage, status }) => {
                assert_eq!(stage, ToolStage::Binarize);
                assert!(status.contains('3'), "{status}");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_launch_failure() {
        let mut executor = ProcessExecutor;
        let missing = ToolInvocation::new(ToolStage::Filter, "/nonexistent/kenlm/filter");
        assert!(matches!(
            executor.execute(&missing),
            Err(ToolchainError::Launch {
                stage: ToolStage::Filter,
                ..
            })
        ));
    }

    #[test]
    fn test_stage_exiting_before_reading_stdin() {
        let inv = ToolInvocation::new(ToolStage::Filter, "sh")
            .args(["-c", "exit 3"])
            .with_stdin(vec![b'x'; 4 << 20]);

        match ProcessExecutor.execute(&inv) {
            Err(ToolchainError::StageFailed { stage, status }) => {
                assert_eq!(stage, ToolStage::Filter);
                assert!(status.contains('3'), "{status}");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_stage_ignoring_stdin_can_succeed() {
        let inv = ToolInvocation::new(ToolStage::Filter, "sh")
            .args(["-c", "exit 0"])
            .with_stdin(vec![b'x'; 4 << 20]);
        ProcessExecutor.execute(&inv).unwrap();
    }

    #[test]
    fn test_stdin_is_piped() {
        let dir = tempdir::TempDir::new("executor").unwrap();
        let out = dir.path().join("stdin.txt");

        let inv = ToolInvocation::new(ToolStage::Filter, "sh")
            .arg("-c")
            .arg(format!("cat > '{}'", out.display()))
            .with_stdin(b"the\ncat".to_vec());
        ProcessExecutor.execute(&inv).unwrap();

        assert_eq!(std::fs::read_to_string(&out).unwrap(), "the\ncat");
    }
}
