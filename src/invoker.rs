use anyhow::{Context, Result};
use async_trait::async_trait;
use thiserror::Error;
use tokio::process::Command;
use tracing::debug;

/// Captured outcome of one external command invocation.
///
/// Transient: the runner consumes it immediately. On failure it rides inside
/// the error value up to the reporting site.
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ExecutionResult {
    pub fn from_output(output: std::process::Output) -> Self {
        Self {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

#[derive(Debug, Error)]
pub enum InvokeError {
    #[error("failed to launch `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot invoke an empty argument list")]
    EmptyArgv,
}

/// Capability to run one external command and capture its output.
///
/// The pipeline runner only talks to this trait, so tests can substitute a
/// scripted fake instead of a real tool.
#[async_trait]
pub trait Invoker: Send + Sync {
    async fn invoke(&self, argv: &[String]) -> Result<ExecutionResult, InvokeError>;
}

/// Spawns real processes and waits for them to exit.
pub struct SystemInvoker;

#[async_trait]
impl Invoker for SystemInvoker {
    async fn invoke(&self, argv: &[String]) -> Result<ExecutionResult, InvokeError> {
        let (program, args) = argv.split_first().ok_or(InvokeError::EmptyArgv)?;

        debug!("Spawning: {:?}", argv);

        // stdin stays inherited; git may prompt for credentials
        let output = Command::new(program)
            .args(args)
            .output()
            .await
            .map_err(|source| InvokeError::Spawn {
                program: program.clone(),
                source,
            })?;

        Ok(ExecutionResult::from_output(output))
    }
}

/// Check that git can actually be invoked before running a plan.
pub async fn check_git_available(invoker: &dyn Invoker) -> Result<()> {
    debug!("Checking git availability...");

    let argv: Vec<String> = ["git", "--version"].iter().map(|s| s.to_string()).collect();
    let result = invoker
        .invoke(&argv)
        .await
        .context("git does not appear to be installed or is not on PATH")?;

    if !result.success {
        anyhow::bail!("`git --version` exited with a non-zero status");
    }

    debug!("Detected {}", result.stdout.trim());
    Ok(())
}
