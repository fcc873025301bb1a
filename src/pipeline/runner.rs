use crate::invoker::{ExecutionResult, Invoker};
use crate::plan::Step;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// A step ran and exited non-zero. Carries the captured output so the
/// reporting site can show the user what the external tool said.
#[derive(Debug, Error)]
#[error("`{command}` exited with a non-zero status")]
pub struct StepFailure {
    pub command: String,
    pub result: ExecutionResult,
}

/// Sequential command runner: executes a plan in declared order, printing
/// one success line per completed step and stopping at the first failure.
pub struct Runner<'a> {
    invoker: &'a dyn Invoker,
}

impl<'a> Runner<'a> {
    pub fn new(invoker: &'a dyn Invoker) -> Self {
        Self { invoker }
    }

    /// No retries, no rollback: a failure at step N leaves the effects of
    /// steps 1..N-1 in place.
    pub async fn run(&self, steps: &[Step]) -> Result<()> {
        info!("Starting run with {} steps", steps.len());

        for (i, step) in steps.iter().enumerate() {
            debug!(
                "Executing step {}/{}: {}",
                i + 1,
                steps.len(),
                step.command_line()
            );

            // Spinner draws to stderr; hidden when stderr is not a terminal
            let spinner = ProgressBar::new_spinner();
            spinner.set_style(
                ProgressStyle::default_spinner().template("{spinner:.green} {msg} [{elapsed_precise}]")?,
            );
            spinner.set_message(step.command_line());
            spinner.enable_steady_tick(Duration::from_millis(100));

            let invoked = self.invoker.invoke(&step.argv).await;
            spinner.finish_and_clear();

            let result = invoked?;
            if !result.success {
                debug!(
                    "Step {}/{} failed with exit code {:?}",
                    i + 1,
                    steps.len(),
                    result.code
                );
                return Err(StepFailure {
                    command: step.command_line(),
                    result,
                }
                .into());
            }

            println!("{}", step.success_message);
            debug!("Step {}/{} completed successfully", i + 1, steps.len());
        }

        info!("All steps completed");
        Ok(())
    }
}
