use anyhow::Result;
use clap::{Parser, Subcommand};
use dialoguer::{theme::ColorfulTheme, Input};
use gitpipeline::invoker::{self, SystemInvoker};
use gitpipeline::pipeline::{Runner, StepFailure};
use gitpipeline::plan::{self, Step};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "gitpipeline",
    about = "Stage, commit, and push git changes as a single pipeline",
    version
)]
struct Args {
    #[command(subcommand)]
    command: PlanKind,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Dry run - show the commands that would run without executing them
    #[arg(long, global = true)]
    dry_run: bool,
}

#[derive(Subcommand, Debug)]
enum PlanKind {
    /// Stage all changes, commit them, and push to the remote
    Commit {
        /// Commit message; prompted for interactively when omitted
        #[arg(short, long)]
        message: Option<String>,
    },
    /// Push already-committed changes to the remote
    Push,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize tracing
    let filter = if args.verbose {
        "gitpipeline=debug,info"
    } else {
        "gitpipeline=info"
    };

    // Diagnostics go to stderr; stdout carries only the per-step output
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_failure(&err);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<()> {
    let steps = build_plan(&args.command)?;

    if args.dry_run {
        tracing::info!("Running in dry-run mode - no commands will be executed");
        for step in &steps {
            println!("dry-run: {}", step.command_line());
        }
        return Ok(());
    }

    let invoker = SystemInvoker;
    invoker::check_git_available(&invoker).await?;

    Runner::new(&invoker).run(&steps).await
}

fn build_plan(command: &PlanKind) -> Result<Vec<Step>> {
    match command {
        PlanKind::Commit { message } => {
            let message = match message {
                Some(message) => message.clone(),
                None => prompt_commit_message()?,
            };
            if message.trim().is_empty() {
                anyhow::bail!("commit message must not be empty");
            }
            Ok(plan::commit_and_push(&message))
        }
        PlanKind::Push => Ok(plan::push_only()),
    }
}

fn prompt_commit_message() -> Result<String> {
    let message: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Commit message")
        .interact_text()?;
    Ok(message)
}

fn report_failure(err: &anyhow::Error) {
    if let Some(failure) = err.downcast_ref::<StepFailure>() {
        eprintln!("An error occurred while running a git command.");
        eprintln!("Stderr: {}", failure.result.stderr);
        eprintln!("Stdout: {}", failure.result.stdout);
    } else {
        eprintln!("Error: {:#}", err);
    }
}
