/// One external command plus the confirmation line printed when it succeeds.
///
/// Steps are plain data: they describe what to run, not how to run it.
#[derive(Debug, Clone)]
pub struct Step {
    pub argv: Vec<String>,
    pub success_message: String,
}

impl Step {
    pub fn new(argv: &[&str], success_message: impl Into<String>) -> Self {
        Self {
            argv: argv.iter().map(|s| s.to_string()).collect(),
            success_message: success_message.into(),
        }
    }

    /// Rendered command line for logs and dry-run output.
    pub fn command_line(&self) -> String {
        self.argv.join(" ")
    }
}

/// Stage everything, commit with the given message, and push.
pub fn commit_and_push(message: &str) -> Vec<Step> {
    vec![
        Step::new(&["git", "add", "."], "Successfully staged all changes."),
        Step::new(
            &["git", "commit", "-m", message],
            format!("Successfully committed changes with message: '{}'", message),
        ),
        Step::new(
            &["git", "push"],
            "Successfully pushed changes to the remote repository.",
        ),
    ]
}

/// Push already-committed changes to the remote.
pub fn push_only() -> Vec<Step> {
    vec![Step::new(
        &["git", "push"],
        "Successfully pushed changes to the remote repository.",
    )]
}
