//! Dispatch pipeline: diff → completion → git action.
//!
//! Runs one [`Invocation`] to completion and reports a single [`Outcome`].
//! Empty diffs stop the run before the completion service is contacted.

pub mod invocation;
pub mod outcome;

use tracing::debug;

use crate::completion::CompletionClient;
use crate::config::Config;
use crate::error::DispatchError;
use crate::git;
use crate::process::ProcessRunner;

pub use invocation::{Invocation, PrTarget};
pub use outcome::{Completed, FAILURE_EXIT_CODE, Outcome, SUCCESS_EXIT_CODE};

const SEPARATOR: &str = "--------------------";

/// Drives one run of the pipeline.
pub struct Dispatcher<R, C> {
    runner: R,
    client: C,
    config: Config,
}

impl<R: ProcessRunner, C: CompletionClient> Dispatcher<R, C> {
    pub fn new(runner: R, client: C, config: Config) -> Self {
        Self {
            runner,
            client,
            config,
        }
    }

    /// Execute `invocation` and report how it ended.
    pub async fn run(&self, invocation: &Invocation) -> Outcome {
        self.execute(invocation).await.into()
    }

    async fn execute(&self, invocation: &Invocation) -> Result<Completed, DispatchError> {
        match invocation {
            Invocation::Help { usage } => {
                println!("{}", usage);
                Ok(Completed::HelpShown)
            }
            Invocation::Amend => {
                self.runner.run(&git::amend_no_edit(), None).await?;
                Ok(Completed::Amended)
            }
            Invocation::Undo => {
                self.runner.run(&git::soft_reset_one(), None).await?;
                println!("Last commit undone; its changes are still staged.");
                Ok(Completed::Undone)
            }
            Invocation::DescribePr(target) => self.describe_pr(target).await,
            Invocation::Commit => self.commit().await,
        }
    }

    async fn commit(&self) -> Result<Completed, DispatchError> {
        let diff = self.runner.run(&git::staged_diff(), None).await?;
        if diff.trim().is_empty() {
            println!("No staged changes to commit");
            return Ok(Completed::NothingToCommit);
        }

        let message = self
            .generate(&diff, &self.config.commit_prompt, "commit message")
            .await?;

        println!("\n{SEPARATOR}\n");
        println!("Committing with:");
        println!("{}", message);
        println!("\n{SEPARATOR}\n");

        self.runner
            .run(&git::commit_from_stdin(), Some(&message))
            .await?;

        println!("\nIf you need to modify the commit, run gitmsg --amend");
        println!("If you want to regenerate the message, run gitmsg --undo && gitmsg\n");

        Ok(Completed::Committed(message))
    }

    async fn describe_pr(&self, target: &PrTarget) -> Result<Completed, DispatchError> {
        let branch = target
            .branch
            .as_deref()
            .unwrap_or(&self.config.default_branch);

        let diff = self
            .runner
            .run(&git::branch_diff(branch, &target.paths), None)
            .await?;
        if diff.trim().is_empty() {
            println!("No changes against {} to describe", branch);
            return Ok(Completed::NothingToDescribe);
        }

        let description = self
            .generate(&diff, &self.config.pr_prompt, "PR description")
            .await?;

        println!("{}", description);

        Ok(Completed::PrDescribed(description))
    }

    /// Ask for a completion and insist on non-blank text.
    async fn generate(
        &self,
        diff: &str,
        instruction: &str,
        expected: &'static str,
    ) -> Result<String, DispatchError> {
        debug!("Generating {} from {} chars of diff", expected, diff.len());

        let text = self.client.complete(diff, instruction).await?;

        text.map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or(DispatchError::NoUsableCompletion { expected })
    }
}
