//! Command-line flags and their translation into an [`Invocation`].

use clap::{CommandFactory, Parser};
use tracing::warn;

use crate::dispatch::{Invocation, PrTarget};

/// Write commit messages and PR descriptions from your git diff.
#[derive(Parser, Debug)]
#[command(name = "gitmsg")]
#[command(about = "Write commit messages and PR descriptions from your git diff")]
#[command(version, disable_help_flag = true)]
pub struct Cli {
    /// Print help
    #[arg(short, long)]
    pub help: bool,

    /// Amend the last commit with the staged changes, keeping its message
    #[arg(long)]
    pub amend: bool,

    /// Undo the last commit, keeping its changes staged
    #[arg(long)]
    pub undo: bool,

    /// Describe a pull request from the diff against a branch
    #[arg(long)]
    pub pr: bool,

    /// Branch to compare against with --pr (defaults to GITMSG_DEFAULT_BRANCH or origin/main)
    #[arg(long, value_name = "NAME")]
    pub branch: Option<String>,

    /// Restrict the --pr diff to these paths
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,
}

impl Cli {
    /// Rendered `--help` text.
    pub fn usage() -> String {
        Cli::command().render_help().to_string()
    }

    /// Resolve flags to a single mode.
    ///
    /// Priority: help, amend, undo, pr, then commit. The first set flag wins
    /// and the rest are ignored.
    pub fn into_invocation(self) -> Invocation {
        if self.help {
            return Invocation::Help {
                usage: Self::usage(),
            };
        }
        if self.amend {
            return Invocation::Amend;
        }
        if self.undo {
            return Invocation::Undo;
        }
        if self.pr {
            return Invocation::DescribePr(PrTarget {
                branch: self.branch,
                paths: self.paths,
            });
        }

        if self.branch.is_some() || !self.paths.is_empty() {
            warn!("--branch and paths only apply with --pr; ignoring them");
        }
        Invocation::Commit
    }
}
