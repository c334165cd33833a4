//! What the user asked for, already resolved to exactly one mode.

/// One run's intent. Built once from CLI flags, never inspected as raw flags again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Print usage and stop.
    Help { usage: String },
    /// Amend the last commit, keeping its message.
    Amend,
    /// Soft-reset the last commit.
    Undo,
    /// Describe a pull request from a branch diff.
    DescribePr(PrTarget),
    /// Generate a message for the staged changes and commit them.
    Commit,
}

/// Branch and paths a PR description is computed against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrTarget {
    /// Branch to compare with; the configured default when `None`.
    pub branch: Option<String>,
    /// Paths the diff is restricted to; empty means everything.
    pub paths: Vec<String>,
}
