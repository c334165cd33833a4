//! Diff commands for the staged and branch-comparison cases.

use crate::process::CommandLine;

use super::GIT;

/// `git diff --staged`: the changes the next commit would record.
pub fn staged_diff() -> CommandLine {
    CommandLine::new(GIT).args(["diff", "--staged"])
}

/// `git diff <branch> [-- <paths>...]`: working tree against `branch`.
///
/// With no paths the diff is unrestricted. Paths are passed after `--` so
/// they are never mistaken for revisions.
pub fn branch_diff(branch: &str, paths: &[String]) -> CommandLine {
    let cmd = CommandLine::new(GIT).args(["diff", branch]);
    if paths.is_empty() {
        cmd
    } else {
        cmd.arg("--").args(paths.iter().cloned())
    }
}
