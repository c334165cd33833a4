//! Commands that change repository state.

use crate::process::CommandLine;

use super::GIT;

/// `git commit -F -`: commit with the message read from stdin.
pub fn commit_from_stdin() -> CommandLine {
    CommandLine::new(GIT).args(["commit", "-F", "-"])
}

/// `git commit --amend --no-edit`: fold staged changes into the last commit.
pub fn amend_no_edit() -> CommandLine {
    CommandLine::new(GIT).args(["commit", "--amend", "--no-edit"])
}

/// `git reset --soft HEAD~1`: drop the last commit but keep its changes staged.
pub fn soft_reset_one() -> CommandLine {
    CommandLine::new(GIT).args(["reset", "--soft", "HEAD~1"])
}
