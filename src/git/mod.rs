//! Git command construction.
//!
//! Everything here returns a [`CommandLine`](crate::process::CommandLine) and
//! never touches the repository itself; the dispatcher decides when to run it.

pub mod actions;
pub mod diff;

pub use actions::{amend_no_edit, commit_from_stdin, soft_reset_one};
pub use diff::{branch_diff, staged_diff};

/// The git executable.
pub const GIT: &str = "git";
