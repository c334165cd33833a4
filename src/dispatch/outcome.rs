//! The single result of a dispatched run.

use std::process::ExitCode;

use crate::error::DispatchError;

/// Process status for every successful run.
pub const SUCCESS_EXIT_CODE: u8 = 0;

/// Process status for any failed run, including failures before dispatch.
pub const FAILURE_EXIT_CODE: u8 = 1;

/// Terminal state a successful run reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completed {
    HelpShown,
    Amended,
    Undone,
    /// `--pr` found no difference against the branch.
    NothingToDescribe,
    PrDescribed(String),
    /// No staged changes; nothing was committed.
    NothingToCommit,
    Committed(String),
}

/// Success or failure of a whole run. Only `main` turns this into an exit code.
#[derive(Debug)]
pub enum Outcome {
    Success(Completed),
    Failure(DispatchError),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            Outcome::Success(_) => SUCCESS_EXIT_CODE,
            Outcome::Failure(_) => FAILURE_EXIT_CODE,
        }
    }
}

impl From<&Outcome> for ExitCode {
    fn from(outcome: &Outcome) -> Self {
        ExitCode::from(outcome.exit_code())
    }
}

impl From<Result<Completed, DispatchError>> for Outcome {
    fn from(result: Result<Completed, DispatchError>) -> Self {
        match result {
            Ok(completed) => Outcome::Success(completed),
            Err(e) => Outcome::Failure(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CompletionError, ProcessError};

    #[test]
    fn test_every_success_exits_zero() {
        let states = [
            Completed::HelpShown,
            Completed::Amended,
            Completed::Undone,
            Completed::NothingToDescribe,
            Completed::PrDescribed("Adds y.".to_string()),
            Completed::NothingToCommit,
            Completed::Committed("feat: add x".to_string()),
        ];
        for state in states {
            let outcome = Outcome::Success(state.clone());
            assert_eq!(outcome.exit_code(), 0, "{:?} should exit 0", state);
            assert!(outcome.is_success());
        }
    }

    #[test]
    fn test_every_failure_exits_nonzero() {
        let errors = [
            DispatchError::Process(ProcessError::NonZeroExit {
                command: "git diff --staged".to_string(),
                code: 128,
                stderr: "fatal: not a git repository".to_string(),
            }),
            DispatchError::Process(ProcessError::NotInstalled("git".to_string())),
            DispatchError::Completion(CompletionError::MissingApiKey),
            DispatchError::Completion(CompletionError::Api {
                status: 500,
                body: "upstream".to_string(),
            }),
            DispatchError::NoUsableCompletion {
                expected: "commit message",
            },
        ];
        for error in errors {
            let outcome = Outcome::Failure(error);
            assert_eq!(outcome.exit_code(), FAILURE_EXIT_CODE);
            assert_ne!(outcome.exit_code(), 0);
            assert!(!outcome.is_success());
        }
    }

    #[test]
    fn test_result_converts_to_outcome() {
        let ok: Outcome = Ok(Completed::Amended).into();
        assert_eq!(ok.exit_code(), SUCCESS_EXIT_CODE);

        let err: Outcome = Err(DispatchError::NoUsableCompletion {
            expected: "PR description",
        })
        .into();
        assert_eq!(err.exit_code(), FAILURE_EXIT_CODE);
    }
}
