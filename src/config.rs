//! Runtime configuration, read once from the environment at startup.

use std::env;
use std::time::Duration;

use tracing::warn;

/// API credential for the completion service.
pub const API_KEY_ENV_VAR: &str = "OPENAI_API_KEY";

/// Base URL of the OpenAI-compatible API.
pub const API_BASE_ENV_VAR: &str = "GITMSG_API_BASE";

/// Instruction sent after the staged diff.
pub const COMMIT_PROMPT_ENV_VAR: &str = "GITMSG_COMMIT_PROMPT";

/// Instruction sent after the branch diff.
pub const PR_PROMPT_ENV_VAR: &str = "GITMSG_PR_PROMPT";

/// Branch compared against by `--pr` when `--branch` is not given.
pub const DEFAULT_BRANCH_ENV_VAR: &str = "GITMSG_DEFAULT_BRANCH";

/// Timeout for each git subprocess, in seconds.
pub const GIT_TIMEOUT_ENV_VAR: &str = "GITMSG_GIT_TIMEOUT";

/// Timeout for the completion request, in seconds.
pub const COMPLETION_TIMEOUT_ENV_VAR: &str = "GITMSG_COMPLETION_TIMEOUT";

const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
const DEFAULT_BRANCH: &str = "origin/main";
const DEFAULT_GIT_TIMEOUT_SECS: u64 = 60;
const DEFAULT_COMPLETION_TIMEOUT_SECS: u64 = 120;

/// Everything the pipeline needs from the outside world.
///
/// Built once in `main` and handed by value to the completion client and
/// the dispatcher. Missing prompts are allowed and become empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_key: Option<String>,
    pub api_base: String,
    pub commit_prompt: String,
    pub pr_prompt: String,
    pub default_branch: String,
    pub git_timeout: Duration,
    pub completion_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: DEFAULT_API_BASE.to_string(),
            commit_prompt: String::new(),
            pr_prompt: String::new(),
            default_branch: DEFAULT_BRANCH.to_string(),
            git_timeout: Duration::from_secs(DEFAULT_GIT_TIMEOUT_SECS),
            completion_timeout: Duration::from_secs(DEFAULT_COMPLETION_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated the same as unset ones.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let defaults = Self::default();

        Self {
            api_key: get(API_KEY_ENV_VAR),
            api_base: get(API_BASE_ENV_VAR)
                .map(|base| base.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base),
            commit_prompt: get(COMMIT_PROMPT_ENV_VAR).unwrap_or_default(),
            pr_prompt: get(PR_PROMPT_ENV_VAR).unwrap_or_default(),
            default_branch: get(DEFAULT_BRANCH_ENV_VAR).unwrap_or(defaults.default_branch),
            git_timeout: parse_timeout(
                GIT_TIMEOUT_ENV_VAR,
                get(GIT_TIMEOUT_ENV_VAR),
                DEFAULT_GIT_TIMEOUT_SECS,
            ),
            completion_timeout: parse_timeout(
                COMPLETION_TIMEOUT_ENV_VAR,
                get(COMPLETION_TIMEOUT_ENV_VAR),
                DEFAULT_COMPLETION_TIMEOUT_SECS,
            ),
        }
    }
}

/// Parse a timeout in seconds, warning and falling back on bad input.
fn parse_timeout(var: &str, value: Option<String>, default_secs: u64) -> Duration {
    match value {
        Some(v) => match v.trim().parse::<u64>() {
            Ok(secs) => Duration::from_secs(secs),
            Err(_) => {
                warn!(
                    "Invalid {} value '{}', using default {}s",
                    var, v, default_secs
                );
                Duration::from_secs(default_secs)
            }
        },
        None => Duration::from_secs(default_secs),
    }
}
