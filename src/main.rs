//! gitmsg - CLI entry point.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use gitmsg::git::GIT;
use gitmsg::process::check_installed;
use gitmsg::{
    Cli, Config, Dispatcher, FAILURE_EXIT_CODE, Invocation, OpenAiClient, Outcome, ShellRunner,
};

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only the generated text.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let invocation = Cli::parse().into_invocation();

    match run(invocation).await {
        Ok(outcome) => {
            if let Outcome::Failure(e) = &outcome {
                eprintln!("Error: {}", e);
            }
            ExitCode::from(&outcome)
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(FAILURE_EXIT_CODE)
        }
    }
}

/// Set up collaborators from the environment and dispatch one invocation.
async fn run(invocation: Invocation) -> Result<Outcome> {
    let config = Config::from_env();

    if !matches!(invocation, Invocation::Help { .. }) {
        check_installed(GIT).context("git is required")?;
    }

    let runner = ShellRunner::new(config.git_timeout);
    let client = OpenAiClient::new(config.clone())
        .context("Failed to set up the completion client")?;

    let dispatcher = Dispatcher::new(runner, client, config);
    Ok(dispatcher.run(&invocation).await)
}
