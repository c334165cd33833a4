//! External command execution.

pub mod command;
pub mod runner;

pub use command::CommandLine;
pub use runner::{ProcessRunner, ShellRunner, check_installed};
