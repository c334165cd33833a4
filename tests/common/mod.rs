//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::path::Path;
use std::process::Command;
use std::time::Duration;

use gitmsg::ShellRunner;
use tempfile::TempDir;

/// A throwaway git repository driven through the `git` binary.
pub struct TestRepo {
    pub dir: TempDir,
}

impl TestRepo {
    /// Create a new repository with a local identity and one initial commit.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let repo = Self { dir };
        repo.git(&["init", "--quiet"]);
        repo.git(&["config", "user.name", "Test User"]);
        repo.git(&["config", "user.email", "test@example.com"]);
        repo.git(&["config", "commit.gpgsign", "false"]);
        repo.write("README.md", "# test\n");
        repo.git(&["add", "README.md"]);
        repo.git(&["commit", "--quiet", "-m", "chore: initial commit"]);
        repo
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Run git in the repository and return stdout, panicking on failure.
    pub fn git(&self, args: &[&str]) -> String {
        let output = Command::new("git")
            .args(args)
            .current_dir(self.path())
            .output()
            .expect("Failed to run git");
        assert!(
            output.status.success(),
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    /// Write a file relative to the repository root, creating parent directories.
    pub fn write(&self, name: &str, content: &str) {
        let path = self.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Write and stage a file.
    pub fn stage(&self, name: &str, content: &str) {
        self.write(name, content);
        self.git(&["add", name]);
    }

    /// Stage a file and commit it with `message`.
    pub fn commit_file(&self, name: &str, content: &str, message: &str) {
        self.stage(name, content);
        self.git(&["commit", "--quiet", "-m", message]);
    }

    /// Full message of the HEAD commit, without the trailing newline.
    pub fn head_message(&self) -> String {
        self.git(&["log", "-1", "--format=%B"]).trim_end().to_string()
    }

    pub fn commit_count(&self) -> usize {
        self.git(&["rev-list", "--count", "HEAD"])
            .trim()
            .parse()
            .expect("rev-list should print a number")
    }

    /// A runner bound to this repository.
    pub fn runner(&self) -> ShellRunner {
        ShellRunner::new(Duration::from_secs(30)).with_working_dir(self.path())
    }
}
