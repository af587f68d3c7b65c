use std::process::{Command, Output, Stdio};

use assert_cmd::prelude::*;
use deisctl::settings::DEISCTL_CONFIG_PATH_ENV;

use crate::internal_prelude::*;

/// The config that's used if a test doesn't care about configuration.
pub const DEFAULT_CONFIG: &str = "{}\n";

/// Run `deisctl` with the given arguments and the default configuration.
pub fn run_deisctl(args: &[&str]) -> Result<Output> {
    run_deisctl_with_config(DEFAULT_CONFIG, args)
}

/// Run `deisctl` with the given arguments.
///
/// The config is written to a fresh temporary directory, which is also used as the working
/// directory. That way, no config file of the machine running the tests is picked up.
pub fn run_deisctl_with_config(config: &str, args: &[&str]) -> Result<Output> {
    let directory = tempfile::tempdir().context("Failed to create temporary directory")?;
    let config_path = directory.path().join("deisctl.yml");
    std::fs::write(&config_path, config).context("Failed to write config file")?;

    let output = Command::cargo_bin("deisctl")?
        .args(args)
        .env(DEISCTL_CONFIG_PATH_ENV, &config_path)
        .env_remove("RUST_LOG")
        .current_dir(directory.path())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .context(format!("Failed to execute deisctl with {args:?}"))?;

    Ok(output)
}

/// Convenience accessors for the output of a finished `deisctl` process.
pub trait OutputExt {
    fn stdout_text(&self) -> String;
    fn stderr_text(&self) -> String;
    fn exit_code(&self) -> Option<i32>;
}

impl OutputExt for Output {
    fn stdout_text(&self) -> String {
        String::from_utf8_lossy(&self.stdout).to_string()
    }

    fn stderr_text(&self) -> String {
        String::from_utf8_lossy(&self.stderr).to_string()
    }

    fn exit_code(&self) -> Option<i32> {
        self.status.code()
    }
}
