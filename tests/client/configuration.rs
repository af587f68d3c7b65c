use pretty_assertions::assert_eq;

use crate::{helper::*, internal_prelude::*};

/// The configured default command is run if no command is given.
#[test]
fn default_command() -> Result<()> {
    let output = run_deisctl_with_config("default_command: version\n", &[])?;

    assert_eq!(output.exit_code(), Some(0));
    assert_eq!(output.stdout_text().trim(), env!("CARGO_PKG_VERSION"));

    Ok(())
}

/// An explicitly given command isn't affected by the default command.
#[test]
fn default_command_with_explicit_command() -> Result<()> {
    let output = run_deisctl_with_config("default_command: version\n", &["help"])?;

    assert_eq!(output.exit_code(), Some(0));
    assert!(output.stdout_text().contains("Commands:"));

    Ok(())
}

#[test]
fn malformed_config() -> Result<()> {
    let output = run_deisctl_with_config("default_command: [1, 2]\n", &["version"])?;

    assert_eq!(output.exit_code(), Some(1));
    assert_eq!(output.stdout_text(), "");
    assert!(output.stderr_text().contains("Failed to read configuration."));

    Ok(())
}

/// A config path given via `--config` has to exist.
#[test]
fn missing_config_file() -> Result<()> {
    let output = run_deisctl(&["--config", "/this/path/does/not/exist.yml", "version"])?;

    assert_eq!(output.exit_code(), Some(1));
    assert_eq!(output.stdout_text(), "");

    Ok(())
}
