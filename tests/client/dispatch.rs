use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::{helper::*, internal_prelude::*};

#[rstest]
#[case("foo")]
#[case("Version")]
#[test]
fn unknown_command(#[case] command: &str) -> Result<()> {
    let output = run_deisctl(&["--", command])?;

    assert_eq!(output.exit_code(), Some(2));
    assert_eq!(output.stdout_text(), "");
    assert_eq!(
        output.stderr_text(),
        format!("deisctl: unknown subcommand: \"{command}\"\nRun 'deisctl help' for usage.\n")
    );

    Ok(())
}

#[rstest]
#[case(&["--bogus"])]
#[case(&["--config"])]
#[case(&["-x", "version"])]
#[test]
fn global_flag_error(#[case] args: &[&str]) -> Result<()> {
    let output = run_deisctl(args)?;

    assert_eq!(output.exit_code(), Some(2));
    assert_eq!(output.stdout_text(), "");
    assert!(output.stderr_text().contains("error:"));

    Ok(())
}

/// A flag the command doesn't know aborts before the command is run.
#[rstest]
#[case(&["version", "--bogus"])]
#[case(&["help", "-h"])]
#[test]
fn command_flag_error(#[case] args: &[&str]) -> Result<()> {
    let output = run_deisctl(args)?;

    assert_eq!(output.exit_code(), Some(2));
    assert_eq!(output.stdout_text(), "", "The command must not have been run");
    let stderr = output.stderr_text();
    assert!(stderr.contains("error:"));
    assert!(stderr.contains(&format!("Usage: deisctl {}", args[0])), "{stderr}");
    assert!(stderr.contains(&format!("Run 'deisctl help {}' for usage.", args[0])));

    Ok(())
}

/// Log output goes to stderr and never pollutes the command's output.
#[test]
fn verbose_logging() -> Result<()> {
    let output = run_deisctl(&["-vv", "version"])?;

    assert_eq!(output.exit_code(), Some(0));
    assert_eq!(output.stdout_text().trim(), env!("CARGO_PKG_VERSION"));
    assert!(output.stderr_text().contains("Resolved command version"));

    Ok(())
}

/// Log output doesn't contain any color codes if stderr isn't a terminal.
#[rstest]
#[case("-vvv")]
#[case("-vvvv")]
#[test]
fn no_ansi_codes_in_redirected_logs(#[case] verbosity: &str) -> Result<()> {
    let output = run_deisctl(&[verbosity, "version"])?;

    assert_eq!(output.exit_code(), Some(0));
    let stderr = output.stderr_text();
    assert!(stderr.contains("TRACE"), "Expected trace output:\n{stderr}");
    assert!(!stderr.contains("\x1b["), "Found escape codes in logs:\n{stderr}");

    Ok(())
}
