use std::io::Write;

use color_eyre::{eyre::WrapErr, Result};
use deisctl::{cli::GlobalArguments, commands, dispatcher::Dispatcher, settings::Settings};
use tracing::debug;

/// This is the main entry point of the client.
///
/// At first we do some basic setup:
/// - Parse the global flags
/// - Initialize logging
/// - Read the config
/// - Register all commands
///
/// Afterwards, the [Dispatcher] runs the selected command.
/// This is the only place where the process is terminated with the command's exit status.
fn main() -> Result<()> {
    let arguments = match GlobalArguments::parse_args(std::env::args_os().skip(1)) {
        Ok(arguments) => arguments,
        Err(error) => {
            eprintln!("{}", error.to_string().trim_end());
            std::process::exit(error.exit_status());
        }
    };

    // Init the logger and set the verbosity level depending on the `-v` flags.
    deisctl::tracing::install_tracing(arguments.verbose)?;
    color_eyre::install()?;

    let (settings, config_found) =
        Settings::read(&arguments.config).wrap_err("Failed to read configuration.")?;
    debug!("Using settings {settings:?} (config file found: {config_found})");

    let registry = commands::registry().wrap_err("Failed to register commands.")?;
    let dispatcher = Dispatcher::new(registry, settings);

    let mut stdout = std::io::stdout().lock();
    let mut stderr = std::io::stderr().lock();
    let status = dispatcher.execute(&arguments, &mut stdout, &mut stderr)?;

    // Exiting the process doesn't run any destructors, so flush explicitly.
    stdout.flush().wrap_err("Failed to flush stdout")?;
    std::process::exit(status);
}
