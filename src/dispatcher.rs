//! Turn a raw argument vector into exactly one command invocation and an exit status.
//!
//! Dispatching happens in strictly forward steps:
//! 1. Parse the global flags up to the first positional argument.
//! 2. Determine the command name. Without any positional argument, the default command is used.
//!    If `--version` is set, the version command is used no matter what has been given.
//! 3. Look up the command in the [Registry].
//! 4. Parse the remaining arguments against the command's own flags.
//! 5. Run the command and hand its exit status back to the caller.
//!
//! Any parse error or unknown command aborts the dispatch with
//! [USAGE_ERROR_STATUS](crate::error::USAGE_ERROR_STATUS).
use std::{ffi::OsString, io::Write};

use clap::{Arg, ArgAction};

use crate::{
    cli::GlobalArguments,
    command::{Command, Context, Invocation},
    error::Error,
    internal_prelude::*,
    registry::Registry,
    settings::Settings,
    CLI_NAME,
};

/// The command that's enforced by the global `--version` flag.
pub const VERSION_COMMAND: &str = "version";

/// The id of the positional argument that collects everything after a command's flags.
const RESIDUAL_ARGS: &str = "residual-args";

/// A command that has been selected for execution together with its still unparsed arguments.
pub struct Resolved<'a> {
    pub command: &'a dyn Command,
    /// All arguments after the command name.
    pub args: Vec<String>,
}

pub struct Dispatcher {
    registry: Registry,
    settings: Settings,
    version: String,
}

impl Dispatcher {
    pub fn new(registry: Registry, settings: Settings) -> Self {
        Dispatcher {
            registry,
            settings,
            version: clap::crate_version!().to_string(),
        }
    }

    /// Use a different version string than the one of this crate.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Parse the global flags from `args` and run the selected command.
    ///
    /// The program name must not be part of `args`.
    /// Usage errors are printed to `stderr` and result in
    /// [USAGE_ERROR_STATUS](crate::error::USAGE_ERROR_STATUS).
    /// Otherwise, the exit status of the executed command is returned.
    pub fn dispatch<I, T>(
        &self,
        args: I,
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> Result<i32>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let arguments = match GlobalArguments::parse_args(args) {
            Ok(arguments) => arguments,
            Err(error) => return report(stderr, error),
        };

        self.execute(&arguments, stdout, stderr)
    }

    /// Run the command that's selected by already parsed global flags.
    pub fn execute(
        &self,
        arguments: &GlobalArguments,
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> Result<i32> {
        let Resolved { command, args } = match self.resolve(arguments) {
            Ok(resolved) => resolved,
            Err(error) => return report(stderr, error),
        };
        debug!("Resolved command {} with arguments {args:?}", command.name());

        let invocation = match parse_command_flags(command, &args) {
            Ok(invocation) => invocation,
            Err(error) => return report(stderr, error),
        };

        let mut context = Context {
            registry: &self.registry,
            version: &self.version,
            stdout,
            stderr,
        };
        let status = command
            .run(&mut context, &invocation)
            .wrap_err_with(|| format!("Failed to run command {}", command.name()))?;
        debug!("Command {} exited with status {status}", command.name());

        Ok(status)
    }

    /// Determine the command that should be executed for the given global flags.
    pub fn resolve(&self, arguments: &GlobalArguments) -> Result<Resolved<'_>, Error> {
        let mut args = arguments.args.clone();

        if args.is_empty() {
            args.push(self.settings.default_command.clone());
        }

        // `--version` wins over any explicitly given command.
        if arguments.version {
            args[0] = VERSION_COMMAND.to_string();
        }

        let name = args.remove(0);
        let command = self
            .registry
            .find(&name)
            .ok_or(Error::UnknownCommand(name))?;

        Ok(Resolved { command, args })
    }
}

/// Parse the arguments after the command name against the command's own flags.
///
/// Just like the global flags, parsing stops at the first positional argument.
/// Built-in help and version flags are disabled, so `-h` is an unknown flag like any other.
pub fn parse_command_flags(command: &dyn Command, args: &[String]) -> Result<Invocation, Error> {
    let flags = command
        .flags()
        .no_binary_name(true)
        .bin_name(format!("{CLI_NAME} {}", command.name()))
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new(RESIDUAL_ARGS)
                .value_name("ARGS")
                .action(ArgAction::Append)
                .num_args(1..)
                .trailing_var_arg(true),
        );

    let mut matches =
        flags
            .try_get_matches_from(args)
            .map_err(|source| Error::CommandFlags {
                command: command.name().to_string(),
                source,
            })?;

    let args = matches
        .remove_many::<String>(RESIDUAL_ARGS)
        .map(|values| values.collect())
        .unwrap_or_default();

    Ok(Invocation { matches, args })
}

/// Print a dispatch error and return the status the process should exit with.
fn report(stderr: &mut dyn Write, error: Error) -> Result<i32> {
    debug!("Aborting dispatch: {error:?}");
    writeln!(stderr, "{}", error.to_string().trim_end()).wrap_err("Failed to write to stderr")?;

    Ok(error.exit_status())
}
