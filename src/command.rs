//! The contract every subcommand has to fulfill.
//!
//! A command describes itself (name, summary, usage and description), brings its own set of
//! flags and knows how to run. The [Dispatcher](crate::dispatcher::Dispatcher) takes care of
//! selecting the command and parsing its flags before [Command::run] is called.
use std::io::Write;

use clap::ArgMatches;

use crate::{internal_prelude::*, registry::Registry};

pub trait Command {
    /// The name of the command and the string that's used to invoke it.
    fn name(&self) -> &'static str;

    /// A one-sentence summary of what the command does.
    fn summary(&self) -> &'static str;

    /// Usage options and arguments, e.g. `[command]`.
    fn usage(&self) -> &'static str {
        ""
    }

    /// A detailed description of the command.
    fn description(&self) -> &'static str;

    /// The private set of flags of this command.
    ///
    /// Positional arguments don't need to be declared here. Everything after the flags is
    /// collected and handed to the command via [Invocation::args].
    fn flags(&self) -> clap::Command {
        clap::Command::new(self.name())
    }

    /// Run the command and return the exit status of the process.
    ///
    /// Errors are reserved for unexpected failures, such as not being able to write to stdout.
    /// Any expected failure should be signaled by a non-zero exit status.
    fn run(&self, context: &mut Context<'_>, invocation: &Invocation) -> Result<i32>;
}

/// The parsed arguments of a single command invocation.
#[derive(Debug, Clone)]
pub struct Invocation {
    /// The values of the command's own flags.
    pub matches: ArgMatches,
    /// Positional arguments that remained after the command's flags have been parsed.
    pub args: Vec<String>,
}

/// Everything a command has access to while running.
pub struct Context<'a> {
    /// All known commands in registration order.
    pub registry: &'a Registry,
    /// The version string of this program.
    pub version: &'a str,
    pub stdout: &'a mut dyn Write,
    pub stderr: &'a mut dyn Write,
}
