//! Errors that can occur while setting up and dispatching a command.
use std::path::PathBuf;

use crate::CLI_NAME;

/// The exit status that's used for every kind of usage error.
/// That includes malformed flags, unknown flags and unknown commands.
pub const USAGE_ERROR_STATUS: i32 = 2;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The global flags couldn't be parsed.
    #[error("{0}")]
    GlobalFlags(clap::Error),

    /// The flags of the resolved command couldn't be parsed.
    #[error("{}\nRun '{} help {}' for usage.", .source, CLI_NAME, .command)]
    CommandFlags {
        command: String,
        source: clap::Error,
    },

    /// No registered command matches the given name.
    #[error("{}: unknown subcommand: {:?}\nRun '{} help' for usage.", CLI_NAME, .0, CLI_NAME)]
    UnknownCommand(String),

    /// Two commands with the same name have been registered.
    /// This is a programming error and is detected during startup.
    #[error("A command with the name {0:?} has already been registered")]
    DuplicateCommand(String),

    #[error("Error while reading configuration:\n{0}")]
    ConfigDeserialization(String),

    #[error("I/O error at path {0:?} while {1}:\n{2}")]
    IoPathError(PathBuf, &'static str, std::io::Error),
}

impl Error {
    /// The process exit status that should be used when this error terminates a dispatch.
    pub fn exit_status(&self) -> i32 {
        match self {
            Error::GlobalFlags(_) | Error::CommandFlags { .. } | Error::UnknownCommand(_) => {
                USAGE_ERROR_STATUS
            }
            Error::DuplicateCommand(_)
            | Error::ConfigDeserialization(_)
            | Error::IoPathError(..) => 1,
        }
    }
}
