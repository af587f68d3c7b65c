use std::{ffi::OsString, path::PathBuf};

use clap::{ArgAction, Parser, ValueHint};

use crate::{error::Error, CLI_NAME};

/// The flags that are understood before the subcommand.
///
/// Parsing stops at the first token that isn't a flag.
/// That token and everything after it ends up in [GlobalArguments::args] untouched,
/// as it's parsed later on against the flags of the selected command.
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(
    name = CLI_NAME,
    no_binary_name = true,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct GlobalArguments {
    /// Print the version and exit.
    #[arg(long)]
    pub version: bool,

    /// Verbose mode (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Path to a specific deisctl config file to use.
    /// This ignores all other config files.
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// The command to run, followed by its flags and arguments.
    #[arg(trailing_var_arg = true, num_args = 1.., value_name = "COMMAND")]
    pub args: Vec<String>,
}

impl GlobalArguments {
    /// Parse the global flags from the raw arguments.
    /// The program name must not be part of `args`.
    pub fn parse_args<I, T>(args: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args).map_err(Error::GlobalFlags)
    }
}
