#![doc = include_str!("../README.md")]

pub(crate) mod internal_prelude {
    #[allow(unused_imports)]
    pub(crate) use tracing::{debug, error, info, trace, warn};

    pub(crate) use crate::errors::*;
}

pub(crate) mod errors {
    pub use color_eyre::eyre::WrapErr;
    pub use color_eyre::Result;
}

pub mod cli;
pub mod command;
pub mod commands;
pub mod dispatcher;
pub(crate) mod display;
pub mod error;
pub mod registry;
pub mod settings;
pub mod tracing;

/// The name under which this program is invoked and refers to itself in messages.
pub const CLI_NAME: &str = "deisctl";

/// The one-line description shown at the top of the `help` output.
pub const CLI_DESCRIPTION: &str =
    "deisctl is a command-line interface to Deis, the open-source Application Deployment Platform.";
