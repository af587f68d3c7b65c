//! All commands that ship with this program.
//!
//! Each command lives in its own file and implements the [Command] trait.
//! New commands only need to be added to [builtin_commands].
use crate::{command::Command, error::Error, registry::Registry};

mod help;
mod version;

pub use help::Help;
pub use version::Version;

/// All commands in the order in which they're listed by `help`.
pub fn builtin_commands() -> Vec<Box<dyn Command>> {
    vec![Box::new(Help), Box::new(Version)]
}

/// Build the registry containing all commands of this program.
pub fn registry() -> Result<Registry, Error> {
    Registry::new(builtin_commands())
}
