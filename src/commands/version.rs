use crate::{
    command::{Command, Context, Invocation},
    dispatcher::VERSION_COMMAND,
    internal_prelude::*,
};

/// Print the version string of this program.
///
/// The output is exactly the version followed by a newline, as scripts match against it.
pub struct Version;

impl Command for Version {
    fn name(&self) -> &'static str {
        VERSION_COMMAND
    }

    fn summary(&self) -> &'static str {
        "Print the version and exit"
    }

    fn description(&self) -> &'static str {
        "Print the version and exit"
    }

    fn run(&self, context: &mut Context<'_>, _invocation: &Invocation) -> Result<i32> {
        writeln!(context.stdout, "{}", context.version).wrap_err("Failed to print version")?;

        Ok(0)
    }
}
