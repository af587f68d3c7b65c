use crate::{command::Command, error::Error, internal_prelude::*};

/// The ordered collection of all available commands.
///
/// The registry is filled once during startup and only read afterwards.
/// Registration order is preserved, as it's also the order in which commands are displayed.
#[derive(Default)]
pub struct Registry {
    commands: Vec<Box<dyn Command>>,
}

impl Registry {
    /// Build a registry from a full list of commands.
    pub fn new(commands: Vec<Box<dyn Command>>) -> Result<Self, Error> {
        let mut registry = Registry::default();
        for command in commands {
            registry.register(command)?;
        }

        Ok(registry)
    }

    /// Add a command to the end of the registry.
    /// Names must be unique, registering a name twice is an error.
    pub fn register(&mut self, command: Box<dyn Command>) -> Result<(), Error> {
        if self.find(command.name()).is_some() {
            return Err(Error::DuplicateCommand(command.name().to_string()));
        }

        trace!("Registering command {}", command.name());
        self.commands.push(command);

        Ok(())
    }

    /// Get the command with exactly this name.
    pub fn find(&self, name: &str) -> Option<&dyn Command> {
        self.commands
            .iter()
            .find(|command| command.name() == name)
            .map(|command| command.as_ref())
    }

    /// All commands in registration order.
    pub fn all(&self) -> impl Iterator<Item = &dyn Command> {
        self.commands.iter().map(|command| command.as_ref())
    }
}
