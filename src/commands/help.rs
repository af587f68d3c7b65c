use std::io::Write;

use clap::{Arg, CommandFactory};

use crate::{
    cli::GlobalArguments,
    command::{Command, Context, Invocation},
    display::columns,
    internal_prelude::*,
    CLI_DESCRIPTION, CLI_NAME,
};

/// Show all commands, or the details of a single command.
pub struct Help;

impl Command for Help {
    fn name(&self) -> &'static str {
        "help"
    }

    fn summary(&self) -> &'static str {
        "Show a list of commands or the help of a single command"
    }

    fn usage(&self) -> &'static str {
        "[command]"
    }

    fn description(&self) -> &'static str {
        "Show a list of all commands and global options.\n\
        If a command is given, show its usage, description and options instead."
    }

    fn run(&self, context: &mut Context<'_>, invocation: &Invocation) -> Result<i32> {
        let Some(name) = invocation.args.first() else {
            print_overview(context).wrap_err("Failed to print help")?;
            return Ok(0);
        };

        let registry = context.registry;
        let Some(command) = registry.find(name) else {
            writeln!(context.stderr, "Unrecognized command: {name}")?;
            writeln!(context.stderr, "Run '{CLI_NAME} help' for a list of commands.")?;
            return Ok(1);
        };

        print_command(context, command).wrap_err("Failed to print help")?;

        Ok(0)
    }
}

fn print_overview(context: &mut Context<'_>) -> Result<()> {
    let out = &mut context.stdout;

    writeln!(out, "{CLI_DESCRIPTION}")?;
    writeln!(out)?;
    writeln!(out, "Version: {}", context.version)?;
    writeln!(out)?;
    writeln!(out, "Usage:")?;
    writeln!(
        out,
        "  {CLI_NAME} [global options] <command> [command options] [arguments...]"
    )?;
    writeln!(out)?;

    writeln!(out, "Commands:")?;
    let commands = context
        .registry
        .all()
        .map(|command| vec![command.name(), command.summary()]);
    writeln!(out, "{}", columns(commands))?;
    writeln!(out)?;

    writeln!(out, "Global options:")?;
    writeln!(out, "{}", columns(option_rows(&GlobalArguments::command())))?;
    writeln!(out)?;

    writeln!(
        out,
        "Run '{CLI_NAME} help <command>' for more information on a command."
    )?;

    Ok(())
}

fn print_command(context: &mut Context<'_>, command: &dyn Command) -> Result<()> {
    let out = &mut context.stdout;

    writeln!(out, "{} - {}", command.name(), command.summary())?;
    writeln!(out)?;
    writeln!(out, "Usage:")?;
    let usage = format!("{CLI_NAME} {} {}", command.name(), command.usage());
    writeln!(out, "  {}", usage.trim_end())?;
    writeln!(out)?;
    writeln!(out, "Description:")?;
    for line in command.description().lines() {
        writeln!(out, "  {line}")?;
    }

    let options = option_rows(&command.flags());
    if !options.is_empty() {
        writeln!(out)?;
        writeln!(out, "Options:")?;
        writeln!(out, "{}", columns(options))?;
    }

    Ok(())
}

/// One row per flag of the given flag set, containing its names and its help text.
fn option_rows(flags: &clap::Command) -> Vec<Vec<String>> {
    flags
        .get_arguments()
        .filter(|arg| !arg.is_positional() && !arg.is_hide_set())
        .map(|arg| {
            let help = arg.get_help().map(ToString::to_string).unwrap_or_default();
            vec![flag_label(arg), help]
        })
        .collect()
}

/// Format the names of a flag, e.g. `-c, --config <CONFIG>`.
fn flag_label(arg: &Arg) -> String {
    let mut names = Vec::new();
    if let Some(short) = arg.get_short() {
        names.push(format!("-{short}"));
    }
    if let Some(long) = arg.get_long() {
        names.push(format!("--{long}"));
    }
    let mut label = names.join(", ");

    if arg.get_action().takes_values() {
        let value_name = arg
            .get_value_names()
            .and_then(|names| names.first())
            .map(ToString::to_string)
            .unwrap_or_else(|| arg.get_id().as_str().to_uppercase());
        label.push_str(&format!(" <{value_name}>"));
    }

    label
}
