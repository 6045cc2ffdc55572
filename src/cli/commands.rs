//! Command implementations for the CLI

use crate::{
    cli::Command,
    config::Config,
    core::{human_duration, ordinal, version},
    utils::path::describe_lookup,
};
use anyhow::Context;
use std::cmp::Ordering;
use tracing::{debug, info, instrument};

/// Execute the appropriate command based on CLI arguments
#[instrument(skip(config))]
pub fn execute_command(config: &Config, command: &Command) -> anyhow::Result<()> {
    match command {
        Command::Compare { version1, version2 } => execute_compare_command(version1, version2),
        Command::Sort { versions } => execute_sort_command(versions),
        Command::Duration { seconds } => {
            println!("{}", human_duration(*seconds));
            Ok(())
        }
        Command::Ordinal { numbers } => {
            for number in numbers {
                println!("{}", ordinal(*number));
            }
            Ok(())
        }
        Command::Which { commands } => execute_which_command(config, commands),
        Command::Exec { json, command } => execute_exec_command(config, command, *json),
    }
}

/// Execute the compare command
fn execute_compare_command(version1: &str, version2: &str) -> anyhow::Result<()> {
    let ordering = version::compare(version1, version2)
        .with_context(|| format!("Failed to compare '{version1}' with '{version2}'"))?;

    let symbol = match ordering {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    };

    println!("{version1} {symbol} {version2}");
    Ok(())
}

/// Execute the sort command
fn execute_sort_command(versions: &[String]) -> anyhow::Result<()> {
    let sorted = version::sort_versions(versions).context("Failed to sort versions")?;

    debug!("Sorted {} versions", sorted.len());
    for entry in sorted {
        println!("{entry}");
    }
    Ok(())
}

/// Execute the which command
#[instrument(skip(config))]
fn execute_which_command(config: &Config, commands: &[String]) -> anyhow::Result<()> {
    let resolver = config.path_resolver();

    for command in commands {
        let found = resolver.which(command);
        println!("{}", describe_lookup(command, found.as_deref()));
    }
    Ok(())
}

/// Execute the exec command
#[instrument(skip(config))]
fn execute_exec_command(config: &Config, command: &[String], json: bool) -> anyhow::Result<()> {
    let Some((program, args)) = command.split_first() else {
        anyhow::bail!("No command given to execute");
    };

    let runner = config.process_runner();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    let result = runner
        .execute(program, &args)
        .with_context(|| format!("Failed to run '{program}'"))?;

    info!("'{}' exited with status {}", program, result.status);

    if json {
        let rendered =
            serde_json::to_string_pretty(&result).context("Failed to serialize result")?;
        println!("{rendered}");
    } else {
        println!("Status: {}", result.status);
        println!("Stdout: {}", result.stdout);
        println!("Stderr: {}", result.stderr);
    }

    Ok(())
}
