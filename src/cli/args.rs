//! Command-line argument parsing and validation

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Shell Helpers - small utilities for shell scripts
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "shell-helpers")]
pub struct Args {
    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    /// Working directory for executed commands
    #[arg(long = "work-dir")]
    pub work_dir: Option<PathBuf>,

    /// Search path used instead of $PATH for executable lookup
    #[arg(long)]
    pub path: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compare two dot-separated versions
    Compare {
        /// First version
        version1: String,

        /// Second version
        version2: String,
    },

    /// Print versions in ascending order
    Sort {
        /// Versions to sort
        #[arg(required = true)]
        versions: Vec<String>,
    },

    /// Render a number of seconds as a human-friendly duration
    Duration {
        /// Number of seconds
        #[arg(allow_negative_numbers = true)]
        seconds: i64,
    },

    /// Print numbers with their ordinal suffix
    Ordinal {
        /// Numbers to format
        #[arg(required = true, allow_negative_numbers = true)]
        numbers: Vec<i64>,
    },

    /// Locate executables on the search path
    Which {
        /// Command names to look up
        #[arg(required = true)]
        commands: Vec<String>,
    },

    /// Execute a command and report its status and output
    Exec {
        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Program to run followed by its arguments, passed through untouched
        #[arg(
            required = true,
            trailing_var_arg = true,
            allow_hyphen_values = true,
            value_name = "COMMAND"
        )]
        command: Vec<String>,
    },
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}
