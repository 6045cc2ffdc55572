//! # Shell Helpers
//!
//! Small, independent helpers for shell scripting: a dot-separated version
//! comparator, a command execution wrapper, an executable-path resolver, and
//! formatters for durations and ordinal numbers.
//!
//! ## Example
//!
//! ```
//! use shell_helpers::core::compare;
//! use std::cmp::Ordering;
//!
//! assert_eq!(compare("1.0", "1.0.1")?, Ordering::Less);
//! assert_eq!(compare("1.01.1", "1.1.1")?, Ordering::Equal);
//! # Ok::<(), shell_helpers::error::HelperError>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with appropriate verbosity
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
