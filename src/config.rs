//! Configuration management for the shell helpers
//!
//! Centralizes configuration options and provides validation.

use crate::{
    cli::Args,
    error::HelperError,
    utils::{PathResolver, ProcessRunner},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// Working directory for executed commands and relative lookups
    pub work_dir: PathBuf,
    /// Search path overriding `$PATH` for executable lookup
    pub search_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            work_dir: PathBuf::from("."),
            search_path: None,
        }
    }
}

impl Config {
    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Result<Self, HelperError> {
        let mut config = Self {
            debug: args.debug,
            search_path: args.path.clone(),
            ..Self::default()
        };

        if let Some(work_dir) = &args.work_dir {
            config.work_dir = work_dir.clone();
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), HelperError> {
        if !self.work_dir.is_dir() {
            return Err(HelperError::validation(format!(
                "Working directory not found: {}",
                self.work_dir.display()
            )));
        }

        Ok(())
    }

    /// Process runner executing in the configured working directory
    pub fn process_runner(&self) -> ProcessRunner {
        ProcessRunner::new(self.debug, self.work_dir.clone())
    }

    /// Path resolver honoring the configured search path
    pub fn path_resolver(&self) -> PathResolver {
        PathResolver::new(
            self.search_path.as_ref().map(Into::into),
            self.work_dir.clone(),
        )
    }
}
