//! Utility modules for functionality that touches the operating system
//!
//! Provides process execution and executable lookup.

pub mod path;
pub mod process;

pub use path::PathResolver;
pub use process::{ExecutionResult, ProcessRunner};
