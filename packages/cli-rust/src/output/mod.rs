//! Output utilities for CLI commands
//!
//! Consistent, styled error messages for container engine failures.

pub mod errors;

pub use errors::{format_docker_error_anyhow, show_docker_warning};
