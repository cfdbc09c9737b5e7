//! Centralized container engine error formatting
//!
//! This module provides consistent, actionable error messages for failures
//! launching or running `docker`, `nvidia-docker`, and `docker-script`.

use anyhow::anyhow;
use console::style;
use jupyter_docker_core::docker::DockerError;
use std::io::ErrorKind;

fn is_launcher(program: &str) -> bool {
    program.ends_with("docker-script")
}

/// Format engine errors with actionable guidance
///
/// Returns a styled, multi-line error message with troubleshooting steps.
pub fn format_docker_error(e: &DockerError) -> String {
    match e {
        DockerError::Spawn { program, source } if source.kind() == ErrorKind::NotFound => {
            if is_launcher(program) {
                format!(
                    "{}\n\n  {}\n  {}\n  {}",
                    style(format!("`{program}` not found")).red().bold(),
                    "The notebook container is started through docker-script:",
                    style("  pip install docker-script").cyan(),
                    "Or point \"launcher\" in ~/.jupyter-docker/config.json at it.",
                )
            } else {
                format!(
                    "{}\n\n  {}\n  {}\n  {}",
                    style(format!("`{program}` not found")).red().bold(),
                    "Docker may not be installed or is not on PATH:",
                    style("  Linux:  sudo apt-get install docker.io").cyan(),
                    style("  macOS:  install Docker Desktop").cyan(),
                )
            }
        }
        DockerError::Spawn { program, source } if source.kind() == ErrorKind::PermissionDenied => {
            format!(
                "{}\n\n  {}\n  {}",
                style(format!("Permission denied running `{program}`")).red().bold(),
                "Check that the file is executable:",
                style(format!("  ls -l $(command -v {program})")).cyan(),
            )
        }
        DockerError::CommandFailed { program, status } => {
            format!(
                "{}\n\n  {}\n  {}",
                style(format!("`{program}` exited with {status}")).red().bold(),
                "See the output above for the failing step. Is the daemon running?",
                style("  Check: docker info").cyan(),
            )
        }
        _ => e.to_string(),
    }
}

/// Format engine errors as anyhow::Error
///
/// Convenience wrapper for commands that want to return the error directly.
pub fn format_docker_error_anyhow(e: &DockerError) -> anyhow::Error {
    anyhow!("{}", format_docker_error(e))
}

/// Show a non-fatal engine error on stderr and keep going
pub fn show_docker_warning(context: &str, e: &DockerError) {
    eprintln!(
        "{} {}: {}",
        style("Warning:").yellow().bold(),
        context,
        e
    );
}
