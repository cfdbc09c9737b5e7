//! Container engine error types

use std::io;
use std::process::ExitStatus;
use thiserror::Error;

/// Errors from invoking the container engine or the launcher
#[derive(Debug, Error)]
pub enum DockerError {
    /// The program could not be started at all (missing binary, permissions)
    #[error("Failed to launch `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// The program ran but reported failure
    #[error("`{program}` exited with {status}")]
    CommandFailed { program: String, status: ExitStatus },

    /// Filesystem error while preparing a build context or script
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl DockerError {
    pub(crate) fn spawn(program: &str, source: io::Error) -> Self {
        DockerError::Spawn {
            program: program.to_string(),
            source,
        }
    }

    /// True when the failure was a missing executable
    pub fn is_not_found(&self) -> bool {
        matches!(self, DockerError::Spawn { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}
