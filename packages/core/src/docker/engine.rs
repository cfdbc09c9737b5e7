//! Thin wrapper around the container engine command line
//!
//! Every call shells out to `docker` (or `nvidia-docker`) and inherits the
//! console unless the output is consumed.

use super::DockerError;
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerEngine {
    program: String,
}

impl ContainerEngine {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Run `build -t <tag> .` inside `context_dir` and wait for it
    ///
    /// Returns the exit status without judging it.
    pub fn build(&self, tag: &str, context_dir: &Path) -> Result<ExitStatus, DockerError> {
        debug!(
            "Building image {} from {} with {}",
            tag,
            context_dir.display(),
            self.program
        );
        Command::new(&self.program)
            .args(["build", "-t", tag, "."])
            .current_dir(context_dir)
            .status()
            .map_err(|e| DockerError::spawn(&self.program, e))
    }

    /// Ask which host address is bound to `port` inside `container`
    ///
    /// Returns the first line of the engine's stdout, whatever the exit status. A
    /// container that is not up yet yields an empty string.
    pub fn port(&self, container: &str, port: u16) -> Result<String, DockerError> {
        debug!("Looking up host port for {}:{}", container, port);
        let port = port.to_string();
        let output = Command::new(&self.program)
            .args(["port", container, port.as_str()])
            .stdin(Stdio::null())
            .output()
            .map_err(|e| DockerError::spawn(&self.program, e))?;

        if !output.status.success() {
            debug!(
                "`{} port` exited with {}: {}",
                self.program,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        Ok(first_line(&String::from_utf8_lossy(&output.stdout)).to_string())
    }

    /// Start `command` inside a running container without waiting for it
    pub fn exec_detached(&self, container: &str, command: &[&str]) -> Result<Child, DockerError> {
        debug!("Exec in {}: {}", container, command.join(" "));
        Command::new(&self.program)
            .arg("exec")
            .arg(container)
            .args(command)
            .spawn()
            .map_err(|e| DockerError::spawn(&self.program, e))
    }
}

/// `docker port` prints one line per address family; the first is the IPv4 binding
fn first_line(stdout: &str) -> &str {
    stdout.trim().lines().next().unwrap_or("").trim()
}
