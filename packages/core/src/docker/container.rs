//! Notebook container launch via docker-script
//!
//! The container itself is started by the external launcher, which reads the
//! image name from the script's second shebang line. This module names the
//! container and assembles the launcher invocation.

use super::DockerError;
use chrono::{DateTime, Utc};
use std::path::Path;
use std::process::{Child, Command};
use tracing::debug;

/// Prefix for generated container names
pub const CONTAINER_NAME_PREFIX: &str = "jupyter_docker_";

/// Port the notebook server listens on inside the container
pub const NOTEBOOK_PORT: u16 = 8888;

/// Port TensorBoard listens on inside the container
pub const TENSORBOARD_PORT: u16 = 6006;

/// Default launcher executable
pub const DEFAULT_LAUNCHER: &str = "docker-script";

/// Launcher option publishing every exposed port to a random host port
const PUBLISH_ALL_ARG: &str = "---arg=-P";

/// Container name for a launch at `now`
///
/// Second resolution: two launches within the same second share a name and
/// the engine rejects the second one.
pub fn container_name(now: DateTime<Utc>) -> String {
    format!("{CONTAINER_NAME_PREFIX}{}", now.timestamp())
}

/// Arguments passed to the launcher after the program name
pub fn launcher_args(script: &Path, container_name: &str, extra: &[String]) -> Vec<String> {
    let mut args = vec![
        script.to_string_lossy().into_owned(),
        format!("---name={container_name}"),
        PUBLISH_ALL_ARG.to_string(),
    ];
    args.extend(extra.iter().cloned());
    args
}

/// Start the launcher without waiting for it
///
/// The returned handle is the only process the caller is expected to wait on.
pub fn spawn_launcher(
    launcher: &str,
    script: &Path,
    container_name: &str,
    extra: &[String],
) -> Result<Child, DockerError> {
    let args = launcher_args(script, container_name, extra);
    debug!("Launching {} {}", launcher, args.join(" "));
    Command::new(launcher)
        .args(&args)
        .spawn()
        .map_err(|e| DockerError::spawn(launcher, e))
}
