//! Install command implementation
//!
//! Builds the local notebook image from a temporary build context.

use crate::output::format_docker_error_anyhow;
use anyhow::Result;
use console::style;
use jupyter_docker_core::docker::{ContainerEngine, DockerError, HostProfile, build_image};
use tracing::info;

/// Build the local image
///
/// This command:
/// 1. Writes the Dockerfile and notebook config into a fresh temp dir
/// 2. Runs `<engine> build -t <local image> .` there
/// 3. Removes the temp dir, whatever the build outcome
/// 4. Reports success only if the build exited cleanly
pub fn cmd_install(profile: &HostProfile) -> Result<()> {
    let engine = ContainerEngine::new(&profile.engine_command);
    info!(
        "Building {} from {} with {}",
        profile.local_image,
        profile.upstream_image,
        engine.program()
    );

    let status = build_image(&engine, profile).map_err(|e| format_docker_error_anyhow(&e))?;

    if !status.success() {
        let error = DockerError::CommandFailed {
            program: format!("{} build", engine.program()),
            status,
        };
        return Err(format_docker_error_anyhow(&error));
    }

    println!("{}", style("Docker image built successfully.").green());
    Ok(())
}
