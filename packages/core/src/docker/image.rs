//! Local image build
//!
//! Writes a throwaway build context (Dockerfile + notebook config) and runs
//! the engine's build against it.

use super::dockerfile::{
    DOCKERFILE_NAME, DOCKERFILE_TEMPLATE, NOTEBOOK_CONFIG, NOTEBOOK_CONFIG_NAME,
    UPSTREAM_IMAGE_PLACEHOLDER,
};
use super::template::{write_file, write_patched};
use super::{ContainerEngine, DockerError, HostProfile};
use std::path::Path;
use std::process::ExitStatus;
use tempfile::TempDir;
use tracing::debug;

/// Populate `dir` with the Dockerfile and notebook config for `upstream_image`
pub fn write_build_context(dir: &Path, upstream_image: &str) -> Result<(), DockerError> {
    write_patched(
        &dir.join(DOCKERFILE_NAME),
        DOCKERFILE_TEMPLATE,
        &[(UPSTREAM_IMAGE_PLACEHOLDER, upstream_image)],
    )?;
    write_file(&dir.join(NOTEBOOK_CONFIG_NAME), NOTEBOOK_CONFIG)?;
    Ok(())
}

/// Build the local image from a fresh temporary context
///
/// The context directory is removed once the build returns, whether or not
/// it succeeded. The build's exit status is returned for the caller to judge.
pub fn build_image(
    engine: &ContainerEngine,
    profile: &HostProfile,
) -> Result<ExitStatus, DockerError> {
    let context = TempDir::new()?;
    debug!("Build context: {}", context.path().display());

    write_build_context(context.path(), &profile.upstream_image)?;
    let status = engine.build(&profile.local_image, context.path());

    context.close()?;
    status
}
