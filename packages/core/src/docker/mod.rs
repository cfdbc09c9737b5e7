//! Container engine operations
//!
//! This module provides everything that touches the container engine:
//! - Host profile detection (platform, GPU runtime, image names)
//! - Embedded Dockerfile, notebook config, and launch script templates
//! - Template rendering to disk
//! - Image builds from a temporary build context
//! - Launching the notebook container through docker-script
//! - Port lookups and exec calls against a running container

mod container;
mod dockerfile;
mod engine;
mod error;
pub mod image;
pub mod profile;
pub mod template;

// Core types
pub use engine::ContainerEngine;
pub use error::DockerError;
pub use profile::{HostProfile, command_exists};

// Template constants
pub use dockerfile::{
    DOCKERFILE_TEMPLATE, LAUNCH_SCRIPT_TEMPLATE, LOCAL_IMAGE_PLACEHOLDER, NOTEBOOK_CONFIG,
    UPSTREAM_IMAGE_PLACEHOLDER,
};

// Image operations
pub use image::{build_image, write_build_context};

// Container launch
pub use container::{
    CONTAINER_NAME_PREFIX, DEFAULT_LAUNCHER, NOTEBOOK_PORT, TENSORBOARD_PORT, container_name,
    launcher_args, spawn_launcher,
};

use std::path::Path;

/// Render the launch script for `local_image` into `path`
pub fn write_launch_script(path: &Path, local_image: &str) -> Result<(), DockerError> {
    template::write_patched(
        path,
        LAUNCH_SCRIPT_TEMPLATE,
        &[(LOCAL_IMAGE_PLACEHOLDER, local_image)],
    )?;
    Ok(())
}
