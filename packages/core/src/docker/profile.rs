//! Host profile: platform and GPU runtime detection.
//!
//! Everything the rest of the tool needs to know about the host is probed once
//! at startup and frozen into a [`HostProfile`]. On Linux hosts where
//! `nvidia-docker` can be launched, the GPU flavour of the images is used and
//! the launcher is told to go through `nvidia-docker`.

use super::dockerfile::{
    GPU_IMAGE_MODIFIER, LOCAL_IMAGE_BASE, UPSTREAM_IMAGE_BASE, UPSTREAM_IMAGE_SUFFIX,
};
use std::process::{Command, Stdio};
use tracing::debug;

/// Plain container engine command
pub const DOCKER_COMMAND: &str = "docker";

/// GPU-enabled container engine command, also used as the GPU probe
pub const NVIDIA_DOCKER_COMMAND: &str = "nvidia-docker";

/// Launcher flag that routes the container through nvidia-docker
pub const LAUNCHER_GPU_FLAG: &str = "---nvidia-docker";

/// Browser opener on Linux hosts
pub const LINUX_OPENER: &str = "xdg-open";

/// Browser opener everywhere else
pub const DEFAULT_OPENER: &str = "open";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostProfile {
    pub is_linux: bool,
    pub use_gpu: bool,
    pub engine_command: String,
    pub upstream_image: String,
    pub local_image: String,
    pub launcher_args: Vec<String>,
}

impl HostProfile {
    /// Probe the current host
    pub fn detect() -> Self {
        Self::detect_with(cfg!(target_os = "linux"), NVIDIA_DOCKER_COMMAND)
    }

    /// Probe using an explicit platform flag and GPU probe program
    ///
    /// The probe is skipped entirely on non-Linux hosts.
    pub fn detect_with(is_linux: bool, gpu_probe: &str) -> Self {
        let use_gpu = is_linux && command_exists(gpu_probe, &["--version"]);
        debug!("Host profile: linux={is_linux}, gpu={use_gpu}");
        Self::from_capabilities(is_linux, use_gpu)
    }

    /// Derive names and commands from already-known capabilities
    pub fn from_capabilities(is_linux: bool, use_gpu: bool) -> Self {
        let (modifier, engine, launcher_args) = if use_gpu {
            (
                GPU_IMAGE_MODIFIER,
                NVIDIA_DOCKER_COMMAND,
                vec![LAUNCHER_GPU_FLAG.to_string()],
            )
        } else {
            ("", DOCKER_COMMAND, Vec::new())
        };

        Self {
            is_linux,
            use_gpu,
            engine_command: engine.to_string(),
            upstream_image: format!("{UPSTREAM_IMAGE_BASE}{modifier}{UPSTREAM_IMAGE_SUFFIX}"),
            local_image: format!("{LOCAL_IMAGE_BASE}{modifier}"),
            launcher_args,
        }
    }

    /// Platform command used to open URLs
    pub fn opener_command(&self) -> &'static str {
        if self.is_linux {
            LINUX_OPENER
        } else {
            DEFAULT_OPENER
        }
    }
}

/// Whether `program` can be launched at all
///
/// Exit status is irrelevant; only a failure to start (including a missing
/// binary) counts as absent. Output is discarded.
pub fn command_exists(program: &str, args: &[&str]) -> bool {
    let launched = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok();
    debug!("Probe `{program}`: {}", if launched { "found" } else { "absent" });
    launched
}
