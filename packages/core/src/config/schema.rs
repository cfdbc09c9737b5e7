//! Configuration schema for jupyter-docker
//!
//! Defines the structure and defaults for the optional config.json file.

use crate::docker::DEFAULT_LAUNCHER;
use serde::{Deserialize, Serialize};

/// Main configuration structure for jupyter-docker
///
/// Read from `~/.jupyter-docker/config.json` when present. Every field has a
/// default, so an empty object is a valid config.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Config file version for migrations
    #[serde(default = "default_version")]
    pub version: u32,

    /// Executable that turns the launch script into a running container
    /// (default: "docker-script")
    #[serde(default = "default_launcher")]
    pub launcher: String,

    /// Seconds to wait for a server to bind its port before looking it up
    /// (default: 2)
    #[serde(default = "default_startup_wait_secs")]
    pub startup_wait_secs: u64,

    /// Command used to open URLs, overriding the platform opener
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browser: Option<String>,

    /// Log directory TensorBoard reads inside the container
    /// (default: "/tensorboard-log", created by the Dockerfile)
    #[serde(default = "default_tensorboard_logdir")]
    pub tensorboard_logdir: String,
}

fn default_version() -> u32 {
    1
}

fn default_launcher() -> String {
    DEFAULT_LAUNCHER.to_string()
}

fn default_startup_wait_secs() -> u64 {
    2
}

fn default_tensorboard_logdir() -> String {
    "/tensorboard-log".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            launcher: default_launcher(),
            startup_wait_secs: default_startup_wait_secs(),
            browser: None,
            tensorboard_logdir: default_tensorboard_logdir(),
        }
    }
}

impl Config {
    /// Browser opener to use, given the platform default
    pub fn opener<'a>(&'a self, platform_default: &'a str) -> &'a str {
        self.browser.as_deref().unwrap_or(platform_default)
    }
}
