//! jupyter-docker-core - shared library for jupyter-docker
//!
//! This library provides the building blocks used by the CLI:
//! - Host profile detection and container engine invocation
//! - Embedded templates and rendering
//! - Configuration loading and per-user paths
//! - Browser hand-off for discovered service ports

pub mod browser;
pub mod config;
pub mod docker;

// Re-export commonly used types
pub use browser::{OpenOutcome, open_url, service_url};
pub use config::{Config, ConfigError, load_config_or_default};
pub use docker::{ContainerEngine, DockerError, HostProfile};

/// Get the version of the jupyter-docker-core library
pub fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
