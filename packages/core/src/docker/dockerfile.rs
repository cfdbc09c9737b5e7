//! Embedded build and launch templates
//!
//! The Dockerfile, notebook server config, and launch script are embedded at
//! compile time so the CLI can regenerate them on every invocation.

/// Template for the Dockerfile used by `install`
///
/// Contains one substitution point, [`UPSTREAM_IMAGE_PLACEHOLDER`].
pub const DOCKERFILE_TEMPLATE: &str = include_str!("Dockerfile");

/// Jupyter notebook server config, copied into the image verbatim
pub const NOTEBOOK_CONFIG: &str = include_str!("jupyter_notebook_config.py");

/// Template for the docker-script launch script used by `run`
///
/// Contains one substitution point, [`LOCAL_IMAGE_PLACEHOLDER`].
pub const LAUNCH_SCRIPT_TEMPLATE: &str = include_str!("jupyter.sh");

pub const UPSTREAM_IMAGE_PLACEHOLDER: &str = "__UPSTREAM_IMAGE__";
pub const LOCAL_IMAGE_PLACEHOLDER: &str = "__LOCAL_IMAGE__";

/// File names inside the temporary build context
pub const DOCKERFILE_NAME: &str = "Dockerfile";
pub const NOTEBOOK_CONFIG_NAME: &str = "jupyter_notebook_config.py";

// =============================================================================
// Image Naming
// =============================================================================
//
// The upstream image is the TensorFlow Python 3 image from Docker Hub. GPU
// hosts use the CUDA flavour, which only differs by a `-gpu` modifier placed
// before the `-py3` suffix:
//
//   tensorflow/tensorflow:latest-py3      - CPU
//   tensorflow/tensorflow:latest-gpu-py3  - GPU
//
// The locally built image carries the same modifier so CPU and GPU builds can
// live side by side on one host.
// =============================================================================

/// Upstream image repository and tag prefix
pub const UPSTREAM_IMAGE_BASE: &str = "tensorflow/tensorflow:latest";

/// Upstream tag suffix, appended after the GPU modifier
pub const UPSTREAM_IMAGE_SUFFIX: &str = "-py3";

/// Local image name produced by `install`
pub const LOCAL_IMAGE_BASE: &str = "jupyter-tensorflow";

/// Modifier appended to image names when GPU acceleration is available
pub const GPU_IMAGE_MODIFIER: &str = "-gpu";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dockerfile_starts_from_upstream_placeholder() {
        assert!(DOCKERFILE_TEMPLATE.starts_with("FROM __UPSTREAM_IMAGE__\n"));
        assert_eq!(DOCKERFILE_TEMPLATE.matches(UPSTREAM_IMAGE_PLACEHOLDER).count(), 1);
    }

    #[test]
    fn dockerfile_copies_notebook_config() {
        let copy = format!("COPY {NOTEBOOK_CONFIG_NAME} /root/.jupyter/");
        assert!(DOCKERFILE_TEMPLATE.contains(&copy));
        assert!(DOCKERFILE_TEMPLATE.contains("RUN mkdir /tensorboard-log"));
        assert!(DOCKERFILE_TEMPLATE.trim_end().ends_with("EXPOSE 8888"));
    }

    #[test]
    fn notebook_config_disables_token_and_browser() {
        assert!(NOTEBOOK_CONFIG.contains("c.NotebookApp.port = 8888"));
        assert!(NOTEBOOK_CONFIG.contains("c.NotebookApp.token = ''"));
        assert!(NOTEBOOK_CONFIG.contains("c.NotebookApp.open_browser = False"));
        assert!(!NOTEBOOK_CONFIG.contains("__"));
    }

    #[test]
    fn launch_script_has_docker_script_headers() {
        let mut lines = LAUNCH_SCRIPT_TEMPLATE.lines();
        assert_eq!(lines.next(), Some("#!/usr/bin/env docker-script"));
        assert_eq!(lines.next(), Some("#!__LOCAL_IMAGE__ bash"));
        assert_eq!(lines.next(), Some("jupyter notebook --allow-root"));
    }
}
