//! Run command implementation
//!
//! Launches the notebook container through docker-script, then opens the
//! notebook (and optionally TensorBoard) in the browser.

use crate::constants::startup_wait_secs;
use crate::output::{format_docker_error_anyhow, show_docker_warning};
use anyhow::{Context, Result, anyhow};
use chrono::Utc;
use jupyter_docker_core::config::paths::{self, SCRIPT_FILE_NAME};
use jupyter_docker_core::docker::{
    ContainerEngine, HostProfile, NOTEBOOK_PORT, TENSORBOARD_PORT, container_name,
    spawn_launcher, write_launch_script,
};
use jupyter_docker_core::{Config, OpenOutcome, open_url, service_url};
use std::thread;
use std::time::Duration;
use tracing::{info, warn};

/// Run the notebook container
///
/// This command:
/// 1. Renders the launch script into `~/.jupyter-docker/jupyter.sh`
/// 2. Starts docker-script on it without waiting
/// 3. Sleeps briefly, looks up the notebook's host port, opens it
/// 4. Optionally starts TensorBoard in the same container and opens it too
/// 5. Waits for docker-script to exit
pub fn cmd_run(profile: &HostProfile, config: &Config, tensorboard: bool) -> Result<()> {
    let app_dir =
        paths::get_app_dir().ok_or_else(|| anyhow!("Could not determine home directory"))?;
    paths::ensure_dir(&app_dir)
        .with_context(|| format!("Failed to create {}", app_dir.display()))?;

    let script = app_dir.join(SCRIPT_FILE_NAME);
    write_launch_script(&script, &profile.local_image)
        .with_context(|| format!("Failed to write {}", script.display()))?;

    let name = container_name(Utc::now());
    info!("Starting container {name} from {}", profile.local_image);
    let mut launcher = spawn_launcher(&config.launcher, &script, &name, &profile.launcher_args)
        .map_err(|e| format_docker_error_anyhow(&e))?;

    let engine = ContainerEngine::new(&profile.engine_command);
    let opener = config.opener(profile.opener_command());
    let wait = Duration::from_secs(startup_wait_secs(config.startup_wait_secs));

    thread::sleep(wait);
    discover_port_and_open(&engine, &name, NOTEBOOK_PORT, opener);

    if tensorboard {
        // Detached: TensorBoard dies with the container.
        if let Err(e) = engine.exec_detached(
            &name,
            &["tensorboard", "--logdir", config.tensorboard_logdir.as_str()],
        ) {
            show_docker_warning("Failed to start TensorBoard", &e);
        }
        thread::sleep(wait);
        discover_port_and_open(&engine, &name, TENSORBOARD_PORT, opener);
    }

    launcher
        .wait()
        .with_context(|| format!("Failed waiting for {}", config.launcher))?;
    println!();
    Ok(())
}

/// Look up the host address bound to `port` and open it in the browser
///
/// An empty answer (server not bound yet) still opens the bare URL; the user
/// can reload once the server is up.
fn discover_port_and_open(engine: &ContainerEngine, container: &str, port: u16, opener: &str) {
    let address = match engine.port(container, port) {
        Ok(address) => address,
        Err(e) => {
            show_docker_warning(&format!("Failed to look up port {port}"), &e);
            return;
        }
    };

    if address.is_empty() {
        warn!("No host port reported for {container}:{port}");
    }

    let url = service_url(&address);
    info!("Opening {url}");
    if open_url(opener, &url) == OpenOutcome::Failed {
        warn!("Open {url} manually");
    }
}
