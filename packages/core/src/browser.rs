//! Opening service URLs in the user's browser

use std::process::{Command, Stdio};
use tracing::{debug, warn};

/// How the URL was handed off
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    /// The opener command was started (not awaited)
    Opener,
    /// The opener could not be started and the system default browser was used
    Fallback,
    /// Nothing could open the URL
    Failed,
}

/// URL for a `host:port` string reported by the engine
pub fn service_url(host_address: &str) -> String {
    format!("http://{host_address}")
}

/// Open `url` with `opener`, falling back to the system default browser
///
/// The opener is fire-and-forget: its exit status is never examined.
pub fn open_url(opener: &str, url: &str) -> OpenOutcome {
    debug!("Opening {} with {}", url, opener);
    match Command::new(opener).arg(url).stdin(Stdio::null()).spawn() {
        Ok(_child) => OpenOutcome::Opener,
        Err(e) => {
            debug!("Failed to launch {opener}: {e}; trying system browser");
            match webbrowser::open(url) {
                Ok(()) => OpenOutcome::Fallback,
                Err(e) => {
                    warn!("Could not open {url}: {e}");
                    OpenOutcome::Failed
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_url_prefixes_http() {
        assert_eq!(service_url("0.0.0.0:49000"), "http://0.0.0.0:49000");
        assert_eq!(service_url(""), "http://");
    }

    #[cfg(unix)]
    #[test]
    fn opener_receives_url() {
        use std::fs;
        use std::os::unix::fs::PermissionsExt;
        use std::time::{Duration, Instant};
        use tempfile::TempDir;

        let dir = TempDir::new().unwrap();
        let log = dir.path().join("opened.log");
        let opener = dir.path().join("opener");
        let log_path = log.display();
        fs::write(
            &opener,
            format!("#!/bin/sh\necho \"$1\" > {log_path}.tmp\nmv {log_path}.tmp {log_path}\n"),
        )
        .unwrap();
        fs::set_permissions(&opener, fs::Permissions::from_mode(0o755)).unwrap();

        let outcome = open_url(&opener.to_string_lossy(), "http://0.0.0.0:49000");
        assert_eq!(outcome, OpenOutcome::Opener);

        let deadline = Instant::now() + Duration::from_secs(10);
        while !log.exists() && Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(20));
        }
        assert_eq!(fs::read_to_string(&log).unwrap().trim(), "http://0.0.0.0:49000");
    }
}
