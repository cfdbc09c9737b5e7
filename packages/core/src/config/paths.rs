//! Per-user paths
//!
//! Everything lives in a single dot-directory under the home directory:
//!
//! ```text
//! ~/.jupyter-docker/
//!     jupyter.sh     rendered launch script, rewritten on every `run`
//!     config.json    optional user configuration
//! ```

use directories::BaseDirs;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the per-user directory inside the home directory
pub const APP_DIR_NAME: &str = ".jupyter-docker";

/// File name of the rendered launch script
pub const SCRIPT_FILE_NAME: &str = "jupyter.sh";

/// File name of the optional config file
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Current user's home directory
pub fn get_home_dir() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
}

/// `~/.jupyter-docker` for a given home directory
pub fn app_dir_in(home: &Path) -> PathBuf {
    home.join(APP_DIR_NAME)
}

/// `~/.jupyter-docker`
pub fn get_app_dir() -> Option<PathBuf> {
    get_home_dir().map(|home| app_dir_in(&home))
}

/// `~/.jupyter-docker/jupyter.sh`
pub fn get_script_path() -> Option<PathBuf> {
    get_app_dir().map(|dir| dir.join(SCRIPT_FILE_NAME))
}

/// `~/.jupyter-docker/config.json`
pub fn get_config_path() -> Option<PathBuf> {
    get_app_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
}

/// Create `dir` if it does not exist yet
///
/// Only the last path component is created; a missing parent is an error.
pub fn ensure_dir(dir: &Path) -> io::Result<()> {
    if dir.is_dir() {
        return Ok(());
    }
    debug!("Creating {}", dir.display());
    fs::create_dir(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn app_dir_is_dot_directory_in_home() {
        let dir = app_dir_in(Path::new("/home/alice"));
        assert_eq!(dir, PathBuf::from("/home/alice/.jupyter-docker"));
    }

    #[test]
    fn script_and_config_share_app_dir() {
        if let (Some(script), Some(config)) = (get_script_path(), get_config_path()) {
            assert_eq!(script.parent(), config.parent());
            assert!(script.ends_with(".jupyter-docker/jupyter.sh"));
        }
    }

    #[test]
    fn ensure_dir_creates_once() {
        let home = TempDir::new().unwrap();
        let dir = app_dir_in(home.path());
        ensure_dir(&dir).unwrap();
        assert!(dir.is_dir());
        ensure_dir(&dir).unwrap();
    }

    #[test]
    fn ensure_dir_does_not_create_parents() {
        let home = TempDir::new().unwrap();
        let dir = home.path().join("missing").join(APP_DIR_NAME);
        let err = ensure_dir(&dir).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
