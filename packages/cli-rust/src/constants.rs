//! Shared CLI constants.

use jupyter_docker_core::config::validation::MAX_STARTUP_WAIT_SECS;

/// Action used when no command is given
pub const DEFAULT_ACTION: &str = "run";

/// Tokens (after stripping dashes) that turn on TensorBoard
pub const TENSORBOARD_ALIASES: [&str; 4] = ["t", "tb", "tboard", "tensorboard"];

/// Tokens that print usage
pub const HELP_ALIASES: [&str; 5] = ["h", "help", "-h", "-help", "--help"];

/// Environment override for the startup wait.
///
/// Valid range: 0-60 seconds. Takes precedence over `startup_wait_secs` in
/// the config file.
pub const STARTUP_WAIT_ENV: &str = "JUPYTER_DOCKER_WAIT_SECS";

/// Resolve the startup wait from the environment, falling back to `configured`.
pub fn startup_wait_secs(configured: u64) -> u64 {
    startup_wait_from(std::env::var(STARTUP_WAIT_ENV).ok().as_deref(), configured)
}

fn startup_wait_from(value: Option<&str>, configured: u64) -> u64 {
    value
        .and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| *value <= MAX_STARTUP_WAIT_SECS)
        .unwrap_or(configured)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_value_overrides_config() {
        assert_eq!(startup_wait_from(Some("0"), 2), 0);
        assert_eq!(startup_wait_from(Some(" 7 "), 2), 7);
    }

    #[test]
    fn invalid_env_value_falls_back() {
        assert_eq!(startup_wait_from(None, 2), 2);
        assert_eq!(startup_wait_from(Some("soon"), 2), 2);
        assert_eq!(startup_wait_from(Some("-1"), 3), 3);
        assert_eq!(startup_wait_from(Some("61"), 2), 2);
    }
}
