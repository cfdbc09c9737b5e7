//! Configuration validation with actionable error messages
//!
//! Validates the configuration and shows the config entry that fixes it.

use super::schema::Config;
use console::style;

/// Longest startup wait accepted, in seconds
pub const MAX_STARTUP_WAIT_SECS: u64 = 60;

/// A configuration validation error with a suggested fix
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// The config field that has an error
    pub field: String,
    /// Description of what's wrong
    pub message: String,
    /// Config entry that would fix the issue
    pub fix: String,
}

/// Validate configuration, stopping at the first error
pub fn validate_config(config: &Config) -> Result<(), ValidationError> {
    if config.launcher.trim().is_empty() {
        return Err(ValidationError {
            field: "launcher".to_string(),
            message: "launcher must not be empty".to_string(),
            fix: r#""launcher": "docker-script""#.to_string(),
        });
    }

    if config.startup_wait_secs > MAX_STARTUP_WAIT_SECS {
        return Err(ValidationError {
            field: "startup_wait_secs".to_string(),
            message: format!("startup_wait_secs must be <= {MAX_STARTUP_WAIT_SECS}"),
            fix: r#""startup_wait_secs": 2"#.to_string(),
        });
    }

    if let Some(ref browser) = config.browser
        && browser.trim().is_empty()
    {
        return Err(ValidationError {
            field: "browser".to_string(),
            message: "browser must not be empty; remove the field to use the platform default"
                .to_string(),
            fix: r#""browser": "xdg-open""#.to_string(),
        });
    }

    if !config.tensorboard_logdir.starts_with('/') {
        return Err(ValidationError {
            field: "tensorboard_logdir".to_string(),
            message: "tensorboard_logdir must be an absolute path inside the container"
                .to_string(),
            fix: r#""tensorboard_logdir": "/tensorboard-log""#.to_string(),
        });
    }

    Ok(())
}

/// Display a validation error with styled formatting
pub fn display_validation_error(error: &ValidationError) {
    eprintln!();
    eprintln!("{}", style("Error: Configuration error").red().bold());
    eprintln!();
    eprintln!("  {}  {}", style("Field:").dim(), error.field);
    eprintln!("  {}  {}", style("Problem:").dim(), error.message);
    eprintln!();
    eprintln!("{}:", style("To fix, set").dim());
    eprintln!("  {}", style(&error.fix).cyan());
    eprintln!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config_passes() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_empty_launcher() {
        let config = Config {
            launcher: "  ".to_string(),
            ..Config::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert_eq!(err.field, "launcher");
    }

    #[test]
    fn test_startup_wait_too_long() {
        let config = Config {
            startup_wait_secs: 61,
            ..Config::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert_eq!(err.field, "startup_wait_secs");
        assert!(err.message.contains("60"));
    }

    #[test]
    fn test_zero_wait_allowed() {
        let config = Config {
            startup_wait_secs: 0,
            ..Config::default()
        };
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_empty_browser() {
        let config = Config {
            browser: Some(String::new()),
            ..Config::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert_eq!(err.field, "browser");
    }

    #[test]
    fn test_relative_logdir() {
        let config = Config {
            tensorboard_logdir: "logs".to_string(),
            ..Config::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert_eq!(err.field, "tensorboard_logdir");
    }
}
