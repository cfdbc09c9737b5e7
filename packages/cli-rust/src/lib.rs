//! jupyter-docker CLI - build and run a Jupyter notebook container
//!
//! This module contains the CLI implementation used by the binary.

mod commands;
mod constants;
mod dispatch;
mod output;

use crate::dispatch::{Action, parse_invocation};
use anyhow::Result;
use clap::Parser;
use console::style;
use jupyter_docker_core::config::{ConfigError, display_validation_error};
use jupyter_docker_core::{HostProfile, get_version, load_config_or_default};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Build and run a Jupyter/TensorFlow notebook container
///
/// The positional tokens are resolved by hand so `-h`, `--help`, and
/// `--tensorboard` reach the dispatcher verbatim.
#[derive(Parser)]
#[command(name = "jupyter-docker")]
#[command(about = "Build and run a Jupyter/TensorFlow notebook container", long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Increase verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Action (install, run, help) and optional TensorBoard flag
    #[arg(
        value_name = "ACTION",
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    args: Vec<String>,
}

/// Log filter for a `-v` count; `RUST_LOG` takes precedence
fn default_log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_filter(verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Program name as invoked, for usage lines
fn program_name() -> String {
    std::env::args()
        .next()
        .unwrap_or_else(|| "jupyter-docker".to_string())
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Configure color output
    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    init_tracing(cli.verbose);
    debug!("jupyter-docker {}", get_version());

    let invocation = match parse_invocation(&cli.args) {
        Ok(invocation) => invocation,
        Err(unsupported) => {
            println!("{} {}", style("Error:").red().bold(), unsupported);
            std::process::exit(1);
        }
    };

    match invocation.action {
        Action::Help => {
            commands::cmd_help(&program_name());
            Ok(())
        }
        Action::Install => commands::cmd_install(&detect_profile()),
        Action::Run => {
            let config = match load_config_or_default() {
                Ok(config) => config,
                Err(ConfigError::Invalid(e)) => {
                    display_validation_error(&e);
                    std::process::exit(1);
                }
                Err(e) => return Err(e.into()),
            };
            commands::cmd_run(&detect_profile(), &config, invocation.tensorboard)
        }
    }
}

fn detect_profile() -> HostProfile {
    let profile = HostProfile::detect();
    debug!("{profile:?}");
    profile
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("jupyter-docker").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn positional_tokens_keep_leading_dashes() {
        assert_eq!(parse(&["--help"]).args, vec!["--help"]);
        assert_eq!(parse(&["-h"]).args, vec!["-h"]);
        assert_eq!(parse(&["-help"]).args, vec!["-help"]);
        assert_eq!(parse(&["run", "--tensorboard"]).args, vec!["run", "--tensorboard"]);
    }

    #[test]
    fn flags_before_action_are_parsed() {
        let cli = parse(&["-vv", "--no-color", "install"]);
        assert_eq!(cli.verbose, 2);
        assert!(cli.no_color);
        assert_eq!(cli.args, vec!["install"]);
    }

    #[test]
    fn no_tokens_is_empty() {
        assert!(parse(&[]).args.is_empty());
    }

    #[test]
    fn verbosity_maps_to_filter() {
        assert_eq!(default_log_filter(0), "warn");
        assert_eq!(default_log_filter(1), "info");
        assert_eq!(default_log_filter(2), "debug");
        assert_eq!(default_log_filter(9), "trace");
    }
}
