//! CLI command implementations
//!
//! This module contains the implementations for the install, run, and help
//! actions.

mod help;
mod install;
mod run;

pub use help::cmd_help;
pub use install::cmd_install;
pub use run::cmd_run;
