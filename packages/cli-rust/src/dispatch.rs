//! Positional command resolution
//!
//! The first token picks the action and defaults to `run`. A TensorBoard alias
//! may appear as the second token, or alone as the first, in which case the
//! action is `run`.

use crate::constants::{DEFAULT_ACTION, HELP_ALIASES, TENSORBOARD_ALIASES};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Install,
    Run,
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Invocation {
    pub action: Action,
    pub tensorboard: bool,
}

/// First token did not name an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedCommand(pub String);

impl fmt::Display for UnsupportedCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported command \"{}\"", self.0)
    }
}

impl std::error::Error for UnsupportedCommand {}

fn is_tensorboard_alias(token: &str) -> bool {
    TENSORBOARD_ALIASES.contains(&token.trim_matches('-'))
}

/// Resolve the action and TensorBoard flag from positional tokens
///
/// Tokens past the second are ignored.
pub fn parse_invocation(args: &[String]) -> Result<Invocation, UnsupportedCommand> {
    let mut command = args.first().map(String::as_str).unwrap_or(DEFAULT_ACTION);

    let tensorboard = if is_tensorboard_alias(command) {
        command = DEFAULT_ACTION;
        true
    } else {
        args.get(1).is_some_and(|second| is_tensorboard_alias(second))
    };

    let action = match command {
        "install" => Action::Install,
        "run" => Action::Run,
        other if HELP_ALIASES.contains(&other) => Action::Help,
        other => return Err(UnsupportedCommand(other.to_string())),
    };

    Ok(Invocation {
        action,
        tensorboard,
    })
}
