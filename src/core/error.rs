//! Typed errors for startup and the reply path
//!
//! Handler bodies return `anyhow::Result`; these cover the places where callers
//! need to match on what went wrong.

use thiserror::Error;

use crate::dispatch::CommandKind;

/// Startup-fatal registration problems
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("duplicate {kind} handler registered for id '{id}'")]
    Duplicate { kind: CommandKind, id: String },

    #[error("{kind} handler '{id}' has prefix '{prefix}' colliding with already registered '{existing}'")]
    PrefixCollision {
        kind: CommandKind,
        id: String,
        prefix: String,
        existing: String,
    },
}

/// Failure talking back to the platform through a reply capability
#[derive(Debug, Error)]
pub enum ReplyError {
    #[error("interaction was already acknowledged")]
    AlreadyAcknowledged,

    #[error("platform rejected the response: {0}")]
    Platform(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value '{value}' for {key}")]
    Invalid { key: &'static str, value: String },
}
