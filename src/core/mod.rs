//! # Core Module
//!
//! Configuration, error types and reply payloads shared by the dispatcher and handlers.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

pub mod config;
pub mod error;
pub mod response;

// Re-export commonly used items
pub use config::{Config, DEFAULT_COOLDOWN_SECONDS, MAX_COOLDOWN_SECONDS};
pub use error::{ConfigError, RegistryError, ReplyError};
pub use response::{
    cooldown_message, failure_message, truncate_for_message, ReplyPayload, MESSAGE_LIMIT,
};
