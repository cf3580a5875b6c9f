//! # Rate Limiting Feature
//!
//! Per-command, per-caller cooldowns applied to slash commands.
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

pub mod cooldown;

pub use cooldown::{CooldownCheck, CooldownKey, CooldownTracker, MAX_WINDOW};
