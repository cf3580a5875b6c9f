//! Shared context for interaction handlers
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Command names and start time for handlers

use std::time::{Duration, Instant};

/// Read-only state handed to every handler invocation
#[derive(Debug, Clone)]
pub struct HandlerContext {
    /// Registered slash command names, in registration order
    pub command_names: Vec<String>,
    pub start_time: Instant,
}

impl HandlerContext {
    pub fn new(command_names: Vec<String>) -> Self {
        Self::with_start_time(command_names, Instant::now())
    }

    /// Create a context with a specific start time (for sharing with an existing bot)
    pub fn with_start_time(command_names: Vec<String>, start_time: Instant) -> Self {
        Self {
            command_names,
            start_time,
        }
    }

    pub fn uptime(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Render a duration as `1h 2m 3s`
pub fn format_uptime(uptime: Duration) -> String {
    let secs = uptime.as_secs();
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;
    format!("{hours}h {minutes}m {seconds}s")
}
