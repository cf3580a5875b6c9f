//! # Feature: Command Cooldowns
//!
//! Per-command, per-caller cooldowns. A successful dispatch arms a window for the
//! (command, caller) pair; further attempts inside the window are refused with the
//! remaining wait. Uses DashMap so concurrent dispatches can check-and-arm the same
//! key atomically.
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Clamp windows to one day so expiry arithmetic cannot overflow
//! - 1.0.0: Fixed-window cooldowns keyed by (handler_id, caller_id) with timed expiry

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use log::debug;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::time::{sleep_until, Instant};

use crate::core::MAX_COOLDOWN_SECONDS;

/// Upper bound applied to every requested window
pub const MAX_WINDOW: Duration = Duration::from_secs(MAX_COOLDOWN_SECONDS);

/// Composite key for cooldowns: (handler_id, caller_id)
/// Cooldowns are never global and never per-guild.
pub type CooldownKey = (String, String);

/// Result of a check-and-arm attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CooldownCheck {
    /// No live cooldown; a new one has been armed
    Allowed,
    /// A cooldown from an earlier dispatch is still running
    Throttled { retry_after: Duration },
}

impl CooldownCheck {
    pub fn is_allowed(&self) -> bool {
        matches!(self, CooldownCheck::Allowed)
    }
}

#[derive(Clone, Default)]
pub struct CooldownTracker {
    entries: Arc<DashMap<CooldownKey, Instant>>,
}

impl CooldownTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a composite key from handler_id and caller_id
    fn make_key(handler_id: &str, caller_id: &str) -> CooldownKey {
        (handler_id.to_string(), caller_id.to_string())
    }

    /// Atomically test for a live cooldown and arm a new one if there is none
    ///
    /// A throttled attempt leaves the existing expiry untouched. Windows longer
    /// than [`MAX_WINDOW`] are clamped.
    pub fn check_and_arm(&self, handler_id: &str, caller_id: &str, window: Duration) -> CooldownCheck {
        let key = Self::make_key(handler_id, caller_id);
        let now = Instant::now();
        if window > MAX_WINDOW {
            debug!("Clamping {window:?} cooldown for '{handler_id}' to {MAX_WINDOW:?}");
        }
        let window = window.min(MAX_WINDOW);

        let expires_at = match self.entries.entry(key.clone()) {
            Entry::Occupied(mut entry) => {
                let current = *entry.get();
                if now < current {
                    return CooldownCheck::Throttled {
                        retry_after: current - now,
                    };
                }
                // Logically expired, cleanup just hasn't run yet
                let expires_at = expiry(now, window);
                entry.insert(expires_at);
                expires_at
            }
            Entry::Vacant(entry) => {
                let expires_at = expiry(now, window);
                entry.insert(expires_at);
                expires_at
            }
        };

        self.schedule_expiry(key, expires_at);
        CooldownCheck::Allowed
    }

    /// Remove the entry once its window elapses, unless it was re-armed meanwhile
    fn schedule_expiry(&self, key: CooldownKey, expires_at: Instant) {
        let entries = Arc::clone(&self.entries);
        match Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    sleep_until(expires_at).await;
                    entries.remove_if(&key, |_, current| *current <= expires_at);
                });
            }
            Err(_) => {
                debug!(
                    "No runtime to schedule cooldown expiry for {}/{}; relying on lazy expiry",
                    key.0, key.1
                );
            }
        }
    }

    /// Time left on a live cooldown, if any
    pub fn remaining(&self, handler_id: &str, caller_id: &str) -> Option<Duration> {
        let key = Self::make_key(handler_id, caller_id);
        let now = Instant::now();
        self.entries
            .get(&key)
            .and_then(|expires_at| expires_at.checked_duration_since(now))
            .filter(|left| !left.is_zero())
    }

    /// Drop every entry whose window has elapsed, returning how many were removed
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let before = self.entries.len();
        self.entries.retain(|_, expires_at| now < *expires_at);
        before.saturating_sub(self.entries.len())
    }

    /// Number of tracked entries, including ones not yet cleaned up
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn expiry(now: Instant, window: Duration) -> Instant {
    now.checked_add(window).unwrap_or(now)
}
