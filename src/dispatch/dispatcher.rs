//! Interaction dispatcher
//!
//! Routes every inbound interaction to at most one handler, applies per-caller
//! cooldowns to slash commands and contains handler failures.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Replaces the per-kind match arms in the gateway event handler

use log::{debug, error, info, warn};
use std::any::Any;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

use super::event::InboundEvent;
use super::resolver::Resolver;
use crate::commands::{HandlerContext, HandlerRegistry, InteractionHandler};
use crate::core::{cooldown_message, failure_message, ReplyPayload, DEFAULT_COOLDOWN_SECONDS};
use crate::features::rate_limiting::{CooldownCheck, CooldownTracker};

/// Terminal state of a single `route` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Nothing registered for the identifier
    NoHandler,
    /// Caller is still on cooldown; handler not invoked
    Throttled { retry_after: Duration },
    Completed,
    /// Handler returned an error or panicked; a failure notice was attempted
    HandlerFailed,
}

pub struct Dispatcher {
    resolver: Resolver,
    cooldowns: CooldownTracker,
    context: Arc<HandlerContext>,
    default_cooldown: Duration,
}

impl Dispatcher {
    pub fn new(registry: Arc<HandlerRegistry>, context: Arc<HandlerContext>) -> Self {
        Self {
            resolver: Resolver::new(registry),
            cooldowns: CooldownTracker::new(),
            context,
            default_cooldown: Duration::from_secs(DEFAULT_COOLDOWN_SECONDS),
        }
    }

    /// Cooldown for commands that don't declare one
    pub fn with_default_cooldown(mut self, cooldown: Duration) -> Self {
        self.default_cooldown = cooldown;
        self
    }

    pub fn cooldowns(&self) -> &CooldownTracker {
        &self.cooldowns
    }

    pub fn registry(&self) -> &HandlerRegistry {
        self.resolver.registry()
    }

    /// Dispatch one interaction
    ///
    /// Never fails: handler errors, panics and reply errors are logged and
    /// reported to the caller here rather than propagated.
    pub async fn route(&self, event: InboundEvent) -> DispatchOutcome {
        let kind = event.kind;

        let Some(handler) = self.resolver.resolve(kind, &event.identifier) else {
            // Stale components from old messages are routine; missing commands are not
            if kind.warns_when_unresolved() {
                warn!(
                    "❓ No {kind} handler matching '{}' was found (user {})",
                    event.identifier, event.caller_id
                );
            }
            return DispatchOutcome::NoHandler;
        };

        let request_id = Uuid::new_v4();
        info!(
            "[{}] 📥 {} received | Id: {} | Handler: {} | User: {} | Guild: {}",
            request_id,
            kind,
            event.identifier,
            handler.id(),
            event.caller_id,
            event.guild_id.as_deref().unwrap_or("DM")
        );

        if kind.is_throttled() {
            let window = handler.cooldown().unwrap_or(self.default_cooldown);
            debug!("[{request_id}] 🔍 Checking cooldown ({window:?}) for user: {}", event.caller_id);

            if let CooldownCheck::Throttled { retry_after } =
                self.cooldowns
                    .check_and_arm(handler.id(), &event.caller_id, window)
            {
                warn!(
                    "[{}] 🚫 Cooldown active for user {} on '{}' ({:.1}s left)",
                    request_id,
                    event.caller_id,
                    handler.id(),
                    retry_after.as_secs_f64()
                );
                let notice = ReplyPayload::ephemeral(cooldown_message(handler.id(), retry_after));
                if let Err(e) = event.reply.reply(notice).await {
                    error!("[{request_id}] Failed to send cooldown notice: {e}");
                }
                return DispatchOutcome::Throttled { retry_after };
            }
        }

        self.invoke(handler, event, request_id).await
    }

    async fn invoke(
        &self,
        handler: Arc<dyn InteractionHandler>,
        event: InboundEvent,
        request_id: Uuid,
    ) -> DispatchOutcome {
        let kind = event.kind;
        let identifier = event.identifier.clone();
        let caller_id = event.caller_id.clone();
        let reply = Arc::clone(&event.reply);
        let ctx = Arc::clone(&self.context);

        debug!("[{request_id}] 🎯 Invoking handler '{}'", handler.id());

        // Run in its own task so a panicking handler surfaces as a JoinError
        let task = tokio::spawn(async move { handler.execute(&event, ctx).await });

        let failure = match task.await {
            Ok(Ok(())) => {
                info!("[{request_id}] ✅ {kind} '{identifier}' completed");
                return DispatchOutcome::Completed;
            }
            Ok(Err(e)) => format!("{e:#}"),
            Err(join_error) if join_error.is_panic() => {
                format!("handler panicked: {}", panic_message(join_error.into_panic()))
            }
            Err(join_error) => join_error.to_string(),
        };

        error!(
            "[{request_id}] ❌ Error handling {kind} '{identifier}' for user {caller_id}: {failure}"
        );

        let notice = ReplyPayload::ephemeral(failure_message(kind));
        let sent = if reply.is_acknowledged() {
            debug!("[{request_id}] 📤 Interaction already acknowledged, sending follow-up");
            reply.follow_up(notice).await
        } else {
            debug!("[{request_id}] 📤 Sending failure reply");
            reply.reply(notice).await
        };
        if let Err(e) = sent {
            error!("[{request_id}] Failed to send failure notice for '{identifier}': {e}");
        }

        DispatchOutcome::HandlerFailed
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panic_message_variants() {
        assert_eq!(panic_message(Box::new("boom")), "boom");
        assert_eq!(panic_message(Box::new(String::from("bang"))), "bang");
        assert_eq!(panic_message(Box::new(42_u8)), "unknown panic payload");
    }
}
