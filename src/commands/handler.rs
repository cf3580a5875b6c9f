//! Interaction handler trait
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: One trait for every interaction kind, keyed by (kind, id)

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use super::context::HandlerContext;
use crate::dispatch::{CommandKind, InboundEvent};

/// A registered unit of logic bound to one identifier and one interaction kind
///
/// Handlers respond through `event.reply`. Returning an error (or panicking)
/// makes the dispatcher send a generic failure notice on the handler's behalf.
///
/// # Example
///
/// ```ignore
/// pub struct PingHandler;
///
/// #[async_trait]
/// impl InteractionHandler for PingHandler {
///     fn id(&self) -> &str {
///         "ping"
///     }
///
///     fn kind(&self) -> CommandKind {
///         CommandKind::Command
///     }
///
///     async fn execute(&self, event: &InboundEvent, _ctx: Arc<HandlerContext>) -> Result<()> {
///         event.reply.reply(ReplyPayload::public("Pong!")).await?;
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait InteractionHandler: Send + Sync {
    /// Command name, or custom id. A custom id containing `:` also matches
    /// every identifier that starts with the part before the first `:`.
    fn id(&self) -> &str;

    fn kind(&self) -> CommandKind;

    /// Short description shown in the Discord command picker (slash commands only)
    fn description(&self) -> &str {
        ""
    }

    /// Per-caller cooldown for commands; `None` uses the dispatcher default
    fn cooldown(&self) -> Option<Duration> {
        None
    }

    async fn execute(&self, event: &InboundEvent, ctx: Arc<HandlerContext>) -> Result<()>;
}
