//! Utility command handlers
//!
//! Handles: ping, uptime, help
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: ping, uptime and help, each replying through the reply capability

use anyhow::Result;
use async_trait::async_trait;
use log::info;
use std::sync::Arc;
use std::time::Duration;

use crate::commands::context::{format_uptime, HandlerContext};
use crate::commands::handler::InteractionHandler;
use crate::core::ReplyPayload;
use crate::dispatch::{CommandKind, InboundEvent};

/// Handler for /ping
pub struct PingHandler;

#[async_trait]
impl InteractionHandler for PingHandler {
    fn id(&self) -> &str {
        "ping"
    }

    fn kind(&self) -> CommandKind {
        CommandKind::Command
    }

    fn description(&self) -> &str {
        "Test bot responsiveness"
    }

    async fn execute(&self, event: &InboundEvent, _ctx: Arc<HandlerContext>) -> Result<()> {
        event.reply.reply(ReplyPayload::public("Pong!")).await?;
        info!("Ping command completed for user {}", event.caller_id);
        Ok(())
    }
}

/// Handler for /uptime
pub struct UptimeHandler;

#[async_trait]
impl InteractionHandler for UptimeHandler {
    fn id(&self) -> &str {
        "uptime"
    }

    fn kind(&self) -> CommandKind {
        CommandKind::Command
    }

    fn description(&self) -> &str {
        "Show how long the bot has been running"
    }

    async fn execute(&self, event: &InboundEvent, ctx: Arc<HandlerContext>) -> Result<()> {
        let content = format!("⏱️ Uptime: {}", format_uptime(ctx.uptime()));
        event.reply.reply(ReplyPayload::public(content)).await?;
        Ok(())
    }
}

/// Handler for /help, lists every registered slash command
pub struct HelpHandler;

#[async_trait]
impl InteractionHandler for HelpHandler {
    fn id(&self) -> &str {
        "help"
    }

    fn kind(&self) -> CommandKind {
        CommandKind::Command
    }

    fn description(&self) -> &str {
        "List available commands"
    }

    fn cooldown(&self) -> Option<Duration> {
        Some(Duration::from_secs(10))
    }

    async fn execute(&self, event: &InboundEvent, ctx: Arc<HandlerContext>) -> Result<()> {
        let mut help_text = String::from("**Available Slash Commands:**\n");
        for name in &ctx.command_names {
            help_text.push_str(&format!("`/{name}`\n"));
        }
        event
            .reply
            .reply(ReplyPayload::ephemeral(help_text.trim_end()))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{context, event, Sent};

    #[tokio::test]
    async fn test_ping_replies_pong() {
        let (event, reply) = event(CommandKind::Command, "ping");
        PingHandler.execute(&event, context()).await.unwrap();

        assert_eq!(reply.sent(), vec![Sent::Reply(ReplyPayload::public("Pong!"))]);
    }

    #[tokio::test]
    async fn test_uptime_reports_duration() {
        let (event, reply) = event(CommandKind::Command, "uptime");
        UptimeHandler.execute(&event, context()).await.unwrap();

        assert!(reply.only_content().starts_with("⏱️ Uptime: 0h 0m"));
    }

    #[tokio::test]
    async fn test_help_lists_commands_ephemerally() {
        let (event, reply) = event(CommandKind::Command, "help");
        HelpHandler.execute(&event, context()).await.unwrap();

        let content = reply.only_content();
        assert!(content.contains("`/ping`"));
        assert!(content.contains("`/uptime`"));
        assert!(matches!(&reply.sent()[0], Sent::Reply(p) if p.ephemeral));
    }

    #[test]
    fn test_help_has_longer_cooldown() {
        assert_eq!(HelpHandler.cooldown(), Some(Duration::from_secs(10)));
        assert_eq!(PingHandler.cooldown(), None);
    }
}
