//! Message component and modal handlers
//!
//! Handles: `confirm:*` / `cancel:*` buttons, `help_topic:*` select menu,
//! `feedback:*` modal. Custom ids carry the action after the prefix, e.g.
//! `confirm:deleteRole:roleA`.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Prefix-routed confirm/cancel buttons, help topic select menu and feedback modal

use anyhow::{anyhow, bail, Result};
use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::commands::context::HandlerContext;
use crate::commands::handler::InteractionHandler;
use crate::core::ReplyPayload;
use crate::dispatch::{CommandKind, InboundEvent};

/// Action carried in the custom id after `prefix:`
fn action<'a>(event: &'a InboundEvent, prefix: &str) -> Result<&'a str> {
    event
        .suffix_after(prefix)
        .filter(|action| !action.is_empty())
        .ok_or_else(|| anyhow!("custom id '{}' carries no action", event.identifier))
}

pub struct ConfirmButton;

#[async_trait]
impl InteractionHandler for ConfirmButton {
    fn id(&self) -> &str {
        "confirm:action"
    }

    fn kind(&self) -> CommandKind {
        CommandKind::Button
    }

    async fn execute(&self, event: &InboundEvent, _ctx: Arc<HandlerContext>) -> Result<()> {
        let action = action(event, "confirm")?;
        info!("User {} confirmed '{action}'", event.caller_id);
        event
            .reply
            .reply(ReplyPayload::ephemeral(format!("✅ Confirmed `{action}`.")))
            .await?;
        Ok(())
    }
}

pub struct CancelButton;

#[async_trait]
impl InteractionHandler for CancelButton {
    fn id(&self) -> &str {
        "cancel:action"
    }

    fn kind(&self) -> CommandKind {
        CommandKind::Button
    }

    async fn execute(&self, event: &InboundEvent, _ctx: Arc<HandlerContext>) -> Result<()> {
        let action = action(event, "cancel")?;
        event
            .reply
            .reply(ReplyPayload::ephemeral(format!("❌ Cancelled `{action}`.")))
            .await?;
        Ok(())
    }
}

/// Select menu offering help topics
pub struct HelpTopicSelect;

impl HelpTopicSelect {
    fn topic_text(topic: &str) -> Option<&'static str> {
        match topic {
            "commands" => Some("Use `/help` to list every slash command."),
            "cooldowns" => Some("Each command has a short per-user cooldown, 3 seconds unless noted."),
            "privacy" => Some("Replies to buttons and forms are only visible to you."),
            _ => None,
        }
    }
}

#[async_trait]
impl InteractionHandler for HelpTopicSelect {
    fn id(&self) -> &str {
        "help_topic:select"
    }

    fn kind(&self) -> CommandKind {
        CommandKind::SelectMenu
    }

    async fn execute(&self, event: &InboundEvent, _ctx: Arc<HandlerContext>) -> Result<()> {
        let Some(topic) = event.values.first() else {
            bail!("select menu '{}' submitted with no selection", event.identifier);
        };
        let text = Self::topic_text(topic).ok_or_else(|| anyhow!("unknown help topic '{topic}'"))?;
        event.reply.reply(ReplyPayload::ephemeral(text)).await?;
        Ok(())
    }
}

/// Feedback form submission
pub struct FeedbackModal;

#[async_trait]
impl InteractionHandler for FeedbackModal {
    fn id(&self) -> &str {
        "feedback:submit"
    }

    fn kind(&self) -> CommandKind {
        CommandKind::Modal
    }

    async fn execute(&self, event: &InboundEvent, _ctx: Arc<HandlerContext>) -> Result<()> {
        let fields: Vec<&String> = event.values.iter().filter(|v| !v.trim().is_empty()).collect();
        if fields.is_empty() {
            bail!("feedback form submitted without any fields");
        }

        info!(
            "Feedback from user {} ({} field(s)): {}",
            event.caller_id,
            fields.len(),
            fields.iter().map(|f| f.as_str()).collect::<Vec<_>>().join(" | ")
        );

        event
            .reply
            .reply(ReplyPayload::ephemeral(format!(
                "📝 Thanks for the feedback! ({} field(s) received)",
                fields.len()
            )))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{context, event};

    #[tokio::test]
    async fn test_confirm_names_action() {
        let (event, reply) = event(CommandKind::Button, "confirm:deleteRole:roleA");
        ConfirmButton.execute(&event, context()).await.unwrap();

        assert_eq!(reply.only_content(), "✅ Confirmed `deleteRole:roleA`.");
    }

    #[tokio::test]
    async fn test_confirm_without_action_fails() {
        let (event, reply) = event(CommandKind::Button, "confirm:");
        assert!(ConfirmButton.execute(&event, context()).await.is_err());
        assert!(reply.sent().is_empty());
    }

    #[tokio::test]
    async fn test_cancel_names_action() {
        let (event, reply) = event(CommandKind::Button, "cancel:purge");
        CancelButton.execute(&event, context()).await.unwrap();

        assert_eq!(reply.only_content(), "❌ Cancelled `purge`.");
    }

    #[tokio::test]
    async fn test_help_topic_select() {
        let (event, reply) = event(CommandKind::SelectMenu, "help_topic:select");
        let event = event.with_values(vec!["cooldowns".to_string()]);
        HelpTopicSelect.execute(&event, context()).await.unwrap();

        assert!(reply.only_content().contains("cooldown"));
    }

    #[tokio::test]
    async fn test_help_topic_unknown_fails() {
        let (event, _reply) = event(CommandKind::SelectMenu, "help_topic:select");
        let event = event.with_values(vec!["weather".to_string()]);
        assert!(HelpTopicSelect.execute(&event, context()).await.is_err());
    }

    #[tokio::test]
    async fn test_feedback_modal_counts_fields() {
        let (event, reply) = event(CommandKind::Modal, "feedback:submit");
        let event = event.with_values(vec!["love it".to_string(), " ".to_string(), "more".to_string()]);
        FeedbackModal.execute(&event, context()).await.unwrap();

        assert_eq!(
            reply.only_content(),
            "📝 Thanks for the feedback! (2 field(s) received)"
        );
    }

    #[tokio::test]
    async fn test_feedback_modal_empty_fails() {
        let (event, _reply) = event(CommandKind::Modal, "feedback:submit");
        assert!(FeedbackModal.execute(&event, context()).await.is_err());
    }
}
