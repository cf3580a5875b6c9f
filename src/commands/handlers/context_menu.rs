//! Context menu handlers
//!
//! Handles: User Info
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: User Info context menu

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use crate::commands::context::HandlerContext;
use crate::commands::handler::InteractionHandler;
use crate::core::ReplyPayload;
use crate::dispatch::{CommandKind, InboundEvent};

pub const USER_INFO: &str = "User Info";

/// Right-click "Apps > User Info" on a member
pub struct UserInfoHandler;

#[async_trait]
impl InteractionHandler for UserInfoHandler {
    fn id(&self) -> &str {
        USER_INFO
    }

    fn kind(&self) -> CommandKind {
        CommandKind::ContextMenu
    }

    async fn execute(&self, event: &InboundEvent, _ctx: Arc<HandlerContext>) -> Result<()> {
        let target = event.values.first().unwrap_or(&event.caller_id);
        let content = format!(
            "👤 **User ID:** {}\n🏠 **Guild:** {}",
            target,
            event.guild_id.as_deref().unwrap_or("Direct Messages")
        );
        event.reply.reply(ReplyPayload::ephemeral(content)).await?;
        Ok(())
    }
}
