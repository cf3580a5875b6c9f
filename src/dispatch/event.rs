//! Inbound interaction events and the reply capability they carry
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Platform-neutral event shape shared by the gateway adapter and tests

use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

use super::kind::CommandKind;
use crate::core::{ReplyError, ReplyPayload};

/// Caller-specific response channel for a single interaction
///
/// An interaction accepts exactly one initial response (a reply or a deferral);
/// anything after that must go through `follow_up`.
#[async_trait]
pub trait ReplyCapability: Send + Sync {
    /// Send the initial response
    async fn reply(&self, payload: ReplyPayload) -> Result<(), ReplyError>;

    /// Send an additional message after the initial response
    async fn follow_up(&self, payload: ReplyPayload) -> Result<(), ReplyError>;

    /// Acknowledge now and respond later through `follow_up`
    async fn defer(&self, ephemeral: bool) -> Result<(), ReplyError>;

    fn has_replied(&self) -> bool;

    fn has_deferred(&self) -> bool;

    /// True once any initial response has gone out
    fn is_acknowledged(&self) -> bool {
        self.has_replied() || self.has_deferred()
    }
}

/// One interaction as seen by the dispatcher
#[derive(Clone)]
pub struct InboundEvent {
    pub kind: CommandKind,
    /// Command name for commands and context menus, custom id otherwise
    pub identifier: String,
    pub caller_id: String,
    pub guild_id: Option<String>,
    /// Selected options for select menus, submitted field values for modals
    pub values: Vec<String>,
    pub reply: Arc<dyn ReplyCapability>,
}

impl InboundEvent {
    pub fn new(
        kind: CommandKind,
        identifier: impl Into<String>,
        caller_id: impl Into<String>,
        reply: Arc<dyn ReplyCapability>,
    ) -> Self {
        Self {
            kind,
            identifier: identifier.into(),
            caller_id: caller_id.into(),
            guild_id: None,
            values: Vec::new(),
            reply,
        }
    }

    pub fn with_guild(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = Some(guild_id.into());
        self
    }

    pub fn with_values(mut self, values: Vec<String>) -> Self {
        self.values = values;
        self
    }

    /// Dynamic part of a custom id after the given routing prefix
    ///
    /// `confirm:deleteRole:roleA` with prefix `confirm` yields `deleteRole:roleA`.
    pub fn suffix_after(&self, prefix: &str) -> Option<&str> {
        self.identifier
            .strip_prefix(prefix)
            .and_then(|rest| rest.strip_prefix(super::kind::PREFIX_DELIMITER))
    }
}

impl fmt::Debug for InboundEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InboundEvent")
            .field("kind", &self.kind)
            .field("identifier", &self.identifier)
            .field("caller_id", &self.caller_id)
            .field("guild_id", &self.guild_id)
            .field("values", &self.values)
            .finish_non_exhaustive()
    }
}
