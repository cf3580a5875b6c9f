//! Reply capability backed by the Discord interaction API

use async_trait::async_trait;
use serenity::http::Http;
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::model::application::interaction::message_component::MessageComponentInteraction;
use serenity::model::application::interaction::modal::ModalSubmitInteraction;
use serenity::model::application::interaction::InteractionResponseType;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::core::{ReplyError, ReplyPayload};
use crate::dispatch::ReplyCapability;

/// The serenity interaction types that accept responses
pub enum SerenityInteraction {
    Command(ApplicationCommandInteraction),
    Component(MessageComponentInteraction),
    Modal(ModalSubmitInteraction),
}

/// Tracks acknowledgement locally since Discord only reports it by rejecting
/// a second initial response
pub struct SerenityReply {
    http: Arc<Http>,
    interaction: SerenityInteraction,
    replied: AtomicBool,
    deferred: AtomicBool,
}

impl SerenityReply {
    pub fn new(http: Arc<Http>, interaction: SerenityInteraction) -> Self {
        Self {
            http,
            interaction,
            replied: AtomicBool::new(false),
            deferred: AtomicBool::new(false),
        }
    }

    /// Send the initial response; `content` is `None` for deferrals
    async fn respond(
        &self,
        kind: InteractionResponseType,
        content: Option<String>,
        ephemeral: bool,
    ) -> serenity::Result<()> {
        match &self.interaction {
            SerenityInteraction::Command(i) => {
                i.create_interaction_response(&self.http, |response| {
                    response.kind(kind).interaction_response_data(|message| {
                        if let Some(content) = content {
                            message.content(content);
                        }
                        message.ephemeral(ephemeral)
                    })
                })
                .await
            }
            SerenityInteraction::Component(i) => {
                i.create_interaction_response(&self.http, |response| {
                    response.kind(kind).interaction_response_data(|message| {
                        if let Some(content) = content {
                            message.content(content);
                        }
                        message.ephemeral(ephemeral)
                    })
                })
                .await
            }
            SerenityInteraction::Modal(i) => {
                i.create_interaction_response(&self.http, |response| {
                    response.kind(kind).interaction_response_data(|message| {
                        if let Some(content) = content {
                            message.content(content);
                        }
                        message.ephemeral(ephemeral)
                    })
                })
                .await
            }
        }
    }
}

#[async_trait]
impl ReplyCapability for SerenityReply {
    async fn reply(&self, payload: ReplyPayload) -> Result<(), ReplyError> {
        if self.is_acknowledged() {
            return Err(ReplyError::AlreadyAcknowledged);
        }
        let ReplyPayload { content, ephemeral } = payload;
        self.respond(
            InteractionResponseType::ChannelMessageWithSource,
            Some(content),
            ephemeral,
        )
        .await
            .map_err(|e| ReplyError::Platform(e.to_string()))?;
        self.replied.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn follow_up(&self, payload: ReplyPayload) -> Result<(), ReplyError> {
        let ReplyPayload { content, ephemeral } = payload;
        let result = match &self.interaction {
            SerenityInteraction::Command(i) => {
                i.create_followup_message(&self.http, |m| m.content(content).ephemeral(ephemeral))
                    .await
            }
            SerenityInteraction::Component(i) => {
                i.create_followup_message(&self.http, |m| m.content(content).ephemeral(ephemeral))
                    .await
            }
            SerenityInteraction::Modal(i) => {
                i.create_followup_message(&self.http, |m| m.content(content).ephemeral(ephemeral))
                    .await
            }
        };
        result
            .map(|_| ())
            .map_err(|e| ReplyError::Platform(e.to_string()))
    }

    async fn defer(&self, ephemeral: bool) -> Result<(), ReplyError> {
        if self.is_acknowledged() {
            return Err(ReplyError::AlreadyAcknowledged);
        }
        self.respond(
            InteractionResponseType::DeferredChannelMessageWithSource,
            None,
            ephemeral,
        )
        .await
        .map_err(|e| ReplyError::Platform(e.to_string()))?;
        self.deferred.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn has_replied(&self) -> bool {
        self.replied.load(Ordering::SeqCst)
    }

    fn has_deferred(&self) -> bool {
        self.deferred.load(Ordering::SeqCst)
    }
}
