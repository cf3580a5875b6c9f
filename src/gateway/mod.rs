//! # Gateway Adapter
//!
//! Turns serenity interactions into platform-neutral `InboundEvent`s. Each event
//! carries a `SerenityReply` so handlers and the dispatcher can respond without
//! touching serenity types.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

pub mod reply;

use log::debug;
use serenity::http::Http;
use serenity::model::application::command::CommandType;
use serenity::model::application::component::{ActionRowComponent, ComponentType};
use serenity::model::application::interaction::Interaction;
use std::sync::Arc;

pub use reply::{SerenityInteraction, SerenityReply};

use crate::dispatch::{CommandKind, InboundEvent};

/// Kind for an application command interaction; `None` for types we don't route
pub fn kind_for_command_type(command_type: CommandType) -> Option<CommandKind> {
    match command_type {
        CommandType::ChatInput => Some(CommandKind::Command),
        CommandType::User | CommandType::Message => Some(CommandKind::ContextMenu),
        _ => None,
    }
}

/// Kind for a message component interaction
///
/// Every non-button component that can be interacted with is a select menu.
pub fn kind_for_component_type(component_type: ComponentType) -> CommandKind {
    match component_type {
        ComponentType::Button => CommandKind::Button,
        _ => CommandKind::SelectMenu,
    }
}

/// Classify a gateway interaction
///
/// Returns `None` for interactions outside the dispatcher's scope (pings,
/// autocomplete, unknown command types).
pub fn classify(http: Arc<Http>, interaction: Interaction) -> Option<InboundEvent> {
    match interaction {
        Interaction::ApplicationCommand(command) => {
            let kind = kind_for_command_type(command.data.kind)?;
            let identifier = command.data.name.clone();
            let caller_id = command.user.id.to_string();
            let guild_id = command.guild_id.map(|id| id.to_string());
            let values: Vec<String> = command
                .data
                .target_id
                .map(|target| target.0.to_string())
                .into_iter()
                .collect();

            let reply = Arc::new(SerenityReply::new(http, SerenityInteraction::Command(command)));
            Some(finish(InboundEvent::new(kind, identifier, caller_id, reply), guild_id, values))
        }
        Interaction::MessageComponent(component) => {
            let kind = kind_for_component_type(component.data.component_type);
            let identifier = component.data.custom_id.clone();
            let caller_id = component.user.id.to_string();
            let guild_id = component.guild_id.map(|id| id.to_string());
            let values = component.data.values.clone();

            let reply = Arc::new(SerenityReply::new(
                http,
                SerenityInteraction::Component(component),
            ));
            Some(finish(InboundEvent::new(kind, identifier, caller_id, reply), guild_id, values))
        }
        Interaction::ModalSubmit(modal) => {
            let identifier = modal.data.custom_id.clone();
            let caller_id = modal.user.id.to_string();
            let guild_id = modal.guild_id.map(|id| id.to_string());
            let values: Vec<String> = modal
                .data
                .components
                .iter()
                .flat_map(|row| row.components.iter())
                .filter_map(|component| match component {
                    ActionRowComponent::InputText(input) => Some(input.value.clone()),
                    _ => None,
                })
                .collect();

            let reply = Arc::new(SerenityReply::new(http, SerenityInteraction::Modal(modal)));
            Some(finish(
                InboundEvent::new(CommandKind::Modal, identifier, caller_id, reply),
                guild_id,
                values,
            ))
        }
        other => {
            debug!("Ignoring interaction outside dispatch scope: {:?}", other.kind());
            None
        }
    }
}

fn finish(event: InboundEvent, guild_id: Option<String>, values: Vec<String>) -> InboundEvent {
    let event = event.with_values(values);
    match guild_id {
        Some(guild_id) => event.with_guild(guild_id),
        None => event,
    }
}
