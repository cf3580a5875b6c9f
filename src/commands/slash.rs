//! # Application Command Registration
//!
//! Builds Discord application command definitions from the handler registry so
//! the commands Discord shows are exactly the ones the dispatcher can route.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: Derive definitions from registered handlers

use anyhow::Result;
use log::info;
use serenity::builder::CreateApplicationCommand;
use serenity::model::application::command::{Command, CommandType};
use serenity::model::id::GuildId;
use serenity::prelude::Context;

use super::registry::HandlerRegistry;
use crate::dispatch::CommandKind;

const FALLBACK_DESCRIPTION: &str = "No description";

/// Creates slash command definitions for every registered command handler
pub fn create_slash_commands(registry: &HandlerRegistry) -> Vec<CreateApplicationCommand> {
    registry
        .ids(CommandKind::Command)
        .into_iter()
        .filter_map(|name| registry.lookup_exact(CommandKind::Command, &name))
        .map(|handler| {
            let description = match handler.description() {
                "" => FALLBACK_DESCRIPTION,
                d => d,
            };
            let mut command = CreateApplicationCommand::default();
            command.name(handler.id()).description(description);
            command
        })
        .collect()
}

/// Creates user context menu definitions for every registered context menu handler
pub fn create_context_menu_commands(registry: &HandlerRegistry) -> Vec<CreateApplicationCommand> {
    registry
        .ids(CommandKind::ContextMenu)
        .into_iter()
        .map(|name| {
            let mut command = CreateApplicationCommand::default();
            command.name(name).kind(CommandType::User);
            command
        })
        .collect()
}

/// Registers all application commands globally
pub async fn register_global_commands(ctx: &Context, registry: &HandlerRegistry) -> Result<()> {
    let slash_commands = create_slash_commands(registry);
    let context_commands = create_context_menu_commands(registry);
    let total = slash_commands.len() + context_commands.len();

    Command::set_global_application_commands(&ctx.http, |commands| {
        for command in slash_commands {
            commands.add_application_command(command);
        }
        for command in context_commands {
            commands.add_application_command(command);
        }
        commands
    })
    .await?;

    info!("Global application commands registered ({total} commands)");
    Ok(())
}

/// Registers all application commands for a specific guild
pub async fn register_guild_commands(
    ctx: &Context,
    guild_id: GuildId,
    registry: &HandlerRegistry,
) -> Result<()> {
    let slash_commands = create_slash_commands(registry);
    let context_commands = create_context_menu_commands(registry);
    let total = slash_commands.len() + context_commands.len();

    guild_id
        .set_application_commands(&ctx.http, |commands| {
            for command in slash_commands {
                commands.add_application_command(command);
            }
            for command in context_commands {
                commands.add_application_command(command);
            }
            commands
        })
        .await?;

    info!("Guild application commands registered for guild {guild_id} ({total} commands)");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::handlers::create_all_handlers;

    fn registry() -> HandlerRegistry {
        let mut registry = HandlerRegistry::new();
        registry.register_all(create_all_handlers()).unwrap();
        registry
    }

    #[test]
    fn test_create_slash_commands_from_registry() {
        let commands = create_slash_commands(&registry());
        let names: Vec<&str> = commands
            .iter()
            .map(|c| c.0.get("name").unwrap().as_str().unwrap())
            .collect();

        assert_eq!(names, vec!["ping", "uptime", "help"]);
        let description = commands[0].0.get("description").unwrap().as_str().unwrap();
        assert_eq!(description, "Test bot responsiveness");
    }

    #[test]
    fn test_create_context_menu_commands() {
        let commands = create_context_menu_commands(&registry());
        assert_eq!(commands.len(), 1);

        let name = commands[0].0.get("name").unwrap().as_str().unwrap();
        assert_eq!(name, "User Info");
        assert!(commands[0].0.get("description").is_none());
    }
}
