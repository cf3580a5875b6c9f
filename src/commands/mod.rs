//! # Command System
//!
//! Interaction handlers, their registry and Discord command registration.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: Single handler trait for every interaction kind, duplicate-rejecting registry

pub mod context;
pub mod handler;
pub mod handlers;
pub mod registry;
pub mod slash;

pub mod testing;

// Re-export handler infrastructure
pub use context::HandlerContext;
pub use handler::InteractionHandler;
pub use handlers::create_all_handlers;
pub use registry::HandlerRegistry;

pub use slash::{
    create_context_menu_commands, create_slash_commands, register_global_commands,
    register_guild_commands,
};
