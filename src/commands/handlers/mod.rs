//! Built-in interaction handlers
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Handlers for every interaction kind (commands, context menus, buttons, select menus, modals)

pub mod components;
pub mod context_menu;
pub mod utility;

use std::sync::Arc;

use super::handler::InteractionHandler;

/// Create all built-in handlers in load order
///
/// Returns a vector of handlers ready to be registered with HandlerRegistry.
pub fn create_all_handlers() -> Vec<Arc<dyn InteractionHandler>> {
    vec![
        // Slash commands
        Arc::new(utility::PingHandler),
        Arc::new(utility::UptimeHandler),
        Arc::new(utility::HelpHandler),
        // Context menus
        Arc::new(context_menu::UserInfoHandler),
        // Buttons
        Arc::new(components::ConfirmButton),
        Arc::new(components::CancelButton),
        // Select menus
        Arc::new(components::HelpTopicSelect),
        // Modals
        Arc::new(components::FeedbackModal),
    ]
}
