// Core layer - configuration, errors and reply payloads
pub mod core;

// Features layer - cooldown tracking
pub mod features;

// Dispatch layer - event model, resolution and failure containment
pub mod dispatch;

// Application layer - handler trait, registry and built-in handlers
pub mod commands;

// Platform adapter - serenity interactions to inbound events
pub mod gateway;

// Re-export core config for convenience
pub use core::Config;

pub use commands::{create_all_handlers, HandlerContext, HandlerRegistry, InteractionHandler};
pub use dispatch::{CommandKind, DispatchOutcome, Dispatcher, InboundEvent, ReplyCapability};
pub use features::rate_limiting::{CooldownCheck, CooldownTracker};
