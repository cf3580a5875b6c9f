//! # Interaction Dispatch
//!
//! Classifies inbound interactions, resolves them to a registered handler,
//! throttles slash commands per caller and contains handler failures.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

pub mod dispatcher;
pub mod event;
pub mod kind;
pub mod resolver;

pub use dispatcher::{DispatchOutcome, Dispatcher};
pub use event::{InboundEvent, ReplyCapability};
pub use kind::{routing_prefix, CommandKind, PREFIX_DELIMITER};
pub use resolver::Resolver;
