//! Handler registry
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Key by (kind, id), reject duplicates, expose prefix-capable handlers

use log::debug;
use std::collections::HashMap;
use std::sync::Arc;

use super::handler::InteractionHandler;
use crate::core::RegistryError;
use crate::dispatch::kind::routing_prefix;
use crate::dispatch::CommandKind;

/// Registry mapping (kind, id) to handlers
///
/// Built once at startup and shared read-only afterwards. Registration order is
/// preserved and decides ties during prefix resolution.
///
/// # Example
///
/// ```ignore
/// let mut registry = HandlerRegistry::new();
/// registry.register(Arc::new(PingHandler))?;
/// registry.register(Arc::new(ConfirmButton))?;
///
/// let ping = registry.lookup_exact(CommandKind::Command, "ping");
/// ```
#[derive(Clone, Default)]
pub struct HandlerRegistry {
    handlers: Vec<Arc<dyn InteractionHandler>>,
    exact: HashMap<(CommandKind, String), usize>,
    reject_prefix_collisions: bool,
}

impl HandlerRegistry {
    /// Create an empty registry where overlapping prefixes resolve first-registered-wins
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry that refuses overlapping prefixes at registration
    pub fn strict() -> Self {
        Self {
            reject_prefix_collisions: true,
            ..Self::default()
        }
    }

    pub fn with_prefix_collision_check(mut self, enabled: bool) -> Self {
        self.reject_prefix_collisions = enabled;
        self
    }

    /// Register a handler under its declared kind and id
    ///
    /// Fails if the exact (kind, id) pair is taken, or, in strict mode, if the
    /// handler's routing prefix overlaps one already registered for the same kind.
    pub fn register(&mut self, handler: Arc<dyn InteractionHandler>) -> Result<(), RegistryError> {
        let kind = handler.kind();
        let id = handler.id().to_string();

        if self.exact.contains_key(&(kind, id.clone())) {
            return Err(RegistryError::Duplicate { kind, id });
        }

        if self.reject_prefix_collisions && kind.supports_prefix() {
            if let Some(prefix) = routing_prefix(&id) {
                if let Some(existing) = self.colliding_prefix(kind, prefix) {
                    let prefix = prefix.to_string();
                    let existing = existing.to_string();
                    return Err(RegistryError::PrefixCollision {
                        kind,
                        id,
                        prefix,
                        existing,
                    });
                }
            }
        }

        debug!("Registered {kind} handler: {id}");
        self.exact.insert((kind, id), self.handlers.len());
        self.handlers.push(handler);
        Ok(())
    }

    /// Register handlers in order, stopping at the first failure
    pub fn register_all<I>(&mut self, handlers: I) -> Result<(), RegistryError>
    where
        I: IntoIterator<Item = Arc<dyn InteractionHandler>>,
    {
        for handler in handlers {
            self.register(handler)?;
        }
        Ok(())
    }

    fn colliding_prefix(&self, kind: CommandKind, prefix: &str) -> Option<&str> {
        self.prefix_capable(kind)
            .map(|h| h.id())
            .find(|existing| {
                routing_prefix(existing)
                    .map(|other| other.starts_with(prefix) || prefix.starts_with(other))
                    .unwrap_or(false)
            })
    }

    /// Handler registered under exactly this (kind, id)
    pub fn lookup_exact(&self, kind: CommandKind, id: &str) -> Option<Arc<dyn InteractionHandler>> {
        self.exact
            .get(&(kind, id.to_string()))
            .map(|&idx| Arc::clone(&self.handlers[idx]))
    }

    /// Handlers of this kind whose id carries a routing prefix, in registration order
    pub fn prefix_capable(
        &self,
        kind: CommandKind,
    ) -> impl Iterator<Item = &Arc<dyn InteractionHandler>> + '_ {
        self.handlers
            .iter()
            .filter(move |h| h.kind() == kind && routing_prefix(h.id()).is_some())
    }

    /// Registered ids of one kind, in registration order
    pub fn ids(&self, kind: CommandKind) -> Vec<String> {
        self.handlers
            .iter()
            .filter(|h| h.kind() == kind)
            .map(|h| h.id().to_string())
            .collect()
    }

    /// Number of registered handlers across all kinds
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
