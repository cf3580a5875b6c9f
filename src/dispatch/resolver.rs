//! Two-phase handler resolution: exact id, then routing prefix

use log::debug;
use std::sync::Arc;

use super::kind::{routing_prefix, CommandKind};
use crate::commands::{HandlerRegistry, InteractionHandler};

pub struct Resolver {
    registry: Arc<HandlerRegistry>,
}

impl Resolver {
    pub fn new(registry: Arc<HandlerRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }

    /// Find the single handler for an identifier of the given kind
    ///
    /// An exact match always wins. Otherwise, for custom-id kinds, the first
    /// registered prefix-capable handler whose prefix starts the identifier is used.
    pub fn resolve(&self, kind: CommandKind, identifier: &str) -> Option<Arc<dyn InteractionHandler>> {
        if let Some(handler) = self.registry.lookup_exact(kind, identifier) {
            return Some(handler);
        }

        if !kind.supports_prefix() {
            return None;
        }

        let handler = self
            .registry
            .prefix_capable(kind)
            .find(|candidate| {
                routing_prefix(candidate.id())
                    .map(|prefix| identifier.starts_with(prefix))
                    .unwrap_or(false)
            })
            .cloned();

        if let Some(ref h) = handler {
            debug!("Resolved {kind} '{identifier}' by prefix to '{}'", h.id());
        }
        handler
    }
}
