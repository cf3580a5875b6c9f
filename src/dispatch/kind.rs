//! Interaction kinds and custom id conventions

use std::fmt;

/// Delimiter separating a custom id's routing prefix from its dynamic suffix
pub const PREFIX_DELIMITER: char = ':';

/// The five shapes of inbound interaction the dispatcher understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CommandKind {
    Command,
    Button,
    SelectMenu,
    ContextMenu,
    Modal,
}

impl CommandKind {
    pub const ALL: [CommandKind; 5] = [
        CommandKind::Command,
        CommandKind::Button,
        CommandKind::SelectMenu,
        CommandKind::ContextMenu,
        CommandKind::Modal,
    ];

    /// Only slash commands are throttled per caller
    pub fn is_throttled(self) -> bool {
        matches!(self, CommandKind::Command)
    }

    /// Kinds whose identifiers are free-form custom ids and may carry a
    /// `prefix:suffix` shape. Commands and context menus route by name only.
    pub fn supports_prefix(self) -> bool {
        matches!(
            self,
            CommandKind::Button | CommandKind::SelectMenu | CommandKind::Modal
        )
    }

    /// Unresolved commands point at a deployment mismatch and are worth a warning;
    /// stale components from old messages are not.
    pub fn warns_when_unresolved(self) -> bool {
        matches!(self, CommandKind::Command)
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CommandKind::Command => "command",
            CommandKind::Button => "button",
            CommandKind::SelectMenu => "select menu",
            CommandKind::ContextMenu => "context menu",
            CommandKind::Modal => "modal",
        };
        f.write_str(name)
    }
}

/// Routing prefix of a prefix-capable id (`confirm:deleteRole` -> `confirm`)
///
/// Returns `None` when the id has no delimiter or nothing before it.
pub fn routing_prefix(id: &str) -> Option<&str> {
    id.split_once(PREFIX_DELIMITER)
        .map(|(prefix, _)| prefix)
        .filter(|prefix| !prefix.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_commands_are_throttled() {
        for kind in CommandKind::ALL {
            assert_eq!(kind.is_throttled(), kind == CommandKind::Command);
        }
    }

    #[test]
    fn test_prefix_kinds() {
        assert!(CommandKind::Button.supports_prefix());
        assert!(CommandKind::SelectMenu.supports_prefix());
        assert!(CommandKind::Modal.supports_prefix());
        assert!(!CommandKind::Command.supports_prefix());
        assert!(!CommandKind::ContextMenu.supports_prefix());
    }

    #[test]
    fn test_routing_prefix_splits_on_first_delimiter() {
        assert_eq!(routing_prefix("confirm:deleteRole"), Some("confirm"));
        assert_eq!(routing_prefix("confirm:deleteRole:roleA"), Some("confirm"));
        assert_eq!(routing_prefix(":bare"), None);
        assert_eq!(routing_prefix("ping"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(CommandKind::SelectMenu.to_string(), "select menu");
        assert_eq!(CommandKind::Command.to_string(), "command");
    }
}
