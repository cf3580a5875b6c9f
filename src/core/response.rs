//! Reply payloads and the fixed user-visible strings the dispatcher sends
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Cooldown and failure notices, message truncation

use std::time::Duration;

use crate::dispatch::CommandKind;

/// Discord message content limit
pub const MESSAGE_LIMIT: usize = 2000;

/// Plain text response sent through a reply capability
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyPayload {
    pub content: String,
    /// Visible only to the invoking user
    pub ephemeral: bool,
}

impl ReplyPayload {
    /// Visible to the whole channel
    pub fn public(content: impl Into<String>) -> Self {
        Self {
            content: truncate_for_message(&content.into()),
            ephemeral: false,
        }
    }

    /// Visible only to the caller
    pub fn ephemeral(content: impl Into<String>) -> Self {
        Self {
            content: truncate_for_message(&content.into()),
            ephemeral: true,
        }
    }
}

/// Message shown when a caller is still on cooldown for a command
pub fn cooldown_message(command_name: &str, retry_after: Duration) -> String {
    format!(
        "Please wait {:.1} more second(s) before reusing the `{}` command.",
        retry_after.as_secs_f64(),
        command_name
    )
}

/// Generic notice shown when a handler fails
///
/// The text depends only on the interaction kind, never on the underlying error.
pub fn failure_message(kind: CommandKind) -> &'static str {
    match kind {
        CommandKind::Command => "There was an error while executing this command!",
        CommandKind::Button => "There was an error while processing this button!",
        CommandKind::SelectMenu => "There was an error while processing this select menu!",
        CommandKind::ContextMenu => {
            "There was an error while processing this context menu command!"
        }
        CommandKind::Modal => "There was an error while processing this form!",
    }
}

/// Truncate text to fit Discord message limits (2000 chars), UTF-8 safe
pub fn truncate_for_message(text: &str) -> String {
    if text.len() <= MESSAGE_LIMIT {
        return text.to_string();
    }

    let suffix = "...";
    let budget = MESSAGE_LIMIT - suffix.len();
    let mut end = budget;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}{}", &text[..end], suffix)
}
