//! Test doubles for handlers and the dispatcher
//!
//! `RecordingReply` keeps every response it is asked to send and enforces the
//! one-initial-response rule the way Discord does.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::commands::HandlerContext;
use crate::core::{ReplyError, ReplyPayload};
use crate::dispatch::{CommandKind, InboundEvent, ReplyCapability};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Reply(ReplyPayload),
    FollowUp(ReplyPayload),
    Defer,
}

#[derive(Default)]
pub struct RecordingReply {
    sent: Mutex<Vec<Sent>>,
    replied: AtomicBool,
    deferred: AtomicBool,
}

impl RecordingReply {
    fn log(&self) -> MutexGuard<'_, Vec<Sent>> {
        self.sent.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Everything sent so far, in order
    pub fn sent(&self) -> Vec<Sent> {
        self.log().clone()
    }

    /// Content of the single message sent; panics if there isn't exactly one
    pub fn only_content(&self) -> String {
        match self.sent().as_slice() {
            [Sent::Reply(p)] | [Sent::FollowUp(p)] => p.content.clone(),
            other => panic!("expected exactly one message, got {other:?}"),
        }
    }
}

#[async_trait]
impl ReplyCapability for RecordingReply {
    async fn reply(&self, payload: ReplyPayload) -> Result<(), ReplyError> {
        if self.is_acknowledged() {
            return Err(ReplyError::AlreadyAcknowledged);
        }
        self.replied.store(true, Ordering::SeqCst);
        self.log().push(Sent::Reply(payload));
        Ok(())
    }

    async fn follow_up(&self, payload: ReplyPayload) -> Result<(), ReplyError> {
        self.log().push(Sent::FollowUp(payload));
        Ok(())
    }

    async fn defer(&self, _ephemeral: bool) -> Result<(), ReplyError> {
        if self.is_acknowledged() {
            return Err(ReplyError::AlreadyAcknowledged);
        }
        self.deferred.store(true, Ordering::SeqCst);
        self.log().push(Sent::Defer);
        Ok(())
    }

    fn has_replied(&self) -> bool {
        self.replied.load(Ordering::SeqCst)
    }

    fn has_deferred(&self) -> bool {
        self.deferred.load(Ordering::SeqCst)
    }
}

/// Event from `user1` with a fresh recording reply
pub fn event(kind: CommandKind, identifier: &str) -> (InboundEvent, Arc<RecordingReply>) {
    let reply = Arc::new(RecordingReply::default());
    let event = InboundEvent::new(kind, identifier, "user1", reply.clone());
    (event, reply)
}

/// Context listing the built-in slash commands
pub fn context() -> Arc<HandlerContext> {
    Arc::new(HandlerContext::new(vec![
        "ping".to_string(),
        "uptime".to_string(),
        "help".to_string(),
    ]))
}
