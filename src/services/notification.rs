// Linkshelf notification sinks
// The core reports outcomes through `NotificationSink` and never waits on it.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use tracing::{info, warn};

use crate::types::notification::{Notification, NotificationKind};

/// Receives transient user-facing messages. Fire-and-forget.
pub trait NotificationSink: Send {
    fn notify(&mut self, notification: Notification);
}

/// Logs notifications through `tracing`.
#[derive(Debug, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&mut self, notification: Notification) {
        match notification.kind {
            NotificationKind::Success => info!(title = %notification.title, "{}", notification.message),
            NotificationKind::Error => warn!(title = %notification.title, "{}", notification.message),
        }
    }
}

/// Buffers notifications until a front end drains them.
///
/// Clones share the same buffer, so one handle can live in the `App` while
/// another is drained by the RPC layer or a test.
#[derive(Debug, Clone, Default)]
pub struct NotificationQueue {
    pending: Arc<Mutex<VecDeque<Notification>>>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns everything queued so far, oldest first.
    pub fn drain(&self) -> Vec<Notification> {
        match self.pending.lock() {
            Ok(mut q) => q.drain(..).collect(),
            Err(poisoned) => poisoned.into_inner().drain(..).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.pending.lock().map(|q| q.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl NotificationSink for NotificationQueue {
    fn notify(&mut self, notification: Notification) {
        match self.pending.lock() {
            Ok(mut q) => q.push_back(notification),
            Err(poisoned) => poisoned.into_inner().push_back(notification),
        }
    }
}
