use serde::{Deserialize, Serialize};

use crate::model::notification::QueuedNotification;

/// FIFO backing store of the notification queue.
///
/// Dequeuing advances `offset` instead of shifting the vector. Once the consumed head makes
/// up at least half of the vector it is drained and the offset reset, which bounds memory
/// held by delivered items. This is also the on-disk snapshot format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueueBuffer {
    pub offset: usize,
    pub queue: Vec<QueuedNotification>,
}

impl QueueBuffer {
    pub fn push(&mut self, notification: QueuedNotification) {
        self.queue.push(notification);
    }

    /// Removes and returns the head of the queue.
    pub fn pop(&mut self) -> Option<QueuedNotification> {
        // A snapshot written by hand may carry an offset past the end
        if self.offset >= self.queue.len() {
            self.offset = 0;
            self.queue.clear();
            return None;
        }

        let notification = self.queue[self.offset].clone();
        self.offset += 1;

        if self.offset * 2 >= self.queue.len() {
            self.queue.drain(..self.offset);
            self.offset = 0;
        }

        Some(notification)
    }

    /// Number of pending notifications.
    pub fn len(&self) -> usize {
        self.queue.len().saturating_sub(self.offset)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pending notifications in delivery order.
    pub fn pending(&self) -> &[QueuedNotification] {
        self.queue.get(self.offset..).unwrap_or_default()
    }

    /// Moves every pending notification of `other` behind this buffer's pending ones.
    pub fn append(&mut self, other: QueueBuffer) {
        let QueueBuffer { offset, mut queue } = other;
        if offset < queue.len() {
            self.queue.extend(queue.drain(offset..));
        }
    }
}
