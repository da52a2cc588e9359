use std::sync::Mutex;

use tokio::sync::Notify;

/// Single-frame mailbox between capture and the tracking worker.
///
/// Holds at most one frame. Offering while a frame is still waiting replaces
/// it, so the worker always picks up the most recent one.
pub struct FrameSlot<T> {
    pending: Mutex<Option<T>>,
    ready: Notify,
}

impl<T> FrameSlot<T> {
    pub fn new() -> Self {
        Self {
            pending: Mutex::new(None),
            ready: Notify::new(),
        }
    }

    /// Stores `frame`. Returns `true` when an untaken frame was discarded.
    pub fn offer(&self, frame: T) -> bool {
        let replaced = {
            let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
            pending.replace(frame).is_some()
        };
        self.ready.notify_one();
        replaced
    }

    pub fn take(&self) -> Option<T> {
        self.pending
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .take()
    }

    /// Waits for the next frame. Cancel safe: dropping the future loses nothing.
    pub async fn next(&self) -> T {
        loop {
            if let Some(frame) = self.take() {
                return frame;
            }
            self.ready.notified().await;
        }
    }
}

impl<T> Default for FrameSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}
