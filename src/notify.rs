//! Notifications
//!
//! The toast sink the stores call after an effective add or remove. Delivery
//! is fire-and-forget and carries no correctness weight; a store behaves
//! identically under [`NoopNotifier`].

use std::cell::RefCell;

/// Fire-and-forget toast sink.
pub trait Notifier {
    /// Deliver a toast with a short title and a one-line description.
    fn notify(&self, title: &str, description: &str);
}

/// Notifier that discards every toast.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify(&self, _title: &str, _description: &str) {}
}

/// Notifier that buffers toasts in memory, for tests and demos.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    toasts: RefCell<Vec<(String, String)>>,
}

impl RecordingNotifier {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All toasts delivered so far, as (title, description) pairs.
    #[must_use]
    pub fn toasts(&self) -> Vec<(String, String)> {
        self.toasts.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, title: &str, description: &str) {
        self.toasts
            .borrow_mut()
            .push((title.to_string(), description.to_string()));
    }
}
