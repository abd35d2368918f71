//! Transient user-visible messages.
//!
//! The store only asks for a message to be shown; rendering and auto-dismiss
//! belong to the host page.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Info,
    Error,
}

impl NoticeKind {
    /// Lowercase label, usable as a CSS modifier.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Error => "error",
        }
    }
}

pub trait Notifier {
    /// Show `text` for `duration`, then dismiss it.
    fn show(&self, text: &str, kind: NoticeKind, duration: Duration);
}

/// A message captured by [`RecordingNotifier`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
    pub duration: Duration,
}

/// Notifier that keeps every message. Clones share the log.
#[derive(Clone, Debug, Default)]
pub struct RecordingNotifier {
    log: Rc<RefCell<Vec<Notice>>>,
}

impl RecordingNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn notices(&self) -> Vec<Notice> {
        self.log.borrow().clone()
    }

    #[must_use]
    pub fn texts(&self) -> Vec<String> {
        self.log.borrow().iter().map(|n| n.text.clone()).collect()
    }

    pub fn clear(&self) {
        self.log.borrow_mut().clear();
    }
}

impl Notifier for RecordingNotifier {
    fn show(&self, text: &str, kind: NoticeKind, duration: Duration) {
        self.log
            .borrow_mut()
            .push(Notice { text: text.to_owned(), kind, duration });
    }
}
