//! Transient toast messages.
//!
//! DESIGN
//! ======
//! The toast list is the notification surface for draft and send status. Ids
//! are monotonically increasing so a delayed auto-dismiss never removes a
//! newer toast that reused a slot. The list is bounded; the oldest toast is
//! evicted first.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use drafts::NoticeKind;

/// Maximum number of toasts shown at once.
pub const TOAST_CAP: usize = 4;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub text: String,
    pub kind: NoticeKind,
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Append a toast and return its id, evicting the oldest at the cap.
    pub fn push(&mut self, text: &str, kind: NoticeKind) -> u64 {
        self.next_id += 1;
        if self.toasts.len() >= TOAST_CAP {
            self.toasts.remove(0);
        }
        self.toasts.push(Toast { id: self.next_id, text: text.to_owned(), kind });
        self.next_id
    }

    /// Remove the toast with `id`. Returns false if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
