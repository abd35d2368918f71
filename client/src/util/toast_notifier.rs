//! `Notifier` implementation that renders through the shared toast list.

use std::time::Duration;

use drafts::{NoticeKind, Notifier};
use leptos::prelude::*;

use crate::state::toast::ToastState;

/// How long page-level status toasts (send / generate results) stay visible.
pub const STATUS_TOAST: Duration = Duration::from_millis(4000);

#[derive(Clone, Copy)]
pub struct ToastNotifier {
    toasts: RwSignal<ToastState>,
}

impl ToastNotifier {
    pub fn new(toasts: RwSignal<ToastState>) -> Self {
        Self { toasts }
    }

    /// Show a page status message for [`STATUS_TOAST`].
    pub fn status(&self, text: &str, kind: NoticeKind) {
        self.show(text, kind, STATUS_TOAST);
    }
}

impl Notifier for ToastNotifier {
    fn show(&self, text: &str, kind: NoticeKind, duration: Duration) {
        let Some(id) = self.toasts.try_update(|t| t.push(text, kind)) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let toasts = self.toasts;
            gloo_timers::callback::Timeout::new(super::browser_timer::delay_millis(duration), move || {
                toasts.try_update(|t| t.dismiss(id));
            })
            .forget();
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, duration);
        }
    }
}
