//! Page-level route components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each form page owns its signals and one `DraftSession`; the history page
//! hands a sent email back to the job application form. The helpers here
//! are the small browser bridges the pages share.

pub mod compose;
pub mod history;
pub mod job_application;

use leptos::prelude::*;

use crate::util::draft_session::DraftSession;

/// `on:input` handler that updates `signal` and notifies the draft session.
pub(crate) fn draft_input(
    signal: RwSignal<String>,
    drafts: DraftSession,
    field: &'static str,
) -> impl Fn(leptos::ev::Event) + Copy + 'static {
    move |ev| {
        let value = event_target_value(&ev);
        signal.set(value.clone());
        drafts.field_changed(field, &value);
    }
}

/// Blocking `window.confirm`; always false during SSR.
pub(crate) fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}

/// First file chosen in a file input.
#[cfg(feature = "hydrate")]
pub(crate) fn selected_file(input: NodeRef<leptos::html::Input>) -> Option<web_sys::File> {
    input.get_untracked()?.files()?.get(0)
}

/// Reset a file input after a successful send.
#[cfg(feature = "hydrate")]
pub(crate) fn reset_file_input(input: NodeRef<leptos::html::Input>, name: RwSignal<Option<String>>) {
    name.set(None);
    if let Some(el) = input.get_untracked() {
        el.set_value("");
    }
}

/// `on:change` handler that records the chosen file's name.
pub(crate) fn file_picked(
    input: NodeRef<leptos::html::Input>,
    name: RwSignal<Option<String>>,
) -> impl Fn(leptos::ev::Event) + Copy + 'static {
    move |_| {
        #[cfg(feature = "hydrate")]
        name.set(selected_file(input).map(|f| f.name()));
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (input, name);
        }
    }
}
