//! Fixed-position stack of toast messages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the `RwSignal<ToastState>` provided by `App`. Toasts dismiss
//! themselves on a timer; clicking one dismisses it early.

#[cfg(test)]
#[path = "toast_host_test.rs"]
mod toast_host_test;

use drafts::NoticeKind;
use leptos::prelude::*;

use crate::state::toast::ToastState;

fn toast_class(kind: NoticeKind) -> String {
    format!("toast toast--{}", kind.as_str())
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host" role="status" aria-live="polite">
            {move || {
                toasts
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div
                                class=toast_class(toast.kind)
                                on:click=move |_| {
                                    toasts.update(|t| {
                                        t.dismiss(id);
                                    });
                                }
                            >
                                {toast.text}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
