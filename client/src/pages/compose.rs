//! General compose page: recipient, subject, body, optional attachment.
//!
//! The body textarea doubles as the key-points input for "Generate with AI",
//! which replaces it with the generated email.

#[cfg(test)]
#[path = "compose_test.rs"]
mod compose_test;

use drafts::{FieldBindings, FormSchema, NoticeKind};
use leptos::prelude::*;

use super::{confirm, draft_input, file_picked};
use crate::state::toast::ToastState;
use crate::util::draft_session::{DraftSession, signal_binding};
use crate::util::toast_notifier::ToastNotifier;
use crate::util::validate::{is_valid_email, required};

const CONFIRM_CLEAR: &str = "Are you sure you want to clear the draft?";
const FIELDS_INVALID: &str = "Please fill in all fields correctly.";
const POINTS_REQUIRED: &str = "Please provide some key points to generate the email.";

/// A general email that passed validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outgoing {
    pub recipient_email: String,
    pub subject: String,
    pub email_body: String,
}

/// All three fields are required; any failure shares one message.
///
/// # Errors
///
/// Returns the shared message when any field is missing or malformed.
pub fn validate_compose(recipient_email: &str, subject: &str, email_body: &str) -> Result<Outgoing, &'static str> {
    if !is_valid_email(recipient_email) {
        return Err(FIELDS_INVALID);
    }
    let subject = required(subject, FIELDS_INVALID)?;
    required(email_body, FIELDS_INVALID)?;
    Ok(Outgoing {
        recipient_email: recipient_email.trim().to_owned(),
        subject,
        email_body: email_body.to_owned(),
    })
}

#[component]
pub fn ComposePage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let status = ToastNotifier::new(toasts);

    let recipient_email = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let email_body = RwSignal::new(String::new());
    let attachment_name = RwSignal::new(None::<String>);
    let attachment_ref = NodeRef::<leptos::html::Input>::new();
    let generating = RwSignal::new(false);
    let sending = RwSignal::new(false);

    let drafts = DraftSession::start(
        FormSchema::compose(),
        FieldBindings::new()
            .with("recipientEmail", signal_binding(recipient_email))
            .with("subject", signal_binding(subject))
            .with("emailBody", signal_binding(email_body)),
        toasts,
    );

    let on_generate = move |_| {
        if generating.get_untracked() {
            return;
        }
        let points = match required(&email_body.get_untracked(), POINTS_REQUIRED) {
            Ok(p) => p,
            Err(msg) => {
                status.status(msg, NoticeKind::Error);
                return;
            }
        };
        generating.set(true);

        leptos::task::spawn_local(async move {
            match crate::net::api::compose_email(&points).await {
                Ok(generated) => {
                    subject.set(generated.subject);
                    email_body.set(generated.email_body);
                    status.status("Email generated successfully!", NoticeKind::Success);
                    drafts.schedule_save();
                }
                Err(e) => status.status(&e, NoticeKind::Error),
            }
            generating.set(false);
        });
    };

    let on_send = move |_| {
        if sending.get_untracked() {
            return;
        }
        let outgoing = match validate_compose(
            &recipient_email.get_untracked(),
            &subject.get_untracked(),
            &email_body.get_untracked(),
        ) {
            Ok(o) => o,
            Err(msg) => {
                status.status(msg, NoticeKind::Error);
                return;
            }
        };
        sending.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let attachment = super::selected_file(attachment_ref);
            let sent = crate::net::api::send_email(
                &outgoing.recipient_email,
                &outgoing.subject,
                &outgoing.email_body,
                attachment.as_ref(),
            )
            .await;
            match sent {
                Ok(()) => {
                    crate::net::api::record_history(&crate::net::api::HistoryEntry {
                        recruiter_email: outgoing.recipient_email,
                        role: outgoing.subject,
                        email_body: outgoing.email_body,
                        resume_file: attachment.map(|f| f.name()),
                    })
                    .await;
                    status.status("Email sent successfully!", NoticeKind::Success);
                    drafts.complete_send();
                    super::reset_file_input(attachment_ref, attachment_name);
                }
                Err(e) => status.status(&e, NoticeKind::Error),
            }
            sending.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = outgoing;
            sending.set(false);
        }
    };

    let on_clear = move |_| {
        if confirm(CONFIRM_CLEAR) {
            drafts.clear_by_user();
        }
    };

    view! {
        <section class="form-page">
            <h1>"Compose"</h1>
            <form class="mail-form" on:submit=|ev| ev.prevent_default()>
                <label class="mail-form__label">
                    "To"
                    <input
                        class="mail-form__input"
                        type="email"
                        placeholder="someone@example.com"
                        prop:value=move || recipient_email.get()
                        on:input=draft_input(recipient_email, drafts, "recipientEmail")
                    />
                </label>
                <label class="mail-form__label">
                    "Subject"
                    <input
                        class="mail-form__input"
                        type="text"
                        prop:value=move || subject.get()
                        on:input=draft_input(subject, drafts, "subject")
                    />
                </label>
                <label class="mail-form__label">
                    "Message or key points"
                    <textarea
                        class="mail-form__textarea"
                        rows="12"
                        placeholder="A few bullet points, then Generate with AI"
                        prop:value=move || email_body.get()
                        on:input=draft_input(email_body, drafts, "emailBody")
                    ></textarea>
                </label>
                <label class="mail-form__label">
                    "Attachment"
                    <input
                        class="mail-form__input"
                        type="file"
                        node_ref=attachment_ref
                        on:change=file_picked(attachment_ref, attachment_name)
                    />
                    <span class="mail-form__file-name">
                        {move || attachment_name.get().unwrap_or_else(|| "No file chosen".to_owned())}
                    </span>
                </label>
                <div class="mail-form__actions">
                    <button type="button" class="btn" on:click=on_generate disabled=move || generating.get()>
                        {move || if generating.get() { "Generating..." } else { "Generate with AI" }}
                    </button>
                    <button type="button" class="btn btn--primary" on:click=on_send disabled=move || sending.get()>
                        {move || if sending.get() { "Sending..." } else { "Send Email" }}
                    </button>
                    <button type="button" class="btn btn--danger" on:click=on_clear>
                        "Clear Draft"
                    </button>
                </div>
            </form>
        </section>
    }
}
