//! Job application page: recruiter email, role, AI-generated body, resume.
//!
//! The three text fields are auto-saved under the job-application draft
//! schema. The resume upload is never persisted; the browser cannot restore
//! a file input.
//!
//! An entry resent from the history page is applied after the draft is
//! restored, so it wins over the draft and is then saved as the new one.

#[cfg(test)]
#[path = "job_application_test.rs"]
mod job_application_test;

use drafts::{FieldBindings, FormSchema, NoticeKind};
use leptos::prelude::*;

use super::{confirm, draft_input, file_picked};
use crate::state::toast::ToastState;
use crate::util::draft_session::{DraftSession, signal_binding};
use crate::util::local_storage::BrowserStorage;
use crate::util::resend::{self, RESEND_LOADED};
use crate::util::toast_notifier::ToastNotifier;
use crate::util::validate::{is_valid_email, required};

const CONFIRM_CLEAR: &str = "Are you sure you want to clear the job application draft?";
const INVALID_EMAIL: &str = "Please enter a valid email address.";
const ROLE_REQUIRED: &str = "Please enter a job role.";
const BODY_REQUIRED: &str = "Email body cannot be empty.";
const RESUME_REQUIRED: &str = "Please upload your resume.";
const RESUME_REQUIRED_FOR_GENERATE: &str = "Please upload your resume before generating.";

/// A job application that passed validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Application {
    pub recruiter_email: String,
    pub role: String,
    pub email_body: String,
}

/// Check the send inputs in the order the user sees them.
///
/// # Errors
///
/// Returns the message for the first failing field.
pub fn validate_application(
    recruiter_email: &str,
    role: &str,
    email_body: &str,
    has_resume: bool,
) -> Result<Application, &'static str> {
    if !is_valid_email(recruiter_email) {
        return Err(INVALID_EMAIL);
    }
    let role = required(role, ROLE_REQUIRED)?;
    required(email_body, BODY_REQUIRED)?;
    if !has_resume {
        return Err(RESUME_REQUIRED);
    }
    Ok(Application {
        recruiter_email: recruiter_email.trim().to_owned(),
        role,
        email_body: email_body.to_owned(),
    })
}

/// Check the generate inputs; returns the trimmed role.
///
/// # Errors
///
/// Returns the message for the first missing input.
pub fn validate_generate(role: &str, has_resume: bool) -> Result<String, &'static str> {
    let role = required(role, ROLE_REQUIRED)?;
    if !has_resume {
        return Err(RESUME_REQUIRED_FOR_GENERATE);
    }
    Ok(role)
}

#[component]
pub fn JobApplicationPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let status = ToastNotifier::new(toasts);

    let recruiter_email = RwSignal::new(String::new());
    let role = RwSignal::new(String::new());
    let email_body = RwSignal::new(String::new());
    let resume_name = RwSignal::new(None::<String>);
    let resume_ref = NodeRef::<leptos::html::Input>::new();
    let generating = RwSignal::new(false);
    let sending = RwSignal::new(false);

    let drafts = DraftSession::start_with_prefill(
        FormSchema::job_application(),
        FieldBindings::new()
            .with("recruiterEmail", signal_binding(recruiter_email))
            .with("role", signal_binding(role))
            .with("emailBody", signal_binding(email_body)),
        toasts,
        move || {
            let data = resend::take(&BrowserStorage)?;
            status.status(RESEND_LOADED, NoticeKind::Success);
            Some(data.field_values())
        },
    );

    let on_generate = move |_| {
        if generating.get_untracked() {
            return;
        }
        let role_value = match validate_generate(&role.get_untracked(), resume_name.get_untracked().is_some()) {
            Ok(v) => v,
            Err(msg) => {
                status.status(msg, NoticeKind::Error);
                return;
            }
        };
        generating.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = match super::selected_file(resume_ref) {
                Some(file) => crate::net::api::generate_email(&role_value, &file).await,
                None => Err(RESUME_REQUIRED_FOR_GENERATE.to_owned()),
            };
            match result {
                Ok(body) => {
                    email_body.set(body);
                    status.status("Email body generated successfully!", NoticeKind::Success);
                    drafts.schedule_save();
                }
                Err(e) => status.status(&e, NoticeKind::Error),
            }
            generating.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = role_value;
            generating.set(false);
        }
    };

    let on_send = move |_| {
        if sending.get_untracked() {
            return;
        }
        let application = match validate_application(
            &recruiter_email.get_untracked(),
            &role.get_untracked(),
            &email_body.get_untracked(),
            resume_name.get_untracked().is_some(),
        ) {
            Ok(a) => a,
            Err(msg) => {
                status.status(msg, NoticeKind::Error);
                return;
            }
        };
        sending.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let Some(resume) = super::selected_file(resume_ref) else {
                status.status(RESUME_REQUIRED, NoticeKind::Error);
                sending.set(false);
                return;
            };
            let sent = crate::net::api::send_application(
                &application.recruiter_email,
                &application.role,
                &application.email_body,
                &resume,
            )
            .await;
            match sent {
                Ok(()) => {
                    crate::net::api::record_history(&crate::net::api::HistoryEntry {
                        recruiter_email: application.recruiter_email,
                        role: application.role,
                        email_body: application.email_body,
                        resume_file: Some(resume.name()),
                    })
                    .await;
                    status.status("Email sent successfully!", NoticeKind::Success);
                    drafts.complete_send();
                    super::reset_file_input(resume_ref, resume_name);
                }
                Err(e) => status.status(&e, NoticeKind::Error),
            }
            sending.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = application;
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
            <h1>"Job Application"</h1>
            <form class="mail-form" on:submit=|ev| ev.prevent_default()>
                <label class="mail-form__label">
                    "Recruiter email"
                    <input
                        class="mail-form__input"
                        type="email"
                        placeholder="recruiter@company.com"
                        prop:value=move || recruiter_email.get()
                        on:input=draft_input(recruiter_email, drafts, "recruiterEmail")
                    />
                </label>
                <label class="mail-form__label">
                    "Role"
                    <input
                        class="mail-form__input"
                        type="text"
                        placeholder="Backend Engineer"
                        prop:value=move || role.get()
                        on:input=draft_input(role, drafts, "role")
                    />
                </label>
                <label class="mail-form__label">
                    "Resume"
                    <input
                        class="mail-form__input"
                        type="file"
                        accept=".pdf,.doc,.docx"
                        node_ref=resume_ref
                        on:change=file_picked(resume_ref, resume_name)
                    />
                    <span class="mail-form__file-name">
                        {move || resume_name.get().unwrap_or_else(|| "No file chosen".to_owned())}
                    </span>
                </label>
                <label class="mail-form__label">
                    "Email body"
                    <textarea
                        class="mail-form__textarea"
                        rows="12"
                        prop:value=move || email_body.get()
                        on:input=draft_input(email_body, drafts, "emailBody")
                    ></textarea>
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
