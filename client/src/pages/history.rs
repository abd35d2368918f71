//! Sent-email history with filters, paging, delete, and resend.
//!
//! Resend stashes the row for the job application form and navigates there;
//! the form picks it up after restoring its draft.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use std::collections::BTreeSet;

use drafts::{Clock, NoticeKind};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::confirm;
use crate::net::api::HistoryRecord;
use crate::state::toast::ToastState;
use crate::util::browser_clock::BrowserClock;
use crate::util::local_storage::BrowserStorage;
use crate::util::resend::{self, ResendData};
use crate::util::toast_notifier::ToastNotifier;

const PAGE_SIZE: usize = 10;
const LOAD_FAILED: &str = "Error loading history.";
const EMPTY: &str = "No sent emails found.";
const DELETE_FAILED: &str = "Could not delete the history item. Please try again.";
const RESEND_FAILED: &str = "Could not prepare the email for resending.";

/// Rows whose recruiter email and role contain the given terms, ignoring
/// case. A blank term matches everything.
pub fn filter_history(records: &[HistoryRecord], email_term: &str, role_term: &str) -> Vec<HistoryRecord> {
    let email_term = email_term.trim().to_lowercase();
    let role_term = role_term.trim().to_lowercase();
    records
        .iter()
        .filter(|r| email_term.is_empty() || r.recruiter_email.to_lowercase().contains(&email_term))
        .filter(|r| role_term.is_empty() || r.role.to_lowercase().contains(&role_term))
        .cloned()
        .collect()
}

/// Number of pages for `total` rows; an empty list still shows one page.
pub fn page_count(total: usize) -> usize {
    total.div_ceil(PAGE_SIZE).max(1)
}

/// Rows on 1-based `page`, clamped to the last page.
pub fn page_of(records: &[HistoryRecord], page: usize) -> &[HistoryRecord] {
    let page = page.clamp(1, page_count(records.len()));
    let start = (page - 1) * PAGE_SIZE;
    let end = (start + PAGE_SIZE).min(records.len());
    records.get(start..end).unwrap_or_default()
}

/// `YYYY-MM-DD` part of an ISO timestamp.
pub fn sent_date(sent_at: &str) -> &str {
    sent_at.get(..10).unwrap_or(sent_at)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HistoryStats {
    pub total: usize,
    pub sent_today: usize,
    pub unique_roles: usize,
}

/// Summary counts over every row. `today` is `YYYY-MM-DD`.
pub fn history_stats(records: &[HistoryRecord], today: &str) -> HistoryStats {
    HistoryStats {
        total: records.len(),
        sent_today: records.iter().filter(|r| sent_date(&r.sent_at) == today).count(),
        unique_roles: records.iter().map(|r| r.role.as_str()).collect::<BTreeSet<_>>().len(),
    }
}

fn delete_prompt(record: &HistoryRecord) -> String {
    format!("Are you sure you want to delete the email to {}?", record.recruiter_email)
}

fn today() -> String {
    let now = drafts::draft::iso_timestamp(BrowserClock.now_millis());
    sent_date(&now).to_owned()
}

#[component]
pub fn HistoryPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let status = ToastNotifier::new(toasts);
    let navigate = use_navigate();

    let history = LocalResource::new(|| crate::net::api::fetch_history());
    let email_term = RwSignal::new(String::new());
    let role_term = RwSignal::new(String::new());
    let page = RwSignal::new(1usize);
    let expanded = RwSignal::new(None::<i64>);

    let filtered = Memo::new(move |_| {
        history
            .get()
            .and_then(Result::ok)
            .map(|records| filter_history(&records, &email_term.get(), &role_term.get()))
    });
    let total = move || filtered.with(|f| f.as_ref().map_or(0, Vec::len));

    let on_resend = Callback::new(move |record: HistoryRecord| {
        match resend::stash(&BrowserStorage, &ResendData::from(&record)) {
            Ok(()) => navigate("/", NavigateOptions::default()),
            Err(e) => {
                leptos::logging::warn!("resend stash failed: {e}");
                status.status(RESEND_FAILED, NoticeKind::Error);
            }
        }
    });

    let on_delete = Callback::new(move |record: HistoryRecord| {
        if !confirm(&delete_prompt(&record)) {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_history(record.id).await {
                Ok(()) => history.refetch(),
                Err(e) => {
                    leptos::logging::warn!("history delete failed: {e}");
                    status.status(DELETE_FAILED, NoticeKind::Error);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (record, history);
        }
    });

    let on_filter = move |term: RwSignal<String>| {
        move |ev: leptos::ev::Event| {
            term.set(event_target_value(&ev));
            page.set(1);
        }
    };

    view! {
        <section class="history-page">
            <h1>"Sent Emails"</h1>
            {move || {
                history.get().and_then(Result::ok).map(|records| {
                    let stats = history_stats(&records, &today());
                    view! {
                        <div class="history-page__stats">
                            <span>"Total sent: " {stats.total}</span>
                            <span>"Sent today: " {stats.sent_today}</span>
                            <span>"Roles: " {stats.unique_roles}</span>
                        </div>
                    }
                })
            }}
            <div class="history-page__filters">
                <input
                    class="mail-form__input"
                    type="search"
                    placeholder="Search by email"
                    prop:value=move || email_term.get()
                    on:input=on_filter(email_term)
                />
                <input
                    class="mail-form__input"
                    type="search"
                    placeholder="Search by role"
                    prop:value=move || role_term.get()
                    on:input=on_filter(role_term)
                />
            </div>
            <Suspense fallback=move || view! { <p class="history-page__message">"Loading history..."</p> }>
                {move || {
                    match history.get() {
                        None => None,
                        Some(Err(e)) => {
                            leptos::logging::warn!("history load failed: {e}");
                            Some(view! { <p class="history-page__message">{LOAD_FAILED}</p> }.into_any())
                        }
                        Some(Ok(_)) => {
                            let rows = filtered.get().unwrap_or_default();
                            let visible = page_of(&rows, page.get()).to_vec();
                            if visible.is_empty() {
                                return Some(view! { <p class="history-page__message">{EMPTY}</p> }.into_any());
                            }
                            Some(
                                view! {
                                    <ul class="history-page__list">
                                        {visible
                                            .into_iter()
                                            .map(|record| {
                                                let id = record.id;
                                                let body = record.email_body.clone();
                                                let for_resend = record.clone();
                                                let for_delete = record.clone();
                                                view! {
                                                    <li class="history-row">
                                                        <span class="history-row__to">{record.recruiter_email}</span>
                                                        <span class="history-row__role">{record.role}</span>
                                                        <span class="history-row__date">
                                                            {sent_date(&record.sent_at).to_owned()}
                                                        </span>
                                                        <div class="history-row__actions">
                                                            <button
                                                                type="button"
                                                                class="btn"
                                                                on:click=move |_| {
                                                                    expanded.update(|open| {
                                                                        *open = if *open == Some(id) { None } else { Some(id) };
                                                                    });
                                                                }
                                                            >
                                                                "View"
                                                            </button>
                                                            <button
                                                                type="button"
                                                                class="btn btn--primary"
                                                                on:click=move |_| on_resend.run(for_resend.clone())
                                                            >
                                                                "Resend"
                                                            </button>
                                                            <button
                                                                type="button"
                                                                class="btn btn--danger"
                                                                on:click=move |_| on_delete.run(for_delete.clone())
                                                            >
                                                                "Delete"
                                                            </button>
                                                        </div>
                                                        <Show when=move || expanded.get() == Some(id)>
                                                            <pre class="history-row__body">{body.clone()}</pre>
                                                        </Show>
                                                    </li>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                }
                                    .into_any(),
                            )
                        }
                    }
                }}
            </Suspense>
            <div class="history-page__pager">
                <button
                    type="button"
                    class="btn"
                    disabled=move || page.get() <= 1
                    on:click=move |_| page.update(|p| *p = p.saturating_sub(1).max(1))
                >
                    "Previous"
                </button>
                <span>{move || {
                    let pages = page_count(total());
                    format!("Page {} of {pages}", page.get().min(pages))
                }}</span>
                <button
                    type="button"
                    class="btn"
                    disabled=move || page.get() >= page_count(total())
                    on:click=move |_| page.update(|p| *p = (*p + 1).min(page_count(total())))
                >
                    "Next"
                </button>
            </div>
        </section>
    }
}
