//! Page-scoped draft store wiring.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each form page owns one `DraftSession`. It binds the page's field signals
//! to a `DraftStore` running on browser storage, the gloo timer, `Date.now()`,
//! and the toast list, then restores any saved draft once the page is live.
//! The store itself is `!Send`, so it lives in a local `StoredValue` and is
//! dropped with the page; a debounce still pending at that point is lost.
//!
//! After a clear or a successful send the form is reused for a new message,
//! so the session is reset immediately instead of staying `Cleared`.

use drafts::{DraftConfig, DraftStore, FieldAccess, FieldBinding, FieldBindings, FormSchema, Ticket};
use leptos::prelude::*;

use super::browser_clock::BrowserClock;
use super::browser_timer::BrowserTimer;
use super::local_storage::BrowserStorage;
use super::toast_notifier::ToastNotifier;
use crate::state::toast::ToastState;

pub type PageDraftStore = DraftStore<BrowserStorage, BrowserTimer, BrowserClock, ToastNotifier>;

/// Bind a string signal as a draft field.
pub fn signal_binding(signal: RwSignal<String>) -> impl FieldAccess + 'static {
    FieldBinding::new(move || signal.get_untracked(), move |value: &str| signal.set(value.to_owned()))
}

#[derive(Clone, Copy)]
pub struct DraftSession {
    store: StoredValue<Option<PageDraftStore>, LocalStorage>,
}

impl DraftSession {
    /// Build the store for `schema` and schedule restoration.
    ///
    /// A binding outside the schema is a page bug; the session then runs
    /// without persistence rather than breaking the page.
    pub fn start(schema: FormSchema, bindings: FieldBindings, toasts: RwSignal<ToastState>) -> Self {
        Self::start_with_prefill(schema, bindings, toasts, || None)
    }

    /// Like [`DraftSession::start`], then overwrite the form with whatever
    /// `prefill` yields once the draft has been restored, and schedule a
    /// save of the result.
    pub fn start_with_prefill(
        schema: FormSchema,
        bindings: FieldBindings,
        toasts: RwSignal<ToastState>,
        prefill: impl Fn() -> Option<Vec<(&'static str, String)>> + 'static,
    ) -> Self {
        let fired = RwSignal::new(None::<Ticket>);
        let store = match DraftStore::new(
            schema,
            bindings,
            BrowserStorage,
            BrowserTimer::new(fired),
            BrowserClock,
            ToastNotifier::new(toasts),
            DraftConfig::from_env(),
        ) {
            Ok(store) => Some(store),
            Err(e) => {
                leptos::logging::warn!("draft persistence disabled: {e}");
                None
            }
        };
        let session = Self { store: StoredValue::new_local(store) };

        // Effects only run in the browser, after hydration.
        Effect::new(move || {
            session.with_store(|s| {
                s.initialize();
                if let Some(values) = prefill() {
                    let values: Vec<(&str, &str)> = values.iter().map(|(name, v)| (*name, v.as_str())).collect();
                    s.prefill(&values);
                }
            });
        });
        Effect::new(move || {
            if let Some(ticket) = fired.get() {
                session.with_store(|s| s.fire(ticket));
            }
        });

        session
    }

    fn with_store<R>(&self, f: impl FnOnce(&mut PageDraftStore) -> R) -> Option<R> {
        self.store.try_update_value(|slot| slot.as_mut().map(f)).flatten()
    }

    /// Input-event hook for a bound field.
    pub fn field_changed(&self, field: &str, value: &str) {
        self.with_store(|s| s.on_field_changed(field, value));
    }

    /// Rearm the debounce after the page filled fields programmatically.
    pub fn schedule_save(&self) {
        self.with_store(PageDraftStore::schedule_save);
    }

    /// "Clear Draft" after the user confirmed.
    pub fn clear_by_user(&self) {
        self.with_store(|s| {
            s.clear_by_user();
            s.reset_session();
        });
    }

    /// Successful send confirmed by the API.
    pub fn complete_send(&self) {
        self.with_store(|s| {
            s.complete_send();
            s.reset_session();
        });
    }
}
