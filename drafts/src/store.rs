//! Per-session draft store.
//!
//! STATE MACHINE
//! =============
//! ```text
//! Empty --edit--> Editing --timer--> Saved --edit--> Editing
//!   \                \                  \
//!    +-------------- clear / send -------+--> Cleared
//! ```
//!
//! `Cleared` is terminal for the session: edits, timer expiry, and explicit
//! saves are ignored until the host calls [`DraftStore::reset_session`].
//! Restoring a draft in [`DraftStore::initialize`] leaves the state `Empty`
//! because the restored values are already persisted.
//!
//! ERROR HANDLING
//! ==============
//! Storage failures, corrupt records, and expired records are logged and
//! folded into [`LoadOutcome`] / [`SaveOutcome`]. Nothing here panics or
//! surfaces an error to the page, and nothing retries: the next debounced
//! save supersedes a failed one.
//!
//! A pending delay that has not fired when the page unloads is dropped.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use serde::Serialize;

use crate::clock::Clock;
use crate::config::DraftConfig;
use crate::draft::{self, Draft};
use crate::error::DraftError;
use crate::fields::FieldBindings;
use crate::notify::{NoticeKind, Notifier};
use crate::schema::FormSchema;
use crate::storage::DraftStorage;
use crate::timer::{Ticket, Timer};

pub const SAVED_NOTICE: &str = "\u{2713} Draft saved";
pub const CLEARED_NOTICE: &str = "Draft cleared successfully";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    /// No unsaved edits and no pending delay.
    #[default]
    Empty,
    /// Edited since load or last save; a delay is pending.
    Editing,
    /// Last delay fired and the snapshot was persisted.
    Saved,
    /// Draft removed by the user or after a successful send.
    Cleared,
}

/// Result of [`DraftStore::initialize`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A valid draft was written into the form.
    Restored,
    /// No record under the schema key.
    Missing,
    /// Record present but past the expiry threshold or lacking a timestamp.
    Expired,
    /// Record present but unreadable.
    Corrupt,
    /// Backend could not be read.
    Unavailable,
}

/// Result of [`DraftStore::save_now`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    /// Every field was blank after trimming; storage untouched.
    SkippedEmpty,
    /// Backend rejected the write.
    Failed,
    /// Session is `Cleared`.
    Ignored,
}

pub struct DraftStore<S, T, C, N> {
    schema: FormSchema,
    bindings: FieldBindings,
    storage: S,
    timer: T,
    clock: C,
    notifier: N,
    config: DraftConfig,
    state: SessionState,
    pending: Option<Ticket>,
    next_ticket: u64,
}

impl<S, T, C, N> DraftStore<S, T, C, N>
where
    S: DraftStorage,
    T: Timer,
    C: Clock,
    N: Notifier,
{
    /// Build a store for one form session.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::UnknownField`] when a binding names a field the
    /// schema does not persist.
    pub fn new(
        schema: FormSchema,
        bindings: FieldBindings,
        storage: S,
        timer: T,
        clock: C,
        notifier: N,
        config: DraftConfig,
    ) -> Result<Self, DraftError> {
        if let Some(field) = bindings.names().find(|name| !schema.has_field(name)) {
            return Err(DraftError::UnknownField { form: schema.id().to_owned(), field: field.to_owned() });
        }
        Ok(Self {
            schema,
            bindings,
            storage,
            timer,
            clock,
            notifier,
            config,
            state: SessionState::Empty,
            pending: None,
            next_ticket: 0,
        })
    }

    #[must_use]
    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn config(&self) -> &DraftConfig {
        &self.config
    }

    /// Ticket of the pending delay, if one is armed.
    #[must_use]
    pub fn pending_ticket(&self) -> Option<Ticket> {
        self.pending
    }

    /// Restore a stored draft into the bound fields.
    ///
    /// Absent, expired, corrupt, or unreadable records leave the form at its
    /// defaults. Expired and corrupt records stay in storage.
    pub fn initialize(&mut self) -> LoadOutcome {
        let form = self.schema.id();
        let draft = match self.load() {
            Ok(Some(draft)) => draft,
            Ok(None) => return LoadOutcome::Missing,
            Err(e) => {
                let outcome = load_outcome_for(&e);
                match outcome {
                    LoadOutcome::Expired => tracing::debug!(form, error = %e, "ignoring stale draft"),
                    _ => tracing::warn!(form, error = %e, "draft unavailable, starting blank"),
                }
                return outcome;
            }
        };

        for name in self.schema.fields() {
            self.bindings.write(name, draft.field(name));
        }
        tracing::debug!(form, saved_at = ?draft.saved_at_epoch_millis, "draft restored");
        self.notifier.show(
            self.schema.recovered_notice(),
            NoticeKind::Info,
            self.config.recovered_notice,
        );
        LoadOutcome::Restored
    }

    /// Read and validate the stored draft without touching the form.
    ///
    /// # Errors
    ///
    /// Storage, corrupt-record, and expiry failures as [`DraftError`].
    pub fn load(&self) -> Result<Option<Draft>, DraftError> {
        let Some(raw) = self.storage.get(self.schema.storage_key())? else {
            return Ok(None);
        };
        let draft = Draft::from_record(&self.schema, &raw)?;
        draft::check_fresh(&draft, self.clock.now_millis(), self.config.expiry_millis())?;
        Ok(Some(draft))
    }

    /// Record an edit to `field` and rearm the debounce.
    ///
    /// Returns the armed ticket, or `None` when the field is unbound or the
    /// session is `Cleared`.
    pub fn on_field_changed(&mut self, field: &str, value: &str) -> Option<Ticket> {
        if !self.bindings.contains(field) {
            tracing::trace!(form = self.schema.id(), field, "edit to unbound field ignored");
            return None;
        }
        tracing::trace!(form = self.schema.id(), field, len = value.len(), "field edited");
        self.schedule_save()
    }

    /// Rearm the debounce without a field event, e.g. after generated text
    /// has been written into the form.
    pub fn schedule_save(&mut self) -> Option<Ticket> {
        if self.state == SessionState::Cleared {
            return None;
        }
        self.cancel_pending();
        self.next_ticket += 1;
        let ticket = Ticket(self.next_ticket);
        self.pending = Some(ticket);
        self.timer.arm(ticket, self.config.debounce);
        self.state = SessionState::Editing;
        Some(ticket)
    }

    /// Write externally supplied values over the form, then rearm the
    /// debounce so they are persisted as the new draft.
    ///
    /// Run after [`DraftStore::initialize`]: prefilled values replace a
    /// restored draft. Names without a binding are skipped.
    pub fn prefill(&mut self, values: &[(&str, &str)]) -> Option<Ticket> {
        if self.state == SessionState::Cleared {
            return None;
        }
        let written = values
            .iter()
            .filter(|&&(name, value)| self.bindings.write(name, value))
            .count();
        tracing::debug!(form = self.schema.id(), written, "form prefilled");
        if written == 0 {
            return None;
        }
        self.schedule_save()
    }

    /// Timer-expiry entry point. Stale tickets are ignored.
    pub fn fire(&mut self, ticket: Ticket) -> Option<SaveOutcome> {
        if self.pending != Some(ticket) {
            tracing::trace!(form = self.schema.id(), ?ticket, "stale draft timer ignored");
            return None;
        }
        self.pending = None;
        Some(self.save_now())
    }

    /// Snapshot every bound field and persist it if any is non-blank.
    pub fn save_now(&mut self) -> SaveOutcome {
        if self.state == SessionState::Cleared {
            return SaveOutcome::Ignored;
        }
        let form = self.schema.id();
        let now = self.clock.now_millis();
        let draft = Draft::snapshot(&self.schema, self.bindings.read_all(), now);
        if !draft.has_content() {
            tracing::trace!(form, "all fields blank, draft save skipped");
            return SaveOutcome::SkippedEmpty;
        }

        match self.storage.set(self.schema.storage_key(), &draft.to_record()) {
            Ok(()) => {
                tracing::debug!(form, saved_at = now, "draft saved");
                self.state = SessionState::Saved;
                self.notifier.show(SAVED_NOTICE, NoticeKind::Success, self.config.saved_notice);
                SaveOutcome::Saved
            }
            Err(e) => {
                tracing::warn!(form, error = %e, "draft save skipped");
                SaveOutcome::Failed
            }
        }
    }

    /// Remove the stored draft and cancel any pending save. Idempotent.
    pub fn clear(&mut self) {
        self.cancel_pending();
        let form = self.schema.id();
        match self.storage.remove(self.schema.storage_key()) {
            Ok(()) => tracing::debug!(form, "draft cleared"),
            Err(e) => tracing::warn!(form, error = %e, "draft clear failed"),
        }
        self.state = SessionState::Cleared;
    }

    /// "Clear Draft" button path. The caller has already confirmed with the
    /// user.
    pub fn clear_by_user(&mut self) {
        self.clear();
        self.bindings.reset();
        self.notifier.show(CLEARED_NOTICE, NoticeKind::Success, self.config.cleared_notice);
    }

    /// Successful-send path. Call only after dispatch is confirmed.
    pub fn complete_send(&mut self) {
        self.clear();
        self.bindings.reset();
    }

    /// Leave `Cleared` so a fresh message on the same page is saved again.
    pub fn reset_session(&mut self) {
        self.cancel_pending();
        self.state = SessionState::Empty;
    }

    /// Usability of `draft` against this store's clock and expiry.
    #[must_use]
    pub fn is_valid(&self, draft: &Draft) -> bool {
        draft::is_valid(draft, self.clock.now_millis(), self.config.expiry_millis())
    }

    fn cancel_pending(&mut self) {
        if self.pending.take().is_some() {
            self.timer.cancel();
        }
    }
}

fn load_outcome_for(err: &DraftError) -> LoadOutcome {
    match err {
        DraftError::Storage(_) => LoadOutcome::Unavailable,
        DraftError::Expired { .. } | DraftError::MissingTimestamp => LoadOutcome::Expired,
        DraftError::Corrupt(_)
        | DraftError::CorruptShape(_)
        | DraftError::InvalidSchema(_)
        | DraftError::UnknownField { .. } => LoadOutcome::Corrupt,
    }
}
