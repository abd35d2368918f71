//! Hand-off of a sent email from the history page back to the job
//! application form.
//!
//! The history page stashes the chosen row under `resendData` and navigates
//! to the form. The form takes the entry exactly once, after its draft has
//! been restored, so a resend always replaces a recovered draft.

#[cfg(test)]
#[path = "resend_test.rs"]
mod resend_test;

use drafts::{DraftStorage, StorageError};
use serde::{Deserialize, Serialize};

use crate::net::api::HistoryRecord;

pub const RESEND_KEY: &str = "resendData";
pub const RESEND_LOADED: &str = "Email data loaded for resending.";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResendData {
    pub recruiter_email: String,
    pub role: String,
    pub email_body: String,
}

impl From<&HistoryRecord> for ResendData {
    fn from(record: &HistoryRecord) -> Self {
        Self {
            recruiter_email: record.recruiter_email.clone(),
            role: record.role.clone(),
            email_body: record.email_body.clone(),
        }
    }
}

impl ResendData {
    /// Values keyed by the job-application draft field names.
    pub fn field_values(self) -> Vec<(&'static str, String)> {
        vec![
            ("recruiterEmail", self.recruiter_email),
            ("role", self.role),
            ("emailBody", self.email_body),
        ]
    }
}

/// Store `data` for the next form load.
///
/// # Errors
///
/// Returns the storage failure; the caller reports it and stays on the page.
pub fn stash(storage: &impl DraftStorage, data: &ResendData) -> Result<(), StorageError> {
    let raw = serde_json::to_string(data).map_err(|e| StorageError::Backend(e.to_string()))?;
    storage.set(RESEND_KEY, &raw)
}

/// Read and remove the stashed entry. Missing, unreadable, or malformed
/// entries yield `None`; a malformed one is still removed.
pub fn take(storage: &impl DraftStorage) -> Option<ResendData> {
    let raw = match storage.get(RESEND_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            leptos::logging::warn!("resend entry unreadable: {e}");
            return None;
        }
    };
    if let Err(e) = storage.remove(RESEND_KEY) {
        leptos::logging::warn!("resend entry not removed: {e}");
    }
    match serde_json::from_str::<ResendData>(&raw) {
        Ok(data) => Some(data),
        Err(e) => {
            leptos::logging::warn!("ignoring malformed resend entry: {e}");
            None
        }
    }
}
