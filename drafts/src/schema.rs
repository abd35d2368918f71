//! Form identities.
//!
//! A schema pins down which fields a form persists and under which storage
//! key. Each schema owns exactly one key, so two forms whose field names
//! collide still never read or overwrite each other's drafts.

#[cfg(test)]
#[path = "schema_test.rs"]
mod schema_test;

use serde::Serialize;

use crate::error::DraftError;

/// Record keys written alongside the field values.
pub const RESERVED_KEYS: [&str; 2] = ["timestamp", "lastModified"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormSchema {
    id: String,
    storage_key: String,
    fields: Vec<String>,
    recovered_notice: String,
}

impl FormSchema {
    /// Declare a form schema.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::InvalidSchema`] when the id or key is blank, the
    /// field list is empty, a field repeats, or a field uses a reserved record key.
    pub fn new(
        id: impl Into<String>,
        storage_key: impl Into<String>,
        fields: &[&str],
        recovered_notice: impl Into<String>,
    ) -> Result<Self, DraftError> {
        let id = id.into();
        let storage_key = storage_key.into();
        if id.trim().is_empty() {
            return Err(DraftError::InvalidSchema("form id is blank".into()));
        }
        if storage_key.trim().is_empty() {
            return Err(DraftError::InvalidSchema(format!("form `{id}` has a blank storage key")));
        }
        if fields.is_empty() {
            return Err(DraftError::InvalidSchema(format!("form `{id}` declares no fields")));
        }
        let mut seen: Vec<String> = Vec::with_capacity(fields.len());
        for field in fields {
            if field.trim().is_empty() {
                return Err(DraftError::InvalidSchema(format!("form `{id}` has a blank field name")));
            }
            if RESERVED_KEYS.contains(field) {
                return Err(DraftError::InvalidSchema(format!("form `{id}` uses reserved field `{field}`")));
            }
            if seen.iter().any(|s| s == field) {
                return Err(DraftError::InvalidSchema(format!("form `{id}` repeats field `{field}`")));
            }
            seen.push((*field).to_owned());
        }
        Ok(Self { id, storage_key, fields: seen, recovered_notice: recovered_notice.into() })
    }

    /// General compose form: recipient, subject, and the key points or body.
    #[must_use]
    pub fn compose() -> Self {
        Self::builtin(
            "compose",
            "mailmage_draft",
            &["recipientEmail", "subject", "emailBody"],
            "Draft recovered from last session",
        )
    }

    /// Job application form: recruiter address, target role, and body.
    #[must_use]
    pub fn job_application() -> Self {
        Self::builtin(
            "job_application",
            "mailmage_professional_draft",
            &["recruiterEmail", "role", "emailBody"],
            "Job application draft recovered! We found your unsent application from the last session.",
        )
    }

    /// Plain to/subject/body form.
    #[must_use]
    pub fn quick_email() -> Self {
        Self::builtin(
            "quick_email",
            "mailmage_quick_draft",
            &["to", "subject", "body"],
            "Draft recovered from last session",
        )
    }

    fn builtin(id: &str, storage_key: &str, fields: &[&str], recovered_notice: &str) -> Self {
        Self {
            id: id.to_owned(),
            storage_key: storage_key.to_owned(),
            fields: fields.iter().map(|f| (*f).to_owned()).collect(),
            recovered_notice: recovered_notice.to_owned(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Persisted field names in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    #[must_use]
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f == name)
    }

    #[must_use]
    pub fn recovered_notice(&self) -> &str {
        &self.recovered_notice
    }
}
