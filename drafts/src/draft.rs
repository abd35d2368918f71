//! Draft snapshots and their on-disk record.
//!
//! RECORD LAYOUT
//! =============
//! One JSON object per form schema:
//!
//! ```text
//! { <field>: string, ..., "timestamp": ISO-8601 string, "lastModified": epoch-millis }
//! ```
//!
//! Fields the schema names but the record lacks decode as empty strings.
//! Unknown keys are ignored. `lastModified` may be an integer or a float with
//! no fractional part (`1.7e12`). Anything else decodes as "no timestamp",
//! which [`is_valid`] rejects.

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

use std::collections::BTreeMap;

use serde_json::{Map, Value};
use time::OffsetDateTime;
use time::macros::format_description;

use crate::error::DraftError;
use crate::schema::FormSchema;

const TIMESTAMP_KEY: &str = "timestamp";
const LAST_MODIFIED_KEY: &str = "lastModified";

/// A persisted snapshot of in-progress form values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    /// Schema id of the form that produced this draft.
    pub source_form_id: String,
    /// Field name to raw (untrimmed) value.
    pub fields: BTreeMap<String, String>,
    /// `lastModified` on disk. `None` when the record carried no usable value.
    pub saved_at_epoch_millis: Option<i64>,
    /// Human-readable save time, informational only.
    pub timestamp: Option<String>,
}

impl Draft {
    /// Snapshot `fields` as saved at `now_millis`.
    #[must_use]
    pub fn snapshot(schema: &FormSchema, fields: BTreeMap<String, String>, now_millis: i64) -> Self {
        Self {
            source_form_id: schema.id().to_owned(),
            fields,
            saved_at_epoch_millis: Some(now_millis),
            timestamp: Some(iso_timestamp(now_millis)),
        }
    }

    /// True when at least one field is non-empty after trimming.
    #[must_use]
    pub fn has_content(&self) -> bool {
        self.fields.values().any(|v| !v.trim().is_empty())
    }

    /// Value for `name`, or `""` when absent.
    #[must_use]
    pub fn field(&self, name: &str) -> &str {
        self.fields.get(name).map_or("", String::as_str)
    }

    /// Serialize into the on-disk JSON record.
    #[must_use]
    pub fn to_record(&self) -> String {
        let mut map = Map::new();
        for (name, value) in &self.fields {
            map.insert(name.clone(), Value::String(value.clone()));
        }
        if let Some(ts) = &self.timestamp {
            map.insert(TIMESTAMP_KEY.into(), Value::String(ts.clone()));
        }
        if let Some(ms) = self.saved_at_epoch_millis {
            map.insert(LAST_MODIFIED_KEY.into(), Value::from(ms));
        }
        Value::Object(map).to_string()
    }

    /// Decode an on-disk record for `schema`.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::Corrupt`] for non-JSON input and
    /// [`DraftError::CorruptShape`] when the JSON is not an object or a schema
    /// field holds a non-string value.
    pub fn from_record(schema: &FormSchema, raw: &str) -> Result<Self, DraftError> {
        let value: Value = serde_json::from_str(raw)?;
        let Value::Object(map) = value else {
            return Err(DraftError::CorruptShape(format!("expected object, found {}", json_kind(&value))));
        };

        let mut fields = BTreeMap::new();
        for name in schema.fields() {
            let text = match map.get(name) {
                None | Some(Value::Null) => String::new(),
                Some(Value::String(s)) => s.clone(),
                Some(other) => {
                    return Err(DraftError::CorruptShape(format!(
                        "field `{name}` is {}, expected string",
                        json_kind(other)
                    )));
                }
            };
            fields.insert(name.clone(), text);
        }

        let saved_at_epoch_millis = map.get(LAST_MODIFIED_KEY).and_then(epoch_millis);
        let timestamp = map
            .get(TIMESTAMP_KEY)
            .and_then(Value::as_str)
            .map(str::to_owned);

        Ok(Self { source_form_id: schema.id().to_owned(), fields, saved_at_epoch_millis, timestamp })
    }
}

/// Check that `draft` is usable at `now_millis` under `expiry_millis`.
///
/// # Errors
///
/// [`DraftError::MissingTimestamp`] when no positive save time is recorded,
/// [`DraftError::Expired`] when the age reaches the threshold.
pub fn check_fresh(draft: &Draft, now_millis: i64, expiry_millis: i64) -> Result<(), DraftError> {
    let saved = match draft.saved_at_epoch_millis {
        Some(ms) if ms > 0 => ms,
        _ => return Err(DraftError::MissingTimestamp),
    };
    let age_ms = now_millis.saturating_sub(saved);
    if age_ms < expiry_millis {
        Ok(())
    } else {
        Err(DraftError::Expired { age_ms })
    }
}

/// Pure usability predicate: has a save time and is younger than the expiry.
#[must_use]
pub fn is_valid(draft: &Draft, now_millis: i64, expiry_millis: i64) -> bool {
    check_fresh(draft, now_millis, expiry_millis).is_ok()
}

/// Format epoch millis as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
#[must_use]
pub fn iso_timestamp(millis: i64) -> String {
    let format = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z");
    OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * 1_000_000)
        .ok()
        .and_then(|t| t.format(&format).ok())
        .unwrap_or_default()
}

/// Read `lastModified` as whole epoch millis.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn epoch_millis(value: &Value) -> Option<i64> {
    if let Some(ms) = value.as_i64() {
        return Some(ms);
    }
    let ms = value.as_f64()?;
    let whole = ms.is_finite() && ms.fract() == 0.0 && ms >= i64::MIN as f64 && ms < i64::MAX as f64;
    whole.then_some(ms as i64)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
