use super::*;

const WEEK_MS: i64 = 7 * 24 * 60 * 60 * 1000;

fn fields(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect()
}

fn quick(pairs: &[(&str, &str)], saved: i64) -> Draft {
    Draft::snapshot(&FormSchema::quick_email(), fields(pairs), saved)
}

// =============================================================
// has_content
// =============================================================

#[test]
fn has_content_false_when_all_blank_after_trim() {
    let draft = quick(&[("to", ""), ("subject", ""), ("body", "  ")], 1);
    assert!(!draft.has_content());
}

#[test]
fn has_content_true_with_one_nonblank_field() {
    let draft = quick(&[("to", ""), ("subject", " Hi "), ("body", "")], 1);
    assert!(draft.has_content());
}

// =============================================================
// Record codec
// =============================================================

#[test]
fn to_record_writes_fields_timestamp_and_last_modified() {
    let draft = quick(&[("to", "a@b.com"), ("subject", "Hi"), ("body", "X")], 1500);
    let value: Value = serde_json::from_str(&draft.to_record()).unwrap();
    assert_eq!(value["to"], "a@b.com");
    assert_eq!(value["subject"], "Hi");
    assert_eq!(value["body"], "X");
    assert_eq!(value["lastModified"], 1500);
    assert_eq!(value["timestamp"], "1970-01-01T00:00:01.500Z");
}

#[test]
fn from_record_preserves_untrimmed_values() {
    let schema = FormSchema::quick_email();
    let raw = quick(&[("to", " a@b.com "), ("subject", ""), ("body", "line\n")], 42).to_record();
    let draft = Draft::from_record(&schema, &raw).unwrap();
    assert_eq!(draft.field("to"), " a@b.com ");
    assert_eq!(draft.field("body"), "line\n");
    assert_eq!(draft.saved_at_epoch_millis, Some(42));
    assert_eq!(draft.source_form_id, "quick_email");
}

#[test]
fn from_record_missing_fields_decode_empty() {
    let schema = FormSchema::quick_email();
    let draft = Draft::from_record(&schema, r#"{"to":"x@y.z","subject":null,"lastModified":5}"#).unwrap();
    assert_eq!(draft.field("to"), "x@y.z");
    assert_eq!(draft.field("subject"), "");
    assert_eq!(draft.field("body"), "");
}

#[test]
fn from_record_ignores_unknown_keys() {
    let schema = FormSchema::quick_email();
    let draft = Draft::from_record(&schema, r#"{"to":"a","extra":[1,2],"lastModified":5}"#).unwrap();
    assert!(!draft.fields.contains_key("extra"));
}

#[test]
fn from_record_rejects_non_json() {
    let err = Draft::from_record(&FormSchema::quick_email(), "not json at all").unwrap_err();
    assert!(matches!(err, DraftError::Corrupt(_)));
}

#[test]
fn from_record_rejects_non_object() {
    let err = Draft::from_record(&FormSchema::quick_email(), "[1,2,3]").unwrap_err();
    assert!(matches!(err, DraftError::CorruptShape(_)));
    assert!(err.to_string().contains("an array"));
}

#[test]
fn from_record_rejects_non_string_field() {
    let err = Draft::from_record(&FormSchema::quick_email(), r#"{"to":7,"lastModified":5}"#).unwrap_err();
    assert!(err.to_string().contains("field `to` is a number"));
}

#[test]
fn from_record_non_integer_last_modified_is_missing() {
    let draft = Draft::from_record(&FormSchema::quick_email(), r#"{"to":"a","lastModified":"yesterday"}"#).unwrap();
    assert_eq!(draft.saved_at_epoch_millis, None);
}

#[test]
fn from_record_whole_float_last_modified_is_accepted() {
    let draft = Draft::from_record(&FormSchema::quick_email(), r#"{"to":"a","lastModified":1.7e12}"#).unwrap();
    assert_eq!(draft.saved_at_epoch_millis, Some(1_700_000_000_000));
    assert!(is_valid(&draft, 1_700_000_000_500, 1000));
}

#[test]
fn from_record_fractional_last_modified_is_missing() {
    let draft = Draft::from_record(&FormSchema::quick_email(), r#"{"to":"a","lastModified":1500.5}"#).unwrap();
    assert_eq!(draft.saved_at_epoch_millis, None);
}

// =============================================================
// Expiry
// =============================================================

#[test]
fn is_valid_just_inside_expiry() {
    let now = 10 * WEEK_MS;
    let draft = quick(&[("to", "a")], now - WEEK_MS + 1);
    assert!(is_valid(&draft, now, WEEK_MS));
}

#[test]
fn is_valid_just_outside_expiry() {
    let now = 10 * WEEK_MS;
    let draft = quick(&[("to", "a")], now - WEEK_MS - 1);
    assert!(!is_valid(&draft, now, WEEK_MS));
    assert!(matches!(check_fresh(&draft, now, WEEK_MS), Err(DraftError::Expired { age_ms }) if age_ms == WEEK_MS + 1));
}

#[test]
fn is_valid_exactly_at_expiry_is_stale() {
    let now = 10 * WEEK_MS;
    let draft = quick(&[("to", "a")], now - WEEK_MS);
    assert!(!is_valid(&draft, now, WEEK_MS));
}

#[test]
fn is_valid_requires_timestamp() {
    let mut draft = quick(&[("to", "a")], 1);
    draft.saved_at_epoch_millis = None;
    assert!(matches!(check_fresh(&draft, 2, WEEK_MS), Err(DraftError::MissingTimestamp)));
    draft.saved_at_epoch_millis = Some(0);
    assert!(!is_valid(&draft, 2, WEEK_MS));
}

// =============================================================
// iso_timestamp
// =============================================================

#[test]
fn iso_timestamp_epoch() {
    assert_eq!(iso_timestamp(0), "1970-01-01T00:00:00.000Z");
}

#[test]
fn iso_timestamp_known_instant() {
    // 2024-01-02T03:04:05.678Z
    assert_eq!(iso_timestamp(1_704_164_645_678), "2024-01-02T03:04:05.678Z");
}
