use drafts::MemoryStorage;

use super::*;

fn record() -> HistoryRecord {
    HistoryRecord {
        id: 3,
        recruiter_email: "hr@acme.io".to_owned(),
        role: "Backend Engineer".to_owned(),
        email_body: "Dear team,".to_owned(),
        sent_at: "2025-03-01T10:00:00.000Z".to_owned(),
    }
}

#[test]
fn stash_writes_camel_case_entry() {
    let storage = MemoryStorage::new();
    stash(&storage, &ResendData::from(&record())).unwrap();
    let raw: serde_json::Value = serde_json::from_str(&storage.raw(RESEND_KEY).unwrap()).unwrap();
    assert_eq!(
        raw,
        serde_json::json!({
            "recruiterEmail": "hr@acme.io",
            "role": "Backend Engineer",
            "emailBody": "Dear team,",
        })
    );
}

#[test]
fn take_returns_entry_once() {
    let storage = MemoryStorage::new();
    stash(&storage, &ResendData::from(&record())).unwrap();

    let data = take(&storage).unwrap();
    assert_eq!(data.recruiter_email, "hr@acme.io");
    assert!(storage.raw(RESEND_KEY).is_none());
    assert_eq!(take(&storage), None);
}

#[test]
fn take_fills_missing_keys_with_empty() {
    let storage = MemoryStorage::new();
    storage.seed(RESEND_KEY, r#"{"role":"SRE"}"#);
    assert_eq!(
        take(&storage),
        Some(ResendData { role: "SRE".to_owned(), ..ResendData::default() })
    );
}

#[test]
fn take_drops_malformed_entry() {
    let storage = MemoryStorage::new();
    storage.seed(RESEND_KEY, "not json");
    assert_eq!(take(&storage), None);
    assert!(storage.raw(RESEND_KEY).is_none());
}

#[test]
fn take_with_unavailable_storage_is_none() {
    let storage = MemoryStorage::new();
    storage.set_unavailable(true);
    assert_eq!(take(&storage), None);
}

#[test]
fn stash_reports_unavailable_storage() {
    let storage = MemoryStorage::new();
    storage.set_unavailable(true);
    assert!(stash(&storage, &ResendData::default()).is_err());
}

#[test]
fn field_values_use_job_application_names() {
    let values = ResendData::from(&record()).field_values();
    let schema = drafts::FormSchema::job_application();
    assert!(values.iter().all(|(name, _)| schema.has_field(name)));
    assert_eq!(values[2], ("emailBody", "Dear team,".to_owned()));
}

#[test]
fn resent_entry_replaces_restored_draft() {
    use std::cell::RefCell;
    use std::rc::Rc;

    use drafts::{
        DraftConfig, DraftStore, FieldBindings, FormSchema, LoadOutcome, ManualClock, ManualTimer, RecordingNotifier,
        SaveOutcome,
    };

    let storage = MemoryStorage::new();
    let clock = ManualClock::new(1_700_000_000_000);
    let timer = ManualTimer::new(clock.clone());
    let schema = FormSchema::job_application();
    let draft = r#"{"recruiterEmail":"old@acme.io","role":"Old role","emailBody":"Old body","lastModified":1699999999000}"#;
    storage.seed(schema.storage_key(), draft);
    stash(&storage, &ResendData::from(&record())).unwrap();

    let email = Rc::new(RefCell::new(String::new()));
    let body = Rc::new(RefCell::new(String::new()));
    let mut store = DraftStore::new(
        schema.clone(),
        FieldBindings::new()
            .with("recruiterEmail", email.clone())
            .with("role", Rc::new(RefCell::new(String::new())))
            .with("emailBody", body.clone()),
        storage.clone(),
        timer.clone(),
        clock.clone(),
        RecordingNotifier::new(),
        DraftConfig::default(),
    )
    .unwrap();

    assert_eq!(store.initialize(), LoadOutcome::Restored);
    assert_eq!(*email.borrow(), "old@acme.io");

    let values = take(&storage).unwrap().field_values();
    let values: Vec<(&str, &str)> = values.iter().map(|(n, v)| (*n, v.as_str())).collect();
    assert!(store.prefill(&values).is_some());
    assert_eq!(*email.borrow(), "hr@acme.io");

    clock.advance(1000);
    let ticket = timer.take_due().unwrap();
    assert_eq!(store.fire(ticket), Some(SaveOutcome::Saved));
    let saved: serde_json::Value = serde_json::from_str(&storage.raw(schema.storage_key()).unwrap()).unwrap();
    assert_eq!(saved["emailBody"], "Dear team,");
}
