use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn default_matches_mailer_timings() {
    let cfg = DraftConfig::default();
    assert_eq!(cfg.debounce, Duration::from_millis(1000));
    assert_eq!(cfg.expiry, Duration::from_secs(604_800));
    assert_eq!(cfg.saved_notice, Duration::from_millis(2000));
    assert_eq!(cfg.recovered_notice, Duration::from_millis(5000));
    assert_eq!(cfg.cleared_notice, Duration::from_millis(3000));
}

#[test]
fn from_lookup_empty_is_default() {
    assert_eq!(DraftConfig::from_lookup(|_| None), DraftConfig::default());
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = DraftConfig::from_lookup(lookup_from(&[
        ("DRAFT_DEBOUNCE_MS", "250"),
        ("DRAFT_EXPIRY_SECS", " 60 "),
        ("DRAFT_SAVED_NOTICE_MS", "10"),
    ]));
    assert_eq!(cfg.debounce, Duration::from_millis(250));
    assert_eq!(cfg.expiry, Duration::from_secs(60));
    assert_eq!(cfg.saved_notice, Duration::from_millis(10));
    assert_eq!(cfg.recovered_notice, Duration::from_millis(DEFAULT_RECOVERED_NOTICE_MS));
}

#[test]
fn from_lookup_bad_values_fall_back() {
    let cfg = DraftConfig::from_lookup(lookup_from(&[("DRAFT_DEBOUNCE_MS", "soon"), ("DRAFT_EXPIRY_SECS", "-1")]));
    assert_eq!(cfg.debounce, Duration::from_millis(DEFAULT_DEBOUNCE_MS));
    assert_eq!(cfg.expiry, Duration::from_secs(DEFAULT_EXPIRY_SECS));
}

#[test]
fn expiry_millis_of_default_is_seven_days() {
    assert_eq!(DraftConfig::default().expiry_millis(), 7 * 24 * 60 * 60 * 1000);
}

#[test]
fn expiry_millis_saturates() {
    let cfg = DraftConfig { expiry: Duration::MAX, ..DraftConfig::default() };
    assert_eq!(cfg.expiry_millis(), i64::MAX);
}
