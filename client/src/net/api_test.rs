use super::*;

// =============================================================
// Auth helpers
// =============================================================

#[test]
fn bearer_prefixes_token() {
    assert_eq!(bearer("abc123"), "Bearer abc123");
}

#[test]
fn user_name_reads_name_field() {
    let raw = r#"{"id":"u1","name":"Ada Lovelace","email":"ada@example.com"}"#;
    assert_eq!(user_name_from(Some(raw)), "Ada Lovelace");
}

#[test]
fn user_name_is_empty_when_missing_or_malformed() {
    assert_eq!(user_name_from(None), "");
    assert_eq!(user_name_from(Some("not json")), "");
    assert_eq!(user_name_from(Some(r#"{"name":42}"#)), "");
}

// =============================================================
// Response handling
// =============================================================

#[test]
fn failure_message_prefers_server_message() {
    let body = r#"{"message":"Resume must be a PDF."}"#;
    assert_eq!(failure_message(400, body, "Failed to send email."), "Resume must be a PDF.");
}

#[test]
fn failure_message_falls_back_with_status() {
    assert_eq!(failure_message(502, "", "Failed to send email."), "Failed to send email. (502)");
    assert_eq!(failure_message(500, r#"{"message":"  "}"#, "AI generation failed."), "AI generation failed. (500)");
}

#[test]
fn generated_body_is_extracted() {
    assert_eq!(parse_generated_body(r#"{"emailBody":"Dear team,"}"#), Ok("Dear team,".to_owned()));
    assert!(parse_generated_body(r#"{"body":"x"}"#).is_err());
}

#[test]
fn composed_email_reads_camel_case_body() {
    let parsed: ComposedEmail = serde_json::from_str(r#"{"subject":"Hi","emailBody":"Hello"}"#).unwrap();
    assert_eq!(parsed, ComposedEmail { subject: "Hi".to_owned(), email_body: "Hello".to_owned() });
}

#[test]
fn history_entry_serializes_camel_case() {
    let entry = HistoryEntry {
        recruiter_email: "hr@acme.io".to_owned(),
        role: "Backend Engineer".to_owned(),
        email_body: "Hello".to_owned(),
        resume_file: None,
    };
    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "recruiterEmail": "hr@acme.io",
            "role": "Backend Engineer",
            "emailBody": "Hello",
            "resumeFile": null,
        })
    );
}

#[test]
fn storage_keys_match_login_flow() {
    assert_eq!(TOKEN_KEY, "userToken");
    assert_eq!(USER_KEY, "userData");
}

// =============================================================
// History list
// =============================================================

#[test]
fn history_rows_read_snake_case() {
    let body = r#"[
        {"id":7,"recruiter_email":"hr@acme.io","role":"Backend Engineer","email_body":"Hello","sent_at":"2025-03-01T10:00:00.000Z"},
        {"id":8,"recruiter_email":"jobs@initech.com","role":"SRE"}
    ]"#;
    let rows = parse_history(body).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].id, 7);
    assert_eq!(rows[0].recruiter_email, "hr@acme.io");
    assert_eq!(rows[0].sent_at, "2025-03-01T10:00:00.000Z");
    assert_eq!(rows[1].sent_at, "");
    assert_eq!(rows[1].email_body, "");
}

#[test]
fn history_rejects_non_list_body() {
    assert!(parse_history(r#"{"message":"Invalid token"}"#).is_err());
}

#[test]
fn history_item_url_appends_id() {
    assert_eq!(history_item_url(42), "/api/history/42");
}
