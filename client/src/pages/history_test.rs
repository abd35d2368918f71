use super::*;

fn row(id: i64, email: &str, role: &str, sent_at: &str) -> HistoryRecord {
    HistoryRecord {
        id,
        recruiter_email: email.to_owned(),
        role: role.to_owned(),
        email_body: format!("Body {id}"),
        sent_at: sent_at.to_owned(),
    }
}

fn rows(n: i64) -> Vec<HistoryRecord> {
    (1..=n).map(|i| row(i, &format!("hr{i}@acme.io"), "SRE", "2025-03-01T10:00:00.000Z")).collect()
}

// =============================================================
// Filtering
// =============================================================

#[test]
fn filter_matches_substrings_ignoring_case() {
    let all = vec![
        row(1, "HR@Acme.io", "Backend Engineer", ""),
        row(2, "jobs@initech.com", "Frontend Engineer", ""),
        row(3, "talent@acme.io", "Designer", ""),
    ];
    let ids = |v: Vec<HistoryRecord>| v.into_iter().map(|r| r.id).collect::<Vec<_>>();
    assert_eq!(ids(filter_history(&all, "ACME", "")), [1, 3]);
    assert_eq!(ids(filter_history(&all, "", "engineer")), [1, 2]);
    assert_eq!(ids(filter_history(&all, "acme", "engineer")), [1]);
    assert_eq!(ids(filter_history(&all, "  ", " ")), [1, 2, 3]);
    assert!(filter_history(&all, "nobody", "").is_empty());
}

// =============================================================
// Paging
// =============================================================

#[test]
fn page_count_rounds_up_and_never_zero() {
    assert_eq!(page_count(0), 1);
    assert_eq!(page_count(10), 1);
    assert_eq!(page_count(11), 2);
}

#[test]
fn page_of_slices_ten_rows() {
    let all = rows(23);
    assert_eq!(page_of(&all, 1).len(), 10);
    assert_eq!(page_of(&all, 3).len(), 3);
    assert_eq!(page_of(&all, 3)[0].id, 21);
}

#[test]
fn page_of_clamps_out_of_range_pages() {
    let all = rows(12);
    assert_eq!(page_of(&all, 0)[0].id, 1);
    assert_eq!(page_of(&all, 9)[0].id, 11);
    assert!(page_of(&[], 1).is_empty());
}

// =============================================================
// Display helpers
// =============================================================

#[test]
fn sent_date_keeps_day_part() {
    assert_eq!(sent_date("2025-03-01T10:00:00.000Z"), "2025-03-01");
    assert_eq!(sent_date("soon"), "soon");
}

#[test]
fn stats_count_today_and_distinct_roles() {
    let all = vec![
        row(1, "a@b.com", "SRE", "2025-03-01T08:00:00.000Z"),
        row(2, "c@d.com", "SRE", "2025-03-02T08:00:00.000Z"),
        row(3, "e@f.com", "Designer", "2025-03-02T09:30:00.000Z"),
    ];
    assert_eq!(
        history_stats(&all, "2025-03-02"),
        HistoryStats { total: 3, sent_today: 2, unique_roles: 2 }
    );
}

#[test]
fn delete_prompt_names_recipient() {
    assert_eq!(
        delete_prompt(&row(1, "hr@acme.io", "SRE", "")),
        "Are you sure you want to delete the email to hr@acme.io?"
    );
}

#[test]
fn page_copy() {
    assert_eq!(LOAD_FAILED, "Error loading history.");
    assert_eq!(EMPTY, "No sent emails found.");
    assert_eq!(DELETE_FAILED, "Could not delete the history item. Please try again.");
}
