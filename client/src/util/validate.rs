//! Form input validation for the send and generate actions.
//!
//! The draft store never validates content; these checks run only when the
//! user asks to send or generate.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// `local@domain.tld` with no whitespace and exactly one `@`. The domain
/// needs a dot with at least one character on each side of it.
pub fn is_valid_email(raw: &str) -> bool {
    let email = raw.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Trimmed value, or `err` when blank.
pub fn required(raw: &str, err: &'static str) -> Result<String, &'static str> {
    let value = raw.trim();
    if value.is_empty() { Err(err) } else { Ok(value.to_owned()) }
}
