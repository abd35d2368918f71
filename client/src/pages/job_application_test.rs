use super::*;

// =============================================================
// validate_application
// =============================================================

#[test]
fn valid_application_is_trimmed_except_body() {
    let app = validate_application(" hr@acme.io ", " Backend Engineer ", "  Dear team,\n", true).unwrap();
    assert_eq!(
        app,
        Application {
            recruiter_email: "hr@acme.io".to_owned(),
            role: "Backend Engineer".to_owned(),
            email_body: "  Dear team,\n".to_owned(),
        }
    );
}

#[test]
fn first_failing_field_wins() {
    assert_eq!(validate_application("not-an-email", "", "", false), Err(INVALID_EMAIL));
    assert_eq!(validate_application("hr@acme.io", "  ", "", false), Err(ROLE_REQUIRED));
    assert_eq!(validate_application("hr@acme.io", "Dev", " \n", false), Err(BODY_REQUIRED));
    assert_eq!(validate_application("hr@acme.io", "Dev", "Hello", false), Err(RESUME_REQUIRED));
}

#[test]
fn messages_match_form_copy() {
    assert_eq!(INVALID_EMAIL, "Please enter a valid email address.");
    assert_eq!(ROLE_REQUIRED, "Please enter a job role.");
    assert_eq!(BODY_REQUIRED, "Email body cannot be empty.");
    assert_eq!(RESUME_REQUIRED, "Please upload your resume.");
}

// =============================================================
// validate_generate
// =============================================================

#[test]
fn generate_needs_role_then_resume() {
    assert_eq!(validate_generate("", true), Err(ROLE_REQUIRED));
    assert_eq!(validate_generate("Dev", false), Err(RESUME_REQUIRED_FOR_GENERATE));
    assert_eq!(validate_generate(" Dev ", true), Ok("Dev".to_owned()));
}

#[test]
fn clear_prompt_names_the_form() {
    assert_eq!(CONFIRM_CLEAR, "Are you sure you want to clear the job application draft?");
}
