use scriba::infrastructure::observability::sanitize_prompt;

#[test]
fn given_blank_prompt_when_sanitizing_then_marks_empty() {
    assert_eq!(sanitize_prompt("  \n "), "[EMPTY]");
}

#[test]
fn given_short_prompt_when_sanitizing_then_keeps_it() {
    assert_eq!(sanitize_prompt(" Summarize cells. "), "Summarize cells.");
}

#[test]
fn given_long_prompt_when_sanitizing_then_truncates_on_char_boundary() {
    let prompt = "é".repeat(150);

    let sanitized = sanitize_prompt(&prompt);

    assert!(sanitized.starts_with(&"é".repeat(100)));
    assert!(sanitized.ends_with("... (150 chars total)"));
}

#[test]
fn given_credentials_when_sanitizing_then_redacts_every_occurrence() {
    let sanitized =
        sanitize_prompt("use gsk_abc123 then token=xyz&next=1 and again gsk_def456");

    assert!(!sanitized.contains("abc123"));
    assert!(!sanitized.contains("def456"));
    assert!(!sanitized.contains("xyz"));
    assert!(sanitized.contains("token=[REDACTED]&next=1"));
    assert_eq!(sanitized.matches("gsk_[REDACTED]").count(), 2);
}

#[test]
fn given_bearer_header_when_sanitizing_then_redacts_token() {
    assert_eq!(
        sanitize_prompt("Authorization: Bearer sk-secret"),
        "Authorization: Bearer [REDACTED]"
    );
}
