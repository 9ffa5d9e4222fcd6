use scriba::domain::{API_KEY_PLACEHOLDER, ApiKey};

#[test]
fn given_real_key_when_checking_then_is_configured() {
    assert!(ApiKey::new("gsk_live_123").is_configured());
}

#[test]
fn given_placeholder_or_blank_key_when_checking_then_is_not_configured() {
    assert!(!ApiKey::new(API_KEY_PLACEHOLDER).is_configured());
    assert!(!ApiKey::new("").is_configured());
    assert!(!ApiKey::new("   ").is_configured());
    assert!(!ApiKey::default().is_configured());
}

#[test]
fn given_key_when_debug_formatting_then_value_is_redacted() {
    let rendered = format!("{:?}", ApiKey::new("gsk_live_123"));

    assert!(!rendered.contains("gsk_live_123"));
    assert!(rendered.contains("REDACTED"));
}
