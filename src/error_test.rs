use super::*;

const DEFAULT: &str = "Something went wrong";

// =============================================================================
// AuthError display
// =============================================================================

#[test]
fn credential_absent_display() {
    assert_eq!(AuthError::CredentialAbsent.to_string(), "no credential present");
}

#[test]
fn fetch_failed_display_includes_cause() {
    let err = AuthError::FetchFailed("connection refused".into());
    assert_eq!(err.to_string(), "user fetch failed: connection refused");
}

#[test]
fn unauthorized_display_includes_cause() {
    let err = AuthError::Unauthorized("401".into());
    assert_eq!(err.to_string(), "credential rejected: 401");
}

// =============================================================================
// extract_error_message
// =============================================================================

#[test]
fn string_detail_is_returned_verbatim() {
    let err: ValidationError = serde_json::from_str(r#"{"detail": "Email already registered"}"#).unwrap();
    assert_eq!(extract_error_message(&err, DEFAULT), "Email already registered");
}

#[test]
fn array_detail_returns_first_msg() {
    let err: ValidationError =
        serde_json::from_str(r#"{"detail": [{"msg": "field required"}, {"msg": "too short"}]}"#).unwrap();
    assert_eq!(extract_error_message(&err, DEFAULT), "field required");
}

#[test]
fn empty_array_detail_falls_back_to_default() {
    let err: ValidationError = serde_json::from_str(r#"{"detail": []}"#).unwrap();
    assert_eq!(extract_error_message(&err, DEFAULT), DEFAULT);
}

#[test]
fn missing_detail_falls_back_to_default() {
    let err: ValidationError = serde_json::from_str("{}").unwrap();
    assert_eq!(extract_error_message(&err, DEFAULT), DEFAULT);
}

#[test]
fn custom_default_is_used() {
    let err: ValidationError = serde_json::from_str("{}").unwrap();
    assert_eq!(extract_error_message(&err, "Could not save"), "Could not save");
}
