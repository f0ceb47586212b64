use super::*;

#[test]
fn rejected_displays_provider_message_verbatim() {
    let err = AuthError::Rejected { status: 400, message: "Invalid login credentials".into() };
    assert_eq!(err.to_string(), "Invalid login credentials");
}

#[test]
fn request_error_display_mentions_auth() {
    let err = AuthError::Request("connection refused".into());
    let msg = err.to_string();
    assert!(msg.contains("auth request"));
    assert!(msg.contains("connection refused"));
}

#[test]
fn api_response_error_display_includes_status() {
    let err = ApiError::Response { status: 502, body: "bad gateway".into() };
    assert_eq!(err.to_string(), "links API responded with status 502");
}

#[test]
fn validation_messages_match_form_copy() {
    assert_eq!(ValidationError::MissingLinkField.to_string(), "Please fill in both fields");
    assert_eq!(ValidationError::MissingCredentials.to_string(), "Enter both email and password.");
}
