//! Response classification helpers.
//!
//! Pure functions over status + body text, kept separate from the client
//! so the backend's quirks (structured error bodies, wrapped-or-bare list
//! shapes) are unit-testable without a network.

use reqwest::StatusCode;
use tracing::warn;

use chakravue_core::auth::{ApiErrorBody, AuthError, SessionInfo};
use chakravue_core::models::{VideoCallRequest, VideoCallRequestsResponse};

/// Classifies a login exchange.
///
/// On a success status the identity payload is decoded; a decode failure is
/// a connection-class error (the caller never half-succeeds). On any other
/// status the structured `{detail}` body is surfaced verbatim as the
/// rejection message.
pub(crate) fn classify_login(status: StatusCode, body: &str) -> Result<SessionInfo, AuthError> {
    if status.is_success() {
        serde_json::from_str::<SessionInfo>(body).map_err(|e| AuthError::connection(e.to_string()))
    } else {
        match serde_json::from_str::<ApiErrorBody>(body) {
            Ok(error_body) => Err(AuthError::Rejected(error_body.detail)),
            Err(e) => Err(AuthError::connection(e.to_string())),
        }
    }
}

/// Parses the video-call-requests body, which the backend serves in two
/// shapes: `{"videocallrequests": [...]}` or a bare array. The wrapped
/// shape is attempted first; anything else folds to empty.
pub(crate) fn parse_video_call_requests(body: &str) -> Vec<VideoCallRequest> {
    if let Ok(wrapped) = serde_json::from_str::<VideoCallRequestsResponse>(body) {
        return wrapped.requests;
    }

    match serde_json::from_str::<Vec<VideoCallRequest>>(body) {
        Ok(requests) => requests,
        Err(e) => {
            warn!("failed to parse video call requests: {}", e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_success_decodes_identity() {
        let body = r#"{"_id":"doc-1","name":"Dr. Rao","email":"rao@x.in"}"#;
        let info = classify_login(StatusCode::OK, body).unwrap();
        assert_eq!(info.id, "doc-1");
        assert_eq!(info.name, "Dr. Rao");
        assert_eq!(info.email, "rao@x.in");
    }

    #[test]
    fn login_rejection_surfaces_detail_verbatim() {
        let body = r#"{"detail":"Invalid credentials"}"#;
        let err = classify_login(StatusCode::UNAUTHORIZED, body).unwrap_err();
        assert_eq!(err, AuthError::Rejected("Invalid credentials".to_string()));
        assert_eq!(err.to_string(), "Invalid credentials");
    }

    #[test]
    fn login_malformed_success_body_is_connection_error() {
        let err = classify_login(StatusCode::OK, "{ not json").unwrap_err();
        match err {
            AuthError::Connection(message) => assert!(!message.is_empty()),
            other => panic!("expected Connection, got {:?}", other),
        }
    }

    #[test]
    fn login_missing_identity_fields_is_connection_error() {
        // A 200 without the required identity fields must not half-succeed.
        let err = classify_login(StatusCode::OK, r#"{"name":"Dr. Rao"}"#).unwrap_err();
        assert!(matches!(err, AuthError::Connection(_)));
    }

    #[test]
    fn login_unstructured_failure_body_is_connection_error() {
        let err = classify_login(StatusCode::BAD_GATEWAY, "<html>502</html>").unwrap_err();
        assert!(matches!(err, AuthError::Connection(_)));
    }

    #[test]
    fn video_calls_wrapped_shape() {
        let body = r#"{"videocallrequests":[{"_id":"1","patient_name":"A"}]}"#;
        let requests = parse_video_call_requests(body);
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].patient_name, "A");
    }

    #[test]
    fn video_calls_bare_array_shape() {
        let body = r#"[{"_id":"1","patient_name":"A"}]"#;
        let requests = parse_video_call_requests(body);
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].id, "1");
    }

    #[test]
    fn video_calls_garbage_folds_to_empty() {
        assert!(parse_video_call_requests("nope").is_empty());
        assert!(parse_video_call_requests("42").is_empty());
    }

    #[test]
    fn video_calls_object_without_key_is_empty() {
        // Matches the wrapped shape with a defaulted list.
        assert!(parse_video_call_requests(r#"{"unrelated":true}"#).is_empty());
    }
}
