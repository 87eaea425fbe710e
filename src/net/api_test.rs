use super::*;

// =============================================================
// as_error priority
// =============================================================

#[test]
fn as_error_prefers_server_detail() {
    let err = ApiError::Status {
        status: 401,
        detail: Some("invalid credentials".to_owned()),
    };
    assert_eq!(as_error(&err), "invalid credentials");
}

#[test]
fn as_error_falls_back_to_transport_message() {
    let err = ApiError::Transport("Network Error".to_owned());
    assert_eq!(as_error(&err), "Network Error");
}

#[test]
fn as_error_unknown_when_status_has_no_detail() {
    let err = ApiError::Status {
        status: 500,
        detail: None,
    };
    assert_eq!(as_error(&err), "Unknown error");
}

#[test]
fn as_error_unknown_when_detail_and_message_empty() {
    let err = ApiError::Status {
        status: 502,
        detail: Some(String::new()),
    };
    assert_eq!(as_error(&err), "Unknown error");
    assert_eq!(as_error(&ApiError::Transport(String::new())), "Unknown error");
}

// =============================================================
// ApiError
// =============================================================

#[test]
fn is_unauthorized_only_for_401() {
    let unauthorized = ApiError::Status {
        status: 401,
        detail: None,
    };
    let forbidden = ApiError::Status {
        status: 403,
        detail: None,
    };
    assert!(unauthorized.is_unauthorized());
    assert!(!forbidden.is_unauthorized());
    assert!(!ApiError::Transport("down".to_owned()).is_unauthorized());
}

#[test]
fn status_error_display_includes_code() {
    let err = ApiError::Status {
        status: 404,
        detail: None,
    };
    assert_eq!(err.to_string(), "request failed with status 404");
}

// =============================================================
// api_base
// =============================================================

#[test]
fn api_base_defaults_to_local_dev_server() {
    // COACH_API_BASE is not set in the test environment.
    assert_eq!(api_base(), "http://localhost:8000");
}
