use reqwest::StatusCode;
use sendpulse_client::error::AppError;

#[test]
fn display_http() {
    let error = AppError::Http {
        status: StatusCode::BAD_REQUEST,
        path: "addressbooks".to_string(),
        body: "bad request".to_string(),
    };
    let text = error.to_string();
    assert!(text.contains("400"));
    assert!(text.contains("addressbooks"));
}

#[test]
fn display_unauthorized() {
    let error = AppError::Unauthorized {
        path: "balance".to_string(),
        body: String::new(),
    };
    assert!(error.to_string().starts_with("unauthorized on balance"));
}

#[test]
fn display_deserialization_omits_raw_body() {
    let error = AppError::Deserialization {
        path: "balance".to_string(),
        message: "expected value".to_string(),
        body: "raw payload".to_string(),
    };
    let text = error.to_string();
    assert!(text.contains("expected value"));
    assert!(!text.contains("raw payload"));
}

#[test]
fn display_invalid_input() {
    let error = AppError::InvalidInput("phones must not be empty".to_string());
    assert_eq!(error.to_string(), "invalid input: phones must not be empty");
}

#[test]
fn status_accessor() {
    let http = AppError::Http {
        status: StatusCode::SERVICE_UNAVAILABLE,
        path: "balance".to_string(),
        body: String::new(),
    };
    assert_eq!(http.status(), Some(StatusCode::SERVICE_UNAVAILABLE));

    let unauthorized = AppError::Unauthorized {
        path: "balance".to_string(),
        body: String::new(),
    };
    assert_eq!(unauthorized.status(), Some(StatusCode::UNAUTHORIZED));

    let local = AppError::InvalidInput("x".to_string());
    assert_eq!(local.status(), None);
}

#[test]
fn from_serde_json() {
    let serde_error = serde_json::from_str::<serde_json::Value>("{bad").unwrap_err();
    let app_error: AppError = serde_error.into();
    match app_error {
        AppError::Json(_) => (),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn from_io() {
    let io_error = std::io::Error::other("test");
    let app_error: AppError = io_error.into();
    match app_error {
        AppError::Io(_) => (),
        other => panic!("unexpected error: {other:?}"),
    }
}
