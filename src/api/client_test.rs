use super::*;
use reqwest::StatusCode;
use serde_json::json;

#[test]
fn error_message_should_prefer_message_field() {
    let body = json!({ "statusCode": 409, "message": "position code already exists" }).to_string();

    assert_eq!(
        error_message(StatusCode::CONFLICT, &body),
        "position code already exists"
    );
}

#[test]
fn error_message_should_fall_back_to_error_field() {
    let body = json!({ "statusCode": 400, "error": "Bad Request" }).to_string();

    assert_eq!(error_message(StatusCode::BAD_REQUEST, &body), "Bad Request");
}

#[test]
fn error_message_should_fall_back_to_raw_body() {
    assert_eq!(
        error_message(StatusCode::INTERNAL_SERVER_ERROR, "upstream timed out"),
        "upstream timed out"
    );
}

#[test]
fn error_message_should_fall_back_to_status_reason() {
    assert_eq!(error_message(StatusCode::NOT_FOUND, ""), "Not Found");
}

#[test]
fn error_message_should_fall_back_to_status_code() {
    let status = StatusCode::from_u16(599).expect("status should be in range");

    assert_eq!(error_message(status, "  "), "Error: 599");
}
