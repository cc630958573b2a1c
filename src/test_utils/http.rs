use axum::http::StatusCode;
use axum_test::TestResponse;

#[track_caller]
pub(crate) fn get_header(response: &TestResponse, header_name: &str) -> String {
    let header_error_message = format!("Headers missing {header_name}");

    response
        .headers()
        .get(header_name)
        .expect(&header_error_message)
        .to_str()
        .expect("Could not convert to str")
        .to_string()
}

#[track_caller]
pub(crate) fn assert_json_content_type(response: &TestResponse) {
    assert_eq!(get_header(response, "content-type"), "application/json");
}

#[track_caller]
pub(crate) fn assert_plain_text_error(response: &TestResponse, status: StatusCode, message: &str) {
    assert_eq!(response.status_code(), status);
    assert!(
        get_header(response, "content-type").starts_with("text/plain"),
        "want a plain text error"
    );
    assert_eq!(response.text(), message);
}
