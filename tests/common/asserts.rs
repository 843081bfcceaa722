#![allow(dead_code)]

use super::headers::header_value;
use bunner_cors_sim::{CorsRejection, DecidedResponse, Headers, ResponseDescriptor};

pub fn assert_decided(response: ResponseDescriptor) -> DecidedResponse {
    match response {
        ResponseDescriptor::Decided(decided) => decided,
        other => panic!("expected decided response, got {:?}", other),
    }
}

pub fn assert_rejected(response: ResponseDescriptor) -> CorsRejection {
    match response {
        ResponseDescriptor::Rejected(rejection) => rejection,
        other => panic!("expected rejection, got {:?}", other),
    }
}

pub fn assert_preflight(response: ResponseDescriptor) -> Headers {
    let decided = assert_decided(response);
    assert_eq!(decided.status, 204);
    assert_eq!(decided.status_text, "No Content");
    assert!(decided.body.is_none(), "preflight must not carry a body");
    decided.headers
}

pub fn assert_success(response: ResponseDescriptor) -> Headers {
    let decided = assert_decided(response);
    assert_eq!(decided.status, 200);
    assert_eq!(decided.status_text, "OK");
    assert!(decided.body.is_some(), "successful request must carry a body");
    decided.headers
}

pub fn assert_header_eq(headers: &Headers, name: &str, expected: &str) {
    assert_eq!(header_value(headers, name), Some(expected), "header {name}");
}

pub fn assert_header_absent(headers: &Headers, name: &str) {
    assert!(
        header_value(headers, name).is_none(),
        "header {name} should be absent"
    );
}
