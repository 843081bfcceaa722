use crate::constants::SIMPLE_HEADER;
use crate::headers::Headers;
use crate::util::{equals_ignore_case, normalize_lower};

/// Whether any request header needs allow-listing and is missing from `allowed`.
///
/// Both sides compare case-insensitively; `content-type` never needs allow-listing.
pub(crate) fn has_disallowed_headers(allowed: &[String], request_headers: &Headers) -> bool {
    request_headers
        .keys()
        .any(|name| !is_simple_header(name) && !contains_ignore_case(allowed, name))
}

/// Name reported in the header rejection message.
///
/// This is the first request header, in insertion order, whose name is not an exact,
/// case-sensitive member of `allowed`. It can differ from the header that triggered
/// [`has_disallowed_headers`], e.g. a lowercase `content-type` or `authorization`.
pub(crate) fn reported_header<'a>(allowed: &[String], request_headers: &'a Headers) -> Option<&'a str> {
    request_headers
        .keys()
        .find(|name| !allowed.iter().any(|allowed_header| allowed_header == *name))
        .map(String::as_str)
}

fn is_simple_header(name: &str) -> bool {
    normalize_lower(name) == SIMPLE_HEADER
}

fn contains_ignore_case(allowed: &[String], name: &str) -> bool {
    allowed
        .iter()
        .any(|allowed_header| equals_ignore_case(allowed_header, name))
}

#[cfg(test)]
#[path = "allowed_headers_test.rs"]
mod allowed_headers_test;
