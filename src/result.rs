use crate::constants::header;
use crate::headers::Headers;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Payload returned by the simulated server on a successful actual request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseBody {
    pub message: String,
    pub data: String,
}

impl ResponseBody {
    pub(crate) fn success() -> Self {
        Self {
            message: "Request successful!".into(),
            data: "some secret data".into(),
        }
    }
}

/// Status, headers and optional body of a response the browser receives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecidedResponse {
    pub status: u16,
    pub status_text: String,
    pub headers: Headers,
    pub body: Option<ResponseBody>,
}

/// Reasons a browser refuses an actual cross-origin request.
///
/// The display strings follow the wording of browser console errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CorsRejection {
    #[error(
        "CORS policy: No 'Access-Control-Allow-Origin' header is present on the requested resource."
    )]
    OriginNotAllowed,
    #[error("CORS policy: Method {method} is not allowed.")]
    MethodNotAllowed { method: String },
    #[error(
        "CORS policy: Request header field {header} is not allowed by Access-Control-Allow-Headers in preflight response."
    )]
    HeaderNotAllowed { header: String },
}

/// Outcome of a single evaluation: either a decided response or a rejection, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseDescriptor {
    Decided(DecidedResponse),
    Rejected(CorsRejection),
}

impl ResponseDescriptor {
    pub fn status(&self) -> Option<u16> {
        match self {
            ResponseDescriptor::Decided(response) => Some(response.status),
            ResponseDescriptor::Rejected(_) => None,
        }
    }

    pub fn status_text(&self) -> Option<&str> {
        match self {
            ResponseDescriptor::Decided(response) => Some(response.status_text.as_str()),
            ResponseDescriptor::Rejected(_) => None,
        }
    }

    pub fn headers(&self) -> Option<&Headers> {
        match self {
            ResponseDescriptor::Decided(response) => Some(&response.headers),
            ResponseDescriptor::Rejected(_) => None,
        }
    }

    pub fn body(&self) -> Option<&ResponseBody> {
        match self {
            ResponseDescriptor::Decided(response) => response.body.as_ref(),
            ResponseDescriptor::Rejected(_) => None,
        }
    }

    pub fn rejection(&self) -> Option<&CorsRejection> {
        match self {
            ResponseDescriptor::Rejected(rejection) => Some(rejection),
            ResponseDescriptor::Decided(_) => None,
        }
    }

    /// The browser-console error string, present only on rejection.
    pub fn error(&self) -> Option<String> {
        self.rejection().map(ToString::to_string)
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, ResponseDescriptor::Rejected(_))
    }

    /// Whether a decided response carries `Access-Control-Allow-Origin`.
    ///
    /// A preflight always decides with 204, so this is how its rejection shows.
    pub fn allows_origin(&self) -> bool {
        self.headers()
            .is_some_and(|headers| headers.contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN))
    }
}

#[cfg(test)]
#[path = "result_test.rs"]
mod result_test;
