use crate::constants::method;
use crate::headers::Headers;

/// A simulated cross-origin request as a browser would send it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestDescriptor {
    pub origin: String,
    /// Uppercase HTTP verb. `OPTIONS` marks a preflight.
    pub method: String,
    pub headers: Headers,
    /// Informational only; the decision never depends on it.
    pub credentials: bool,
}

impl RequestDescriptor {
    pub fn new(origin: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            method: method.into(),
            headers: Headers::new(),
            credentials: false,
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_headers(mut self, headers: Headers) -> Self {
        self.headers = headers;
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.credentials = enabled;
        self
    }

    pub fn is_preflight(&self) -> bool {
        self.method == method::OPTIONS
    }
}
