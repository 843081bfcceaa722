#![allow(dead_code)]

use bunner_cors_sim::constants::method;
use bunner_cors_sim::{
    CorsPolicy, PolicyConfig, PolicyPatch, RequestDescriptor, ResponseDescriptor,
};

pub const CLIENT_ORIGIN: &str = "http://client.example.com";

#[derive(Default)]
pub struct PolicyBuilder {
    patch: PolicyPatch,
}

impl PolicyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.patch = self.patch.allowed_origin(origin);
        self
    }

    pub fn methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.patch = self.patch.allowed_methods(methods);
        self
    }

    pub fn allowed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.patch = self.patch.allowed_headers(headers);
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.patch = self.patch.allow_credentials(enabled);
        self
    }

    pub fn max_age(mut self, value: impl Into<String>) -> Self {
        self.patch = self.patch.max_age(value);
        self
    }

    pub fn config(self) -> PolicyConfig {
        PolicyConfig::default().merge(self.patch)
    }

    pub fn build(self) -> CorsPolicy {
        CorsPolicy::new(self.config()).expect("valid CORS configuration")
    }
}

pub struct RequestBuilder {
    request: RequestDescriptor,
}

impl RequestBuilder {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            request: RequestDescriptor::new(CLIENT_ORIGIN, method),
        }
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.request.origin = origin.into();
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.request = self.request.header(name, value);
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.request = self.request.credentials(enabled);
        self
    }

    pub fn descriptor(self) -> RequestDescriptor {
        self.request
    }

    pub fn evaluate(self, policy: &CorsPolicy) -> ResponseDescriptor {
        policy.evaluate(&self.request)
    }
}

pub fn policy() -> PolicyBuilder {
    PolicyBuilder::new()
}

/// Scenario policy: the client origin, `GET, POST, OPTIONS`, `Content-Type, Authorization`, max-age 600.
pub fn scenario_policy() -> CorsPolicy {
    policy()
        .origin(CLIENT_ORIGIN)
        .methods([method::GET, method::POST, method::OPTIONS])
        .allowed_headers(["Content-Type", "Authorization"])
        .credentials(false)
        .max_age("600")
        .build()
}

pub fn actual_request(method: impl Into<String>) -> RequestBuilder {
    RequestBuilder::new(method)
}

pub fn preflight_request() -> RequestBuilder {
    RequestBuilder::new(method::OPTIONS)
}
