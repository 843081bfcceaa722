use crate::config::{ConfigError, PolicyConfig, PolicyPatch};
use crate::constants::{DEFAULT_CLIENT_ORIGIN, method};
use crate::cors::evaluate;
use crate::headers::Headers;
use crate::request::RequestDescriptor;
use crate::result::{CorsRejection, ResponseDescriptor};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

/// Editable client-side request buffer. Headers are kept as JSON object text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientRequest {
    pub method: String,
    pub headers_text: String,
    pub credentials: bool,
}

impl Default for ClientRequest {
    fn default() -> Self {
        Self {
            method: method::GET.into(),
            headers_text: "{\n  \"Authorization\": \"Bearer token\"\n}".into(),
            credentials: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientRequestPatch {
    pub method: Option<String>,
    pub headers_text: Option<String>,
    pub credentials: Option<bool>,
}

impl ClientRequestPatch {
    pub fn method(mut self, value: impl Into<String>) -> Self {
        self.method = Some(value.into());
        self
    }

    pub fn headers_text(mut self, value: impl Into<String>) -> Self {
        self.headers_text = Some(value.into());
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.credentials = Some(enabled);
        self
    }
}

impl ClientRequest {
    pub fn merge(&self, patch: ClientRequestPatch) -> ClientRequest {
        ClientRequest {
            method: patch.method.unwrap_or_else(|| self.method.clone()),
            headers_text: patch
                .headers_text
                .unwrap_or_else(|| self.headers_text.clone()),
            credentials: patch.credentials.unwrap_or(self.credentials),
        }
    }

    /// Parses the header buffer as a JSON object, preserving key order.
    ///
    /// Whitespace-only text yields no headers. Non-string values keep their JSON text.
    pub fn parse_headers(&self) -> Result<Headers, SessionError> {
        if self.headers_text.trim().is_empty() {
            return Ok(Headers::new());
        }

        let parsed: IndexMap<String, Value> = serde_json::from_str(&self.headers_text)?;
        Ok(parsed
            .into_iter()
            .map(|(name, value)| match value {
                Value::String(text) => (name, text),
                other => (name, other.to_string()),
            })
            .collect())
    }
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Invalid request headers: {0}")]
    MalformedHeaders(#[from] serde_json::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// One simulated browser tab: policy, request buffer, narration log and last error.
#[derive(Debug, Clone)]
pub struct SimulationSession {
    server_config: PolicyConfig,
    client_request: ClientRequest,
    client_origin: String,
    logs: Vec<String>,
    error: Option<String>,
}

impl Default for SimulationSession {
    fn default() -> Self {
        Self {
            server_config: PolicyConfig::default(),
            client_request: ClientRequest::default(),
            client_origin: DEFAULT_CLIENT_ORIGIN.into(),
            logs: Vec::new(),
            error: None,
        }
    }
}

impl SimulationSession {
    pub fn new(server_config: PolicyConfig) -> Result<Self, SessionError> {
        server_config.validate()?;
        Ok(Self {
            server_config,
            ..Self::default()
        })
    }

    pub fn with_client_origin(mut self, origin: impl Into<String>) -> Self {
        self.client_origin = origin.into();
        self
    }

    pub fn with_client_request(mut self, request: ClientRequest) -> Self {
        self.client_request = request;
        self
    }

    pub fn server_config(&self) -> &PolicyConfig {
        &self.server_config
    }

    pub fn client_request(&self) -> &ClientRequest {
        &self.client_request
    }

    pub fn client_origin(&self) -> &str {
        &self.client_origin
    }

    pub fn logs(&self) -> &[String] {
        &self.logs
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Applies `patch` to the server policy. An invalid result leaves the policy unchanged.
    pub fn set_server_config(&mut self, patch: PolicyPatch) -> Result<(), ConfigError> {
        let merged = self.server_config.merge(patch);
        if let Err(err) = merged.validate() {
            warn!(error = %err, "rejected server config update");
            return Err(err);
        }
        self.server_config = merged;
        Ok(())
    }

    pub fn set_client_request(&mut self, patch: ClientRequestPatch) {
        self.client_request = self.client_request.merge(patch);
    }

    pub fn add_log(&mut self, line: impl Into<String>) {
        self.logs.push(line.into());
    }

    pub fn reset_simulation(&mut self) {
        info!(cleared = self.logs.len(), "simulation reset");
        self.logs.clear();
        self.error = None;
    }

    /// Sends the buffered request once and records the outcome.
    ///
    /// Malformed header text is recorded and returned as an error without evaluating.
    pub fn run_simulation(&mut self) -> Result<ResponseDescriptor, SessionError> {
        let method = self.client_request.method.clone();
        let request = self.build_request(&method)?;

        self.add_log(format!(
            "Sending {} request from {}",
            request.method, request.origin
        ));
        let response = evaluate(&self.server_config, &request);
        info!(
            method = %request.method,
            status = ?response.status(),
            rejected = response.is_rejected(),
            "simulation run"
        );
        self.record_response(&response);

        Ok(response)
    }

    /// Sends a preflight first and the buffered request only if the preflight admits the origin.
    ///
    /// The two evaluations are independent; the preflight result is not cached.
    pub fn run_with_preflight(&mut self) -> Result<ResponseDescriptor, SessionError> {
        let preflight = self.build_request(method::OPTIONS)?;

        self.add_log(format!(
            "Sending preflight {} request from {}",
            preflight.method, preflight.origin
        ));
        let response = evaluate(&self.server_config, &preflight);
        self.narrate_decided(&response);

        if !response.allows_origin() {
            let rejection = ResponseDescriptor::Rejected(CorsRejection::OriginNotAllowed);
            info!(origin = %preflight.origin, "preflight did not admit origin");
            self.record_response(&rejection);
            return Ok(rejection);
        }

        self.run_simulation()
    }

    fn build_request(&mut self, method: &str) -> Result<RequestDescriptor, SessionError> {
        let headers = match self.client_request.parse_headers() {
            Ok(headers) => headers,
            Err(err) => {
                warn!(error = %err, "malformed request headers");
                self.error = Some(err.to_string());
                self.add_log(format!("Error: {err}"));
                return Err(err);
            }
        };

        Ok(RequestDescriptor::new(self.client_origin.clone(), method)
            .with_headers(headers)
            .credentials(self.client_request.credentials))
    }

    fn record_response(&mut self, response: &ResponseDescriptor) {
        match response.rejection() {
            Some(rejection) => {
                let message = rejection.to_string();
                self.add_log(format!("Error: {message}"));
                self.error = Some(message);
            }
            None => {
                self.error = None;
                self.narrate_decided(response);
            }
        }
    }

    fn narrate_decided(&mut self, response: &ResponseDescriptor) {
        if let (Some(status), Some(status_text)) = (response.status(), response.status_text()) {
            self.add_log(format!("Response: {status} {status_text}"));
        }

        let header_lines: Vec<String> = response
            .headers()
            .map(|headers| {
                headers
                    .iter()
                    .map(|(name, value)| format!("Header {name}: {value}"))
                    .collect()
            })
            .unwrap_or_default();
        self.logs.extend(header_lines);

        if let Some(body) = response.body() {
            match serde_json::to_string(body) {
                Ok(json) => self.add_log(format!("Body: {json}")),
                Err(err) => warn!(error = %err, "failed to render response body"),
            }
        }
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;
