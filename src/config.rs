use crate::constants::{DEFAULT_CLIENT_ORIGIN, method};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Server-side CORS policy the evaluator decides against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PolicyConfig {
    /// A literal origin or the wildcard `*`.
    pub allowed_origin: String,
    pub allowed_methods: Vec<String>,
    /// Request headers permitted beyond `Content-Type`.
    pub allowed_headers: Vec<String>,
    pub allow_credentials: bool,
    /// Seconds as text. Empty means the header is not advertised.
    pub max_age: String,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            allowed_origin: DEFAULT_CLIENT_ORIGIN.into(),
            allowed_methods: vec![method::GET.into(), method::POST.into(), method::OPTIONS.into()],
            allowed_headers: vec!["Content-Type".into(), "Authorization".into()],
            allow_credentials: false,
            max_age: "600".into(),
        }
    }
}

/// Partial update for [`PolicyConfig`]. `None` fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PolicyPatch {
    pub allowed_origin: Option<String>,
    pub allowed_methods: Option<Vec<String>>,
    pub allowed_headers: Option<Vec<String>>,
    pub allow_credentials: Option<bool>,
    pub max_age: Option<String>,
}

impl PolicyPatch {
    pub fn allowed_origin(mut self, value: impl Into<String>) -> Self {
        self.allowed_origin = Some(value.into());
        self
    }

    pub fn allowed_methods<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_methods = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn allowed_headers<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_headers = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn allow_credentials(mut self, enabled: bool) -> Self {
        self.allow_credentials = Some(enabled);
        self
    }

    pub fn max_age(mut self, value: impl Into<String>) -> Self {
        self.max_age = Some(value.into());
        self
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("allowed origin must not be empty")]
    EmptyOrigin,
    #[error("failed to parse policy configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

impl PolicyConfig {
    /// Loads a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(input: &str) -> Result<Self, ConfigError> {
        let config: PolicyConfig = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.allowed_origin.trim().is_empty() {
            return Err(ConfigError::EmptyOrigin);
        }
        Ok(())
    }

    /// Returns a new configuration with the fields present in `patch` applied.
    pub fn merge(&self, patch: PolicyPatch) -> PolicyConfig {
        let PolicyPatch {
            allowed_origin,
            allowed_methods,
            allowed_headers,
            allow_credentials,
            max_age,
        } = patch;

        PolicyConfig {
            allowed_origin: allowed_origin.unwrap_or_else(|| self.allowed_origin.clone()),
            allowed_methods: allowed_methods.unwrap_or_else(|| self.allowed_methods.clone()),
            allowed_headers: allowed_headers.unwrap_or_else(|| self.allowed_headers.clone()),
            allow_credentials: allow_credentials.unwrap_or(self.allow_credentials),
            max_age: max_age.unwrap_or_else(|| self.max_age.clone()),
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
