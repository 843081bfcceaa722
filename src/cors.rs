use crate::allowed_headers::{has_disallowed_headers, reported_header};
use crate::allowed_methods::allows_method;
use crate::config::{ConfigError, PolicyConfig};
use crate::constants::status;
use crate::header_builder::HeaderBuilder;
use crate::headers::HeaderCollection;
use crate::origin::OriginDecision;
use crate::request::RequestDescriptor;
use crate::result::{CorsRejection, DecidedResponse, ResponseBody, ResponseDescriptor};
use tracing::debug;

/// Evaluates `request` against `config` the way a compliant server and browser would.
///
/// Never fails: a rejection is an ordinary [`ResponseDescriptor::Rejected`] value.
pub fn evaluate(config: &PolicyConfig, request: &RequestDescriptor) -> ResponseDescriptor {
    let builder = HeaderBuilder::new(config);
    let mut headers = builder.build_content_type_header();
    let origin = OriginDecision::resolve(&config.allowed_origin, &request.origin);
    headers.extend(builder.build_origin_header(&origin));

    if request.is_preflight() {
        process_preflight(&builder, headers, &origin, request)
    } else {
        process_actual(config, headers, &origin, request)
    }
}

fn process_preflight(
    builder: &HeaderBuilder<'_>,
    mut headers: HeaderCollection,
    origin: &OriginDecision,
    request: &RequestDescriptor,
) -> ResponseDescriptor {
    if origin.is_allowed() {
        headers.extend(builder.build_methods_header());
        headers.extend(builder.build_allowed_headers());
        headers.extend(builder.build_credentials_header());
        headers.extend(builder.build_max_age_header());
    }

    debug!(
        origin = %request.origin,
        origin_allowed = origin.is_allowed(),
        "preflight decided"
    );

    ResponseDescriptor::Decided(DecidedResponse {
        status: status::NO_CONTENT,
        status_text: status::NO_CONTENT_TEXT.to_string(),
        headers: headers.into_headers(),
        body: None,
    })
}

fn process_actual(
    config: &PolicyConfig,
    headers: HeaderCollection,
    origin: &OriginDecision,
    request: &RequestDescriptor,
) -> ResponseDescriptor {
    if let Some(rejection) = check_actual(config, origin, request) {
        debug!(
            origin = %request.origin,
            method = %request.method,
            reason = %rejection,
            "actual request rejected"
        );
        return ResponseDescriptor::Rejected(rejection);
    }

    debug!(origin = %request.origin, method = %request.method, "actual request allowed");

    ResponseDescriptor::Decided(DecidedResponse {
        status: status::OK,
        status_text: status::OK_TEXT.to_string(),
        headers: headers.into_headers(),
        body: Some(ResponseBody::success()),
    })
}

/// Origin, then method, then headers. Only the first failure is reported.
fn check_actual(
    config: &PolicyConfig,
    origin: &OriginDecision,
    request: &RequestDescriptor,
) -> Option<CorsRejection> {
    if !origin.is_allowed() {
        return Some(CorsRejection::OriginNotAllowed);
    }

    if !allows_method(&config.allowed_methods, &request.method) {
        return Some(CorsRejection::MethodNotAllowed {
            method: request.method.clone(),
        });
    }

    if has_disallowed_headers(&config.allowed_headers, &request.headers) {
        let header = reported_header(&config.allowed_headers, &request.headers)
            .unwrap_or_default()
            .to_string();
        return Some(CorsRejection::HeaderNotAllowed { header });
    }

    None
}

/// A validated policy that can be shared between threads and evaluated repeatedly.
#[derive(Debug, Clone)]
pub struct CorsPolicy {
    config: PolicyConfig,
}

impl CorsPolicy {
    pub fn new(config: PolicyConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    pub fn evaluate(&self, request: &RequestDescriptor) -> ResponseDescriptor {
        evaluate(&self.config, request)
    }
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
