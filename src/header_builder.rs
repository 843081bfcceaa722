use crate::config::PolicyConfig;
use crate::constants::{APPLICATION_JSON, header};
use crate::headers::HeaderCollection;
use crate::origin::OriginDecision;
use crate::util::join_header_list;

pub(crate) struct HeaderBuilder<'a> {
    config: &'a PolicyConfig,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(config: &'a PolicyConfig) -> Self {
        Self { config }
    }

    pub(crate) fn build_content_type_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        headers.push(header::CONTENT_TYPE, APPLICATION_JSON.to_string());
        headers
    }

    pub(crate) fn build_origin_header(&self, decision: &OriginDecision) -> HeaderCollection {
        match decision {
            OriginDecision::Allow(value) => {
                let mut headers = HeaderCollection::with_estimate(1);
                headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, value.clone());
                headers
            }
            OriginDecision::Disallow => HeaderCollection::new(),
        }
    }

    /// Always emitted on an allowed preflight, even for an empty list.
    pub(crate) fn build_methods_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        headers.push(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            join_header_list(&self.config.allowed_methods),
        );
        headers
    }

    /// Always emitted on an allowed preflight, even for an empty list.
    pub(crate) fn build_allowed_headers(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        headers.push(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            join_header_list(&self.config.allowed_headers),
        );
        headers
    }

    pub(crate) fn build_credentials_header(&self) -> HeaderCollection {
        if self.config.allow_credentials {
            let mut headers = HeaderCollection::with_estimate(1);
            headers.push(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true".to_string());
            headers
        } else {
            HeaderCollection::new()
        }
    }

    pub(crate) fn build_max_age_header(&self) -> HeaderCollection {
        if !self.config.max_age.is_empty() {
            let mut headers = HeaderCollection::with_estimate(1);
            headers.push(header::ACCESS_CONTROL_MAX_AGE, self.config.max_age.clone());
            return headers;
        }
        HeaderCollection::new()
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
