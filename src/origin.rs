use crate::constants::WILDCARD_ORIGIN;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OriginDecision {
    /// Allowed; carries the configured value to emit, never the request's origin.
    Allow(String),
    Disallow,
}

impl OriginDecision {
    /// Matches `request_origin` against the configured origin.
    ///
    /// Comparison is exact and case-sensitive; `*` admits every origin, including an empty one.
    pub fn resolve(allowed_origin: &str, request_origin: &str) -> Self {
        if allowed_origin == WILDCARD_ORIGIN || allowed_origin == request_origin {
            OriginDecision::Allow(allowed_origin.to_string())
        } else {
            OriginDecision::Disallow
        }
    }

    pub fn is_allowed(&self) -> bool {
        matches!(self, OriginDecision::Allow(_))
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
