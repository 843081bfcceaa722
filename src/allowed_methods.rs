/// Exact, case-sensitive membership of `method` in the configured list.
pub(crate) fn allows_method(allowed: &[String], method: &str) -> bool {
    allowed.iter().any(|candidate| candidate == method)
}

#[cfg(test)]
#[path = "allowed_methods_test.rs"]
mod allowed_methods_test;
