#[doc(hidden)]
pub fn normalize_lower(value: &str) -> String {
    if value.is_ascii() {
        let mut owned = value.to_owned();
        owned.make_ascii_lowercase();
        owned
    } else {
        lowercase_unicode_if_needed(value).unwrap_or_else(|| value.to_owned())
    }
}

#[doc(hidden)]
pub fn equals_ignore_case(a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }

    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }

    normalize_lower(a) == normalize_lower(b)
}

/// Joins list entries the way they appear in `Access-Control-Allow-*` values.
pub(crate) fn join_header_list(values: &[String]) -> String {
    values.join(", ")
}

pub(crate) fn lowercase_unicode_if_needed(value: &str) -> Option<String> {
    for (idx, ch) in value.char_indices() {
        if ch.is_uppercase() {
            let mut lowered = String::with_capacity(value.len());
            lowered.push_str(&value[..idx]);
            lowered.extend(ch.to_lowercase());

            let tail_start = idx + ch.len_utf8();
            for tail_ch in value[tail_start..].chars() {
                if tail_ch.is_uppercase() {
                    lowered.extend(tail_ch.to_lowercase());
                } else {
                    lowered.push(tail_ch);
                }
            }

            return Some(lowered);
        }
    }

    None
}

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;
