/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use serde_json::Value;
use std::collections::HashMap;

// Flickr is loose about scalar types (farm is a number, server a string, etc).
// Stringifies any scalar and treats null/containers as missing.
pub(crate) fn scalar_to_string(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

// Numeric codes may come back as numbers or numeric strings
pub(crate) fn scalar_to_i64(v: &Value) -> Option<i64> {
    match v {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

// Whether the leading integer of a string is non-zero ("92abc" yes, "00" and "abc" no).
// Digit runs of any length are accepted.
pub(crate) fn has_nonzero_leading_int(s: &str) -> bool {
    s.trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .any(|c| c != '0')
}

// Parses an `application/x-www-form-urlencoded` reply such as the OAuth token endpoints return
pub(crate) fn from_form_reply(body: &[u8]) -> HashMap<String, String> {
    url::form_urlencoded::parse(body).into_owned().collect()
}
