//! HTML escaping for user-originated text
//!
//! All text that came from the input document passes through here exactly
//! once, as it is captured from source. Template HTML injected by the
//! renderer never does, so engine output is never double-escaped.
//!
//! The entity set covers both text-node and double-quoted attribute
//! contexts: `&`, `<`, `>`, `"`, and `'` are all encoded, so a `url` target
//! cannot break out of its `href="..."` attribute.

/// Append `input` to `out` with HTML-special characters entity-encoded.
pub fn escape_into(input: &str, out: &mut String) {
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}

/// Escape `input` into a fresh string.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    escape_into(input, &mut out);
    out
}
