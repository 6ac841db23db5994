//! Canonical sample inputs for tests
//!
//! These samples are the canonical sources for BBCode test content and are
//! shared between unit tests and the integration suites under `tests/`,
//! instead of copying markup strings around.

/// Plain text with no tag syntax.
pub const PLAIN: &str = "just some plain text";

/// Two different tags nested in source order.
pub const NESTED: &str = "[b][i]x[/i][/b]";

/// Bold markup inside an opaque code body.
pub const OPAQUE_CODE: &str = "[code][b]x[/b][/code]";

/// An opening tag with no matching close.
pub const UNTERMINATED: &str = "[b]unclosed";

/// A link target attempting attribute breakout.
pub const HOSTILE_URL: &str = "[url=\"><script>]x[/url]";

/// A quote body with an embedded newline.
pub const QUOTED_LINES: &str = "[quote]line1\nline2[/quote]";

/// A post exercising most of the vocabulary at once.
pub const KITCHEN_SINK: &str = "[b]bold[/b] [i]italic[/i] [u]under[/u] [s]strike[/s]\n\
[quote][spoiler]secret[/spoiler][/quote]\n\
[code]let x = 1 < 2;[/code]\n\
[url=https://example.com]link[/url][br]done";

/// Assert that `input` renders exactly to `expected` with default options.
pub fn assert_renders(input: &str, expected: &str) {
    let html = crate::bbcode::pipeline::render(input);
    assert_eq!(html, expected, "input: {input:?}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_renders_helper() {
        assert_renders(PLAIN, "just some plain text");
    }
}
