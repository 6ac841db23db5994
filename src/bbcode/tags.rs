//! Static tag vocabulary and rendering templates
//!
//!     This module defines the fixed set of supported BBCode tags. Each tag is
//!     described by a TagRule: its bracket name, how many parameters it takes,
//!     whether its body is re-parsed for nested markup, and the HTML wrapper
//!     emitted around the rendered body.
//!
//!     The table is process-wide and read-only. It is constructed statically
//!     and indexed by name through a lazily built map, so concurrent callers
//!     never contend on it.
//!
//! Tag Properties
//!
//!     - Tag names are matched case-insensitively; lookups take the
//!       lowercased name.
//!     - All tags except `code` re-parse their body for nested tags.
//!     - `code` is opaque: its body is HTML-escaped but never re-scanned
//!       for bracket markup.
//!     - `url` takes one parameter, the link target, written as
//!       `[url=TARGET]`. The target is entity-encoded for attribute context
//!       at render time.
//!     - `[br]` is a bodiless line-break marker, not a paired rule; it is
//!       handled by the parser directly.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

/// The kind of supported tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum TagKind {
    /// Bold text: `[b]text[/b]`
    Bold,
    /// Italic text: `[i]text[/i]`
    Italic,
    /// Underlined text: `[u]text[/u]`
    Underline,
    /// Struck-through text: `[s]text[/s]`
    Strikethrough,
    /// Monospace code: `[code]text[/code]` (opaque, no nested tags)
    Code,
    /// Block quotation: `[quote]text[/quote]`
    Quote,
    /// Click-to-reveal spoiler: `[spoiler]text[/spoiler]`
    Spoiler,
    /// Hyperlink: `[url=target]text[/url]`
    Url,
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rule().name)
    }
}

impl TagKind {
    /// The rule backing this kind.
    pub fn rule(self) -> &'static TagRule {
        RULES
            .iter()
            .find(|rule| rule.kind == self)
            .expect("every TagKind has a RULES entry")
    }
}

/// Number of parameters a tag accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Plain `[tag]` opening form
    None,
    /// `[tag=TARGET]` opening form
    Target,
}

/// Whether a tag body is re-parsed for nested markup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyMode {
    /// Body is recursively resolved for nested tags
    Nested,
    /// Body is escaped literally, never re-scanned
    Opaque,
}

/// HTML wrapper emitted around a tag's rendered body.
///
/// For parameterless tags the wrapper is `prefix` + body + `suffix`. For
/// target-taking tags the attribute-escaped target goes between `prefix`
/// and `infix`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    pub prefix: &'static str,
    pub infix: &'static str,
    pub suffix: &'static str,
}

/// One entry of the static tag table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagRule {
    /// Lowercase bracket name, e.g. `b` for `[b]`
    pub name: &'static str,
    pub kind: TagKind,
    pub arity: Arity,
    pub body: BodyMode,
    pub template: Template,
}

/// Marker tag that renders as a line break and takes no body or close.
pub const LINE_BREAK_TAG: &str = "br";

const fn wrapper(prefix: &'static str, suffix: &'static str) -> Template {
    Template {
        prefix,
        infix: "",
        suffix,
    }
}

/// The complete tag vocabulary. The CSS classes reproduce the board's
/// styling and are part of the rendering contract.
pub static RULES: [TagRule; 8] = [
    TagRule {
        name: "b",
        kind: TagKind::Bold,
        arity: Arity::None,
        body: BodyMode::Nested,
        template: wrapper("<strong>", "</strong>"),
    },
    TagRule {
        name: "i",
        kind: TagKind::Italic,
        arity: Arity::None,
        body: BodyMode::Nested,
        template: wrapper("<em>", "</em>"),
    },
    TagRule {
        name: "u",
        kind: TagKind::Underline,
        arity: Arity::None,
        body: BodyMode::Nested,
        template: wrapper("<u>", "</u>"),
    },
    TagRule {
        name: "s",
        kind: TagKind::Strikethrough,
        arity: Arity::None,
        body: BodyMode::Nested,
        template: wrapper("<s>", "</s>"),
    },
    TagRule {
        name: "code",
        kind: TagKind::Code,
        arity: Arity::None,
        body: BodyMode::Opaque,
        template: wrapper(
            "<code class=\"bg-midnight-100 dark:bg-midnight-800 px-1 rounded\">",
            "</code>",
        ),
    },
    TagRule {
        name: "quote",
        kind: TagKind::Quote,
        arity: Arity::None,
        body: BodyMode::Nested,
        template: wrapper(
            "<blockquote class=\"border-l-4 border-gray-400 pl-4 italic opacity-80\">",
            "</blockquote>",
        ),
    },
    TagRule {
        name: "spoiler",
        kind: TagKind::Spoiler,
        arity: Arity::None,
        body: BodyMode::Nested,
        template: wrapper(
            "<span class=\"bg-gray-800 text-gray-800 hover:text-white transition-colors px-1 rounded cursor-help\">",
            "</span>",
        ),
    },
    TagRule {
        name: "url",
        kind: TagKind::Url,
        arity: Arity::Target,
        body: BodyMode::Nested,
        template: Template {
            prefix: "<a href=\"",
            infix: "\" target=\"_blank\" class=\"text-secondary hover:underline\">",
            suffix: "</a>",
        },
    },
];

static BY_NAME: Lazy<HashMap<&'static str, &'static TagRule>> =
    Lazy::new(|| RULES.iter().map(|rule| (rule.name, rule)).collect());

/// Look up a rule by lowercased tag name.
pub fn rule_for_name(name: &str) -> Option<&'static TagRule> {
    BY_NAME.get(name).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_names() {
        for rule in &RULES {
            assert_eq!(rule_for_name(rule.name), Some(rule.kind.rule()));
        }
    }

    #[test]
    fn test_lookup_unknown_name() {
        assert_eq!(rule_for_name("blink"), None);
        assert_eq!(rule_for_name("br"), None);
        assert_eq!(rule_for_name(""), None);
    }

    #[test]
    fn test_lookup_is_lowercase_only() {
        // Callers lowercase names during tokenization; the table itself
        // holds lowercase entries only.
        assert_eq!(rule_for_name("B"), None);
    }

    #[test]
    fn test_display_matches_bracket_name() {
        assert_eq!(format!("{}", TagKind::Bold), "b");
        assert_eq!(format!("{}", TagKind::Quote), "quote");
        assert_eq!(format!("{}", TagKind::Url), "url");
    }

    #[test]
    fn test_only_code_is_opaque() {
        for rule in &RULES {
            let opaque = rule.body == BodyMode::Opaque;
            assert_eq!(opaque, rule.kind == TagKind::Code, "tag {}", rule.name);
        }
    }

    #[test]
    fn test_only_url_takes_target() {
        for rule in &RULES {
            let takes_target = rule.arity == Arity::Target;
            assert_eq!(takes_target, rule.kind == TagKind::Url, "tag {}", rule.name);
        }
    }
}
