//! AST node types produced by the parser
//!
//! The tree is flat and small on purpose: text runs, line breaks, and the
//! three element shapes the tag table can produce. Text nodes hold raw
//! source text; escaping happens once, at render time.

use crate::bbcode::tags::TagKind;

/// One node of the resolved markup tree.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub enum Node {
    /// Raw user text, escaped when rendered
    Text(String),
    /// A line break, from a literal newline or a `[br]` marker
    LineBreak,
    /// A parameterless element wrapping recursively resolved children
    Element { tag: TagKind, children: Vec<Node> },
    /// A link with a verbatim target and resolved children
    Link { target: String, children: Vec<Node> },
    /// An opaque body, captured raw and never re-parsed
    Verbatim { tag: TagKind, raw: String },
}

impl Node {
    /// Raw text node from a source slice.
    pub fn text(slice: &str) -> Self {
        Node::Text(slice.to_string())
    }
}
