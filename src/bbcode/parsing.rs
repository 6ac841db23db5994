//! Recursive-descent resolution of nested tag pairs
//!
//!     The parser walks the token stream left to right and resolves each
//!     recognized `[tag]...[/tag]` span into an AST node, recursing into the
//!     inner token range first (innermost-first resolution). Everything that
//!     does not form a complete, recognized tag pair degrades to a literal
//!     text node holding the exact source slice - the parser is total and
//!     has no error channel.
//!
//! Close Matching
//!
//!     For nested-capable tags the matching close is found by same-name
//!     depth counting, so `[b][b]x[/b][/b]` produces one wrapper per nesting
//!     level. Only opens that would actually resolve (right arity for the
//!     rule) count as a nesting level; a malformed same-name open is literal
//!     text and does not shift the pairing.
//!
//!     The opaque `code` tag instead pairs with the nearest following close
//!     (non-greedy), and its body is captured as raw source text, never
//!     re-scanned for tags.
//!
//! Bounds
//!
//!     Nesting beyond `max_depth` degrades to literal text: the open tag is
//!     emitted as text and its close, now unmatched, follows suit. A
//!     per-name index of close positions is built once per parse so an open
//!     with no close anywhere ahead is rejected without scanning.

use std::collections::HashMap;

use logos::Span;

use crate::bbcode::ast::Node;
use crate::bbcode::lexing::Token;
use crate::bbcode::tags::{self, Arity, BodyMode, TagRule, LINE_BREAK_TAG};

/// Resolve a token stream into an AST.
pub fn parse(source: &str, tokens: &[(Token, Span)], max_depth: usize) -> Vec<Node> {
    Parser::new(source, tokens, max_depth).parse()
}

/// Parser over a tokenized source document.
pub struct Parser<'a> {
    source: &'a str,
    tokens: &'a [(Token, Span)],
    max_depth: usize,
    /// Token indices of `Close` tokens, per tag name, in stream order
    closes: HashMap<&'a str, Vec<usize>>,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str, tokens: &'a [(Token, Span)], max_depth: usize) -> Self {
        let mut closes: HashMap<&'a str, Vec<usize>> = HashMap::new();
        for (idx, (token, _)) in tokens.iter().enumerate() {
            if let Token::Close(name) = token {
                closes.entry(name.as_str()).or_default().push(idx);
            }
        }
        Parser {
            source,
            tokens,
            max_depth,
            closes,
        }
    }

    pub fn parse(&self) -> Vec<Node> {
        self.parse_range(0, self.tokens.len(), 0)
    }

    fn parse_range(&self, start: usize, end: usize, depth: usize) -> Vec<Node> {
        let mut nodes = Vec::new();
        let mut i = start;
        while i < end {
            let (token, span) = &self.tokens[i];
            match token {
                Token::Text | Token::Bracket => {
                    nodes.push(self.literal(span));
                    i += 1;
                }
                Token::Newline => {
                    nodes.push(Node::LineBreak);
                    i += 1;
                }
                // A close with no matching open ahead of it
                Token::Close(_) => {
                    nodes.push(self.literal(span));
                    i += 1;
                }
                Token::Open(name) if name == LINE_BREAK_TAG => {
                    nodes.push(Node::LineBreak);
                    i += 1;
                }
                Token::Open(name) => match tags::rule_for_name(name) {
                    Some(rule) if rule.arity == Arity::None => {
                        i = self.open_element(rule, None, i, end, depth, &mut nodes);
                    }
                    // Unknown name, or a target-taking tag without its target
                    _ => {
                        nodes.push(self.literal(span));
                        i += 1;
                    }
                },
                Token::OpenWithTarget((name, target)) => match tags::rule_for_name(name) {
                    Some(rule) if rule.arity == Arity::Target => {
                        i = self.open_element(rule, Some(target.as_str()), i, end, depth, &mut nodes);
                    }
                    // Unknown name, or a target on a tag that takes none
                    _ => {
                        nodes.push(self.literal(span));
                        i += 1;
                    }
                },
            }
        }
        nodes
    }

    /// Resolve one recognized open tag at `open_idx`. Pushes either an
    /// element node or, when no close exists or the depth ceiling is hit,
    /// the open tag as literal text. Returns the index to continue from.
    fn open_element(
        &self,
        rule: &'static TagRule,
        target: Option<&str>,
        open_idx: usize,
        end: usize,
        depth: usize,
        nodes: &mut Vec<Node>,
    ) -> usize {
        if depth >= self.max_depth {
            nodes.push(self.literal(&self.tokens[open_idx].1));
            return open_idx + 1;
        }

        let close_idx = match self.find_close(rule, open_idx, end) {
            Some(idx) => idx,
            None => {
                nodes.push(self.literal(&self.tokens[open_idx].1));
                return open_idx + 1;
            }
        };

        let node = match rule.body {
            BodyMode::Opaque => Node::Verbatim {
                tag: rule.kind,
                raw: self.raw_between(open_idx, close_idx),
            },
            BodyMode::Nested => {
                let children = self.parse_range(open_idx + 1, close_idx, depth + 1);
                match target {
                    Some(target) => Node::Link {
                        target: target.to_string(),
                        children,
                    },
                    None => Node::Element {
                        tag: rule.kind,
                        children,
                    },
                }
            }
        };
        nodes.push(node);
        close_idx + 1
    }

    /// Find the close token pairing with an open of `rule` at `open_idx`,
    /// searching within `..end`.
    fn find_close(&self, rule: &'static TagRule, open_idx: usize, end: usize) -> Option<usize> {
        let positions = self.closes.get(rule.name)?;
        let next = positions.partition_point(|&idx| idx <= open_idx);
        let nearest = *positions.get(next)?;
        if nearest >= end {
            return None;
        }

        // Opaque bodies pair non-greedily with the nearest close.
        if rule.body == BodyMode::Opaque {
            return Some(nearest);
        }

        let mut level = 0usize;
        for j in open_idx + 1..end {
            match &self.tokens[j].0 {
                Token::Open(name) if name == rule.name && rule.arity == Arity::None => {
                    level += 1;
                }
                Token::OpenWithTarget((name, _))
                    if name == rule.name && rule.arity == Arity::Target =>
                {
                    level += 1;
                }
                Token::Close(name) if name == rule.name => {
                    if level == 0 {
                        return Some(j);
                    }
                    level -= 1;
                }
                _ => {}
            }
        }
        None
    }

    /// Raw source text between an open and close token pair.
    fn raw_between(&self, open_idx: usize, close_idx: usize) -> String {
        let start = self.tokens[open_idx].1.end;
        let end = self.tokens[close_idx].1.start;
        self.source[start..end].to_string()
    }

    fn literal(&self, span: &Span) -> Node {
        Node::text(&self.source[span.clone()])
    }
}
