//! Rendering pipeline: tokenize, resolve, emit
//!
//! `render` ties the stages together behind a single total function. There
//! is no error channel anywhere in the pipeline: malformed input degrades
//! to escaped literal text, never to an error or a panic.

use crate::bbcode::lexing::tokenize;
use crate::bbcode::parsing::parse;
use crate::bbcode::rendering::{render_nodes, text_with_breaks_into};

/// Bounds on the work one render call may do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Maximum element nesting depth; deeper tags degrade to literal text
    pub max_depth: usize,
    /// Inputs longer than this (in bytes) skip tag resolution entirely and
    /// are rendered as escaped text with line breaks converted
    pub max_input_len: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            max_depth: 32,
            max_input_len: 256 * 1024,
        }
    }
}

/// Render BBCode to sanitized HTML with default bounds.
pub fn render(input: &str) -> String {
    render_with(input, &RenderOptions::default())
}

/// Render BBCode to sanitized HTML.
pub fn render_with(input: &str, options: &RenderOptions) -> String {
    if input.len() > options.max_input_len {
        let mut out = String::with_capacity(input.len());
        text_with_breaks_into(input, &mut out);
        return out;
    }

    let tokens = tokenize(input);
    let nodes = parse(input, &tokens, options.max_depth);
    render_nodes(&nodes)
}
