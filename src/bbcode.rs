//! Main module for BBCode rendering functionality
//!
//! The renderer is a three-stage pipeline:
//!
//! 1. [lexing] - logos-based tokenization of bracket tags, text runs, and
//!    newlines, keeping source spans for literal fallback.
//! 2. [parsing] - recursive-descent resolution of nested tag pairs into an
//!    AST, innermost-first, with a depth ceiling and literal passthrough for
//!    every malformed form.
//! 3. [rendering] - template-driven HTML emission with escaping applied to
//!    all user-originated text.
//!
//! [pipeline] ties the stages together behind `render`; [tags] holds the
//! static tag vocabulary.

pub mod ast;
pub mod escape;
pub mod lexing;
pub mod parsing;
pub mod pipeline;
pub mod rendering;
pub mod tags;
pub mod testing;

pub use self::ast::Node;
pub use self::lexing::{tokenize, Token};
pub use self::pipeline::{render, render_with, RenderOptions};
pub use self::tags::{TagKind, TagRule};
