//! # bbcode
//!
//! A renderer for BBCode bracket-tag markup.
//!
//! Converts user-authored `[tag]...[/tag]` markup into sanitized HTML. The
//! renderer is total: malformed, unterminated, or unknown tags degrade to
//! escaped literal text instead of producing an error, and all
//! user-originated text is HTML-escaped on the way out.
//!
//! ## Testing
//!
//! Canonical sample inputs live in the [testing module](bbcode::testing) and
//! are shared between unit and integration tests.

pub mod bbcode;

pub use bbcode::pipeline::{render, render_with, RenderOptions};
