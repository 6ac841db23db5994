//! Tokenization of BBCode source text
//!
//! This module provides the raw tokenization using the logos lexer library.
//! This is the entry point where source strings become token streams.
//!
//! The vocabulary is deliberately small: bracket tags (`[b]`, `[/b]`,
//! `[url=...]`), newlines, stray `[` characters, and runs of plain text.
//! Tag names are lowercased here so the parser can match them
//! case-insensitively, but tokens are returned with their source spans so
//! malformed tags can be passed through with their original casing intact.
//!
//! Whether a tag name belongs to the supported vocabulary is NOT decided
//! here - the lexer recognizes the bracket shape only. Classification
//! against the tag table happens in the parser, which degrades unknown
//! names to literal text.

use logos::Logos;

/// One lexical unit of BBCode source.
#[derive(Logos, Debug, Clone, PartialEq, serde::Serialize)]
pub enum Token {
    /// `[name]` opening tag; payload is the lowercased name
    #[regex(r"\[[a-zA-Z]+\]", open_name)]
    Open(String),

    /// `[name=target]` opening tag; payload is (lowercased name, verbatim target)
    #[regex(r"\[[a-zA-Z]+=[^\]]*\]", open_with_target)]
    OpenWithTarget((String, String)),

    /// `[/name]` closing tag; payload is the lowercased name
    #[regex(r"\[/[a-zA-Z]+\]", close_name)]
    Close(String),

    /// A literal newline, later rendered as a line break
    #[token("\n")]
    Newline,

    /// A run of plain text containing no `[` or newline
    #[regex(r"[^\[\n]+")]
    Text,

    /// A `[` that does not begin a well-formed tag
    #[token("[")]
    Bracket,
}

fn open_name(lex: &mut logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_ascii_lowercase()
}

fn close_name(lex: &mut logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    slice[2..slice.len() - 1].to_ascii_lowercase()
}

fn open_with_target(lex: &mut logos::Lexer<Token>) -> (String, String) {
    let slice = lex.slice();
    let inner = &slice[1..slice.len() - 1];
    match inner.split_once('=') {
        Some((name, target)) => (name.to_ascii_lowercase(), target.to_string()),
        None => (inner.to_ascii_lowercase(), String::new()),
    }
}

/// Tokenize source text with location information.
///
/// Returns tokens paired with their byte spans in `source`. The parser
/// slices the source through these spans whenever a token has to be passed
/// through as literal text.
pub fn tokenize(source: &str) -> Vec<(Token, logos::Span)> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        if let Ok(token) = result {
            tokens.push((token, lexer.span()));
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        tokenize(source).into_iter().map(|(t, _)| t).collect()
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenize(""), vec![]);
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(kinds("hello world"), vec![Token::Text]);
    }

    #[test]
    fn test_simple_tag_pair() {
        assert_eq!(
            kinds("[b]x[/b]"),
            vec![
                Token::Open("b".to_string()),
                Token::Text,
                Token::Close("b".to_string()),
            ]
        );
    }

    #[test]
    fn test_tag_names_are_lowercased() {
        assert_eq!(
            kinds("[B]x[/B]"),
            vec![
                Token::Open("b".to_string()),
                Token::Text,
                Token::Close("b".to_string()),
            ]
        );
    }

    #[test]
    fn test_url_open_with_target() {
        assert_eq!(
            kinds("[url=https://example.com]site[/url]"),
            vec![
                Token::OpenWithTarget(("url".to_string(), "https://example.com".to_string())),
                Token::Text,
                Token::Close("url".to_string()),
            ]
        );
    }

    #[test]
    fn test_target_is_kept_verbatim() {
        // Only the name is lowercased; the target keeps its casing.
        assert_eq!(
            kinds("[URL=HTTPS://X]y[/url]")[0],
            Token::OpenWithTarget(("url".to_string(), "HTTPS://X".to_string()))
        );
    }

    #[test]
    fn test_target_may_span_lines() {
        assert_eq!(
            kinds("[url=a\nb]x[/url]")[0],
            Token::OpenWithTarget(("url".to_string(), "a\nb".to_string()))
        );
    }

    #[test]
    fn test_stray_bracket() {
        assert_eq!(kinds("a[b"), vec![Token::Text, Token::Bracket, Token::Text]);
    }

    #[test]
    fn test_newlines_are_separate_tokens() {
        assert_eq!(
            kinds("a\nb"),
            vec![Token::Text, Token::Newline, Token::Text]
        );
    }

    #[test]
    fn test_non_alphabetic_tag_is_not_a_tag() {
        // Digits and punctuation do not form tag names.
        assert_eq!(kinds("[1]"), vec![Token::Bracket, Token::Text]);
    }

    #[test]
    fn test_spans_cover_source() {
        let source = "[b]hi[/b]";
        let tokens = tokenize(source);
        assert_eq!(&source[tokens[0].1.clone()], "[b]");
        assert_eq!(&source[tokens[1].1.clone()], "hi");
        assert_eq!(&source[tokens[2].1.clone()], "[/b]");
    }
}
