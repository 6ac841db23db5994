//! HTML emission from the resolved tree
//!
//! Walks the AST appending to an output string. Escaping discipline: text
//! is escaped exactly where it is inserted - text nodes, link targets, and
//! opaque bodies - while template HTML from the tag table is appended raw.
//! Every element emitted here is opened and closed by the same arm, so the
//! output is always a balanced element sequence.

use crate::bbcode::ast::Node;
use crate::bbcode::escape::escape_into;
use crate::bbcode::tags::TagKind;

/// Render a node list to an HTML string.
pub fn render_nodes(nodes: &[Node]) -> String {
    let mut out = String::new();
    render_into(nodes, &mut out);
    out
}

fn render_into(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(text) => escape_into(text, out),
            Node::LineBreak => out.push_str("<br>"),
            Node::Element { tag, children } => {
                let template = tag.rule().template;
                out.push_str(template.prefix);
                render_into(children, out);
                out.push_str(template.suffix);
            }
            Node::Link { target, children } => {
                let template = TagKind::Url.rule().template;
                out.push_str(template.prefix);
                escape_into(target, out);
                out.push_str(template.infix);
                render_into(children, out);
                out.push_str(template.suffix);
            }
            Node::Verbatim { tag, raw } => {
                let template = tag.rule().template;
                out.push_str(template.prefix);
                text_with_breaks_into(raw, out);
                out.push_str(template.suffix);
            }
        }
    }
}

/// Escape text wholesale, converting literal newlines to `<br>`. Bracket
/// markup stays literal. Used for opaque bodies and for oversized input
/// that skips tag resolution.
pub(crate) fn text_with_breaks_into(raw: &str, out: &mut String) {
    for (idx, line) in raw.split('\n').enumerate() {
        if idx > 0 {
            out.push_str("<br>");
        }
        escape_into(line, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bbcode::ast::Node;
    use crate::bbcode::tags::TagKind;

    #[test]
    fn test_text_is_escaped() {
        let html = render_nodes(&[Node::text("<x>")]);
        assert_eq!(html, "&lt;x&gt;");
    }

    #[test]
    fn test_element_wraps_children() {
        let html = render_nodes(&[Node::Element {
            tag: TagKind::Bold,
            children: vec![Node::text("x")],
        }]);
        assert_eq!(html, "<strong>x</strong>");
    }

    #[test]
    fn test_empty_element_renders_empty_wrapper() {
        let html = render_nodes(&[Node::Element {
            tag: TagKind::Italic,
            children: vec![],
        }]);
        assert_eq!(html, "<em></em>");
    }

    #[test]
    fn test_link_target_is_attribute_escaped() {
        let html = render_nodes(&[Node::Link {
            target: "\"><script>".to_string(),
            children: vec![Node::text("x")],
        }]);
        assert_eq!(
            html,
            "<a href=\"&quot;&gt;&lt;script&gt;\" target=\"_blank\" \
             class=\"text-secondary hover:underline\">x</a>"
        );
    }

    #[test]
    fn test_verbatim_is_escaped_with_breaks() {
        let html = render_nodes(&[Node::Verbatim {
            tag: TagKind::Code,
            raw: "[b]x[/b]\n<y>".to_string(),
        }]);
        assert_eq!(
            html,
            "<code class=\"bg-midnight-100 dark:bg-midnight-800 px-1 rounded\">\
             [b]x[/b]<br>&lt;y&gt;</code>"
        );
    }

    #[test]
    fn test_line_break_node() {
        assert_eq!(render_nodes(&[Node::LineBreak]), "<br>");
    }
}
