//! Line Parser
//!
//! Turns one line of markup, known to be outside any code block, into a
//! dialect-neutral `ParsedLine`: a block-level prefix plus inline spans.

pub mod ast;
pub mod lexer;
pub mod prefix;

pub use ast::{LinePrefix, ParsedLine, Span};
pub use lexer::tokenize_inline;
pub use prefix::split_prefix;

use crate::dialect::Dialect;

/// Parse a single line written in `dialect`
pub fn parse_line(line: &str, dialect: Dialect) -> ParsedLine {
    let (prefix, body) = split_prefix(line, dialect);
    ParsedLine {
        prefix,
        spans: tokenize_inline(body, dialect),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_heading_with_inline_markup() {
        let result = parse_line("h2. *Release* notes", Dialect::Jira);

        assert_eq!(result.prefix, Some(LinePrefix::Heading(2)));
        assert_eq!(
            result.spans,
            vec![
                Span::Strong(vec![Span::Text("Release".to_string())]),
                Span::Text(" notes".to_string()),
            ]
        );
    }

    #[test]
    fn test_bullet_is_not_emphasis() {
        let result = parse_line("* item with *italic*", Dialect::Markdown);

        assert_eq!(result.prefix, Some(LinePrefix::Bullet));
        assert_eq!(
            result.spans,
            vec![
                Span::Text("item with ".to_string()),
                Span::Emphasis(vec![Span::Text("italic".to_string())]),
            ]
        );
    }

    #[test]
    fn test_rule_has_no_spans() {
        let result = parse_line("----", Dialect::Jira);

        assert_eq!(result.prefix, Some(LinePrefix::Rule));
        assert!(result.spans.is_empty());
    }

    #[test]
    fn test_empty_line() {
        let result = parse_line("", Dialect::Markdown);

        assert_eq!(result.prefix, None);
        assert!(result.spans.is_empty());
    }
}
