//! Line Renderer
//!
//! Writes a `ParsedLine` back out in a target dialect.

use crate::dialect::Dialect;
use crate::parser::{LinePrefix, ParsedLine, Span};

/// Render a parsed line in `dialect`
pub fn render_line(line: &ParsedLine, dialect: Dialect) -> String {
    let mut out = String::new();

    if let Some(prefix) = line.prefix {
        push_prefix(&mut out, prefix, dialect);
    }
    push_spans(&mut out, &line.spans, dialect);

    out
}

fn push_prefix(out: &mut String, prefix: LinePrefix, dialect: Dialect) {
    match (dialect, prefix) {
        (Dialect::Markdown, LinePrefix::Heading(level)) => {
            out.push_str(&"#".repeat(usize::from(level)));
            out.push(' ');
        }
        (Dialect::Jira, LinePrefix::Heading(level)) => {
            out.push_str(&format!("h{level}. "));
        }
        (Dialect::Markdown, LinePrefix::Task(state)) => {
            out.push_str(&format!("- [{state}]"));
        }
        (Dialect::Jira, LinePrefix::Task(state)) => {
            out.push_str(&format!("[{state}]"));
        }
        (Dialect::Markdown, LinePrefix::Quote) => out.push_str("> "),
        (Dialect::Jira, LinePrefix::Quote) => out.push_str("bq. "),
        // `---` under a paragraph would read as a setext heading underline
        (Dialect::Markdown, LinePrefix::Rule) => out.push_str("***"),
        (Dialect::Jira, LinePrefix::Rule) => out.push_str("----"),
        (Dialect::Markdown, LinePrefix::Bullet) => out.push_str("* "),
        (Dialect::Jira, LinePrefix::Bullet) => out.push_str("- "),
        (Dialect::Markdown, LinePrefix::Ordered) => out.push_str("1. "),
        (Dialect::Jira, LinePrefix::Ordered) => out.push_str("# "),
    }
}

fn push_spans(out: &mut String, spans: &[Span], dialect: Dialect) {
    for span in spans {
        push_span(out, span, dialect);
    }
}

fn push_span(out: &mut String, span: &Span, dialect: Dialect) {
    match span {
        Span::Text(text) => out.push_str(text),
        Span::Strong(children) => {
            let delim = match dialect {
                Dialect::Markdown => "**",
                Dialect::Jira => "*",
            };
            push_wrapped(out, delim, children, delim, dialect);
        }
        Span::Emphasis(children) => {
            let delim = match dialect {
                Dialect::Markdown => "*",
                Dialect::Jira => "_",
            };
            push_wrapped(out, delim, children, delim, dialect);
        }
        Span::Strike(children) => {
            let delim = match dialect {
                Dialect::Markdown => "~~",
                Dialect::Jira => "-",
            };
            push_wrapped(out, delim, children, delim, dialect);
        }
        Span::Code(code) => match dialect {
            // A backtick inside the code needs a longer fence
            Dialect::Markdown if code.contains('`') => {
                out.push_str("`` ");
                out.push_str(code);
                out.push_str(" ``");
            }
            Dialect::Markdown => {
                out.push('`');
                out.push_str(code);
                out.push('`');
            }
            Dialect::Jira => {
                out.push_str("{{");
                out.push_str(code);
                out.push_str("}}");
            }
        },
        Span::Link { text, url } => {
            out.push('[');
            push_spans(out, text, dialect);
            match dialect {
                Dialect::Markdown => {
                    out.push_str("](");
                    out.push_str(url);
                    out.push(')');
                }
                Dialect::Jira => {
                    out.push('|');
                    out.push_str(url);
                    out.push(']');
                }
            }
        }
        Span::AutoLink(url) => match dialect {
            Dialect::Markdown => {
                out.push('<');
                out.push_str(url);
                out.push('>');
            }
            Dialect::Jira => {
                out.push('[');
                out.push_str(url);
                out.push(']');
            }
        },
    }
}

fn push_wrapped(out: &mut String, open: &str, children: &[Span], close: &str, dialect: Dialect) {
    out.push_str(open);
    push_spans(out, children, dialect);
    out.push_str(close);
}
