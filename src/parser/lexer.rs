//! Inline Tokenizer
//!
//! Single-pass tokenization of the inline content of one line into spans.
//! Every construct is recognised at its opening delimiter and closed at the
//! nearest valid closing delimiter, so two spans on one line stay separate.
//! Constructs never span lines.

use crate::dialect::Dialect;
use crate::parser::ast::Span;

/// Spans nested deeper than this keep their content as plain text
const MAX_NESTING: usize = 32;

/// How a delimiter may touch the surrounding word characters
#[derive(Debug, Clone, Copy, PartialEq)]
enum Flanking {
    /// Only the inner side is checked: `a**b**c` is bold
    Intraword,
    /// Opener may not follow, and closer may not precede, an alphanumeric character
    WordBoundary,
}

/// Tokenize the inline content of a line
///
/// Text that does not form a complete construct is returned as plain text,
/// delimiters included. A backslash and the character after it are always
/// plain text. Spans nest at most `MAX_NESTING` levels deep.
pub fn tokenize_inline(text: &str, dialect: Dialect) -> Vec<Span> {
    tokenize(text, dialect, 0)
}

fn tokenize(text: &str, dialect: Dialect, depth: usize) -> Vec<Span> {
    if depth >= MAX_NESTING {
        return vec![Span::Text(text.to_string())];
    }

    let mut spans = Vec::new();
    let mut plain = String::new();
    let mut pos = 0;

    while pos < text.len() {
        if let Some((span, end)) = match_span(text, pos, dialect, depth) {
            flush_text(&mut plain, &mut spans);
            spans.push(span);
            pos = end;
            continue;
        }

        let mut chars = text[pos..].chars();
        let Some(ch) = chars.next() else { break };
        plain.push(ch);
        pos += ch.len_utf8();

        if ch == '\\' {
            if let Some(escaped) = chars.next() {
                plain.push(escaped);
                pos += escaped.len_utf8();
            }
        }
    }

    flush_text(&mut plain, &mut spans);
    spans
}

fn flush_text(plain: &mut String, spans: &mut Vec<Span>) {
    if !plain.is_empty() {
        spans.push(Span::Text(std::mem::take(plain)));
    }
}

/// Try to recognise a construct opening at `pos`; returns it with its end offset
fn match_span(text: &str, pos: usize, dialect: Dialect, depth: usize) -> Option<(Span, usize)> {
    match dialect {
        Dialect::Markdown => match_markdown(text, pos, depth),
        Dialect::Jira => match_jira(text, pos, depth),
    }
}

fn match_markdown(text: &str, pos: usize, depth: usize) -> Option<(Span, usize)> {
    let inner = Inner {
        dialect: Dialect::Markdown,
        depth: depth + 1,
    };

    match text.as_bytes()[pos] {
        b'`' => code_span(text, pos, "`", "`"),
        b'[' => markdown_link(text, pos, inner),
        b'<' => markdown_autolink(text, pos),
        b'*' => markdown_emphasis(text, pos, b'*', Flanking::Intraword, inner),
        b'_' => markdown_emphasis(text, pos, b'_', Flanking::WordBoundary, inner),
        b'~' if text[pos..].starts_with("~~") => {
            delimited(text, pos, b'~', 2, Flanking::Intraword, inner)
                .map(|(children, end)| (Span::Strike(children), end))
        }
        _ => None,
    }
}

fn match_jira(text: &str, pos: usize, depth: usize) -> Option<(Span, usize)> {
    let inner = Inner {
        dialect: Dialect::Jira,
        depth: depth + 1,
    };

    let (delim, wrap): (u8, fn(Vec<Span>) -> Span) = match text.as_bytes()[pos] {
        b'{' if text[pos..].starts_with("{{") => return code_span(text, pos, "{{", "}}"),
        b'[' => return jira_link(text, pos, inner),
        b'*' => (b'*', Span::Strong),
        b'_' => (b'_', Span::Emphasis),
        b'-' => (b'-', Span::Strike),
        _ => return None,
    };

    delimited(text, pos, delim, 1, Flanking::WordBoundary, inner)
        .map(|(children, end)| (wrap(children), end))
}

/// How the content of a span is tokenized
#[derive(Debug, Clone, Copy)]
struct Inner {
    dialect: Dialect,
    depth: usize,
}

impl Inner {
    fn tokenize(self, text: &str) -> Vec<Span> {
        tokenize(text, self.dialect, self.depth)
    }
}

/// `**strong**`, `__strong__`, `*emphasis*` or `_emphasis_`
fn markdown_emphasis(
    text: &str,
    pos: usize,
    delim: u8,
    flanking: Flanking,
    inner: Inner,
) -> Option<(Span, usize)> {
    if run_length(text.as_bytes(), pos, delim) >= 2 {
        if let Some((children, end)) = delimited(text, pos, delim, 2, flanking, inner) {
            return Some((Span::Strong(children), end));
        }
    }

    delimited(text, pos, delim, 1, flanking, inner)
        .map(|(children, end)| (Span::Emphasis(children), end))
}

/// Match a span enclosed by `len` copies of `delim`, tokenizing its content
fn delimited(
    text: &str,
    pos: usize,
    delim: u8,
    len: usize,
    flanking: Flanking,
    inner: Inner,
) -> Option<(Vec<Span>, usize)> {
    if !can_open(text, pos, len, flanking) {
        return None;
    }

    let content_start = pos + len;
    // Content is at least one byte long
    let close = find_closer(text, content_start + 1, delim, len, flanking)?;
    let children = inner.tokenize(&text[content_start..close]);

    Some((children, close + len))
}

/// Find the nearest closing delimiter at or after `from`
///
/// A run of delimiter characters longer than `len` closes with its last
/// `len` characters, so `***x***` closes the inner span first. A single
/// delimiter skips over double runs, which belong to strong spans nested
/// inside it.
fn find_closer(
    text: &str,
    from: usize,
    delim: u8,
    len: usize,
    flanking: Flanking,
) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut i = from;

    while i < bytes.len() {
        if bytes[i] == b'\\' {
            i += 2;
            continue;
        }
        if bytes[i] != delim {
            i += 1;
            continue;
        }

        let run = run_length(bytes, i, delim);
        i += run;

        if run < len || (len == 1 && run == 2) {
            continue;
        }

        let close = i - len;
        if can_close(text, close, len, flanking) {
            return Some(close);
        }
    }

    None
}

fn run_length(bytes: &[u8], pos: usize, delim: u8) -> usize {
    bytes[pos..].iter().take_while(|&&b| b == delim).count()
}

fn can_open(text: &str, pos: usize, len: usize, flanking: Flanking) -> bool {
    let next = text[pos + len..].chars().next();
    if !next.is_some_and(|c| !c.is_whitespace()) {
        return false;
    }

    match flanking {
        Flanking::Intraword => true,
        Flanking::WordBoundary => !text[..pos]
            .chars()
            .next_back()
            .is_some_and(char::is_alphanumeric),
    }
}

fn can_close(text: &str, pos: usize, len: usize, flanking: Flanking) -> bool {
    let prev = text[..pos].chars().next_back();
    if !prev.is_some_and(|c| !c.is_whitespace()) {
        return false;
    }

    match flanking {
        Flanking::Intraword => true,
        Flanking::WordBoundary => !text[pos + len..]
            .chars()
            .next()
            .is_some_and(char::is_alphanumeric),
    }
}

/// Code span between `open` and `close`; contents are kept verbatim
fn code_span(text: &str, pos: usize, open: &str, close: &str) -> Option<(Span, usize)> {
    let content_start = pos + open.len();
    let length = text[content_start..].find(close)?;
    if length == 0 {
        return None;
    }

    let content_end = content_start + length;
    Some((
        Span::Code(text[content_start..content_end].to_string()),
        content_end + close.len(),
    ))
}

/// `[text](url)`
fn markdown_link(text: &str, pos: usize, inner: Inner) -> Option<(Span, usize)> {
    let text_start = pos + 1;
    let text_end = text_start + text[text_start..].find(']')?;
    let url_start = text_end + 2;
    let url_length = text[text_end + 1..].strip_prefix('(')?.find(')')?;
    if url_length == 0 {
        return None;
    }

    let url_end = url_start + url_length;
    Some((
        Span::Link {
            text: inner.tokenize(&text[text_start..text_end]),
            url: text[url_start..url_end].to_string(),
        },
        url_end + 1,
    ))
}

/// `<scheme://address>`
fn markdown_autolink(text: &str, pos: usize) -> Option<(Span, usize)> {
    let start = pos + 1;
    let end = start + text[start..].find('>')?;
    let url = &text[start..end];

    is_bare_url(url).then(|| (Span::AutoLink(url.to_string()), end + 1))
}

/// `[text|url]`, or `[url]` for a bare URL
fn jira_link(text: &str, pos: usize, inner: Inner) -> Option<(Span, usize)> {
    let start = pos + 1;
    let end = start + text[start..].find(']')?;
    let content = &text[start..end];

    let span = match content.split_once('|') {
        Some((_, "")) => return None,
        Some((label, url)) => Span::Link {
            text: inner.tokenize(label),
            url: url.to_string(),
        },
        None if is_bare_url(content) => Span::AutoLink(content.to_string()),
        None => return None,
    };

    Some((span, end + 1))
}

fn is_bare_url(text: &str) -> bool {
    text.contains("://") && !text.contains(|c: char| c.is_whitespace() || c == '<')
}
