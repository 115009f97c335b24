//! Line Syntax Types
//!
//! Minimal, dialect-neutral representation of one line of markup.
//! No rendering logic here - pure data representation.

/// A parsed line: an optional block-level prefix followed by inline spans
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedLine {
    /// Line-leading construct (header, list bullet, ...)
    pub prefix: Option<LinePrefix>,
    /// Inline content after the prefix
    pub spans: Vec<Span>,
}

/// Block-level construct recognised at the start of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinePrefix {
    /// Header with level 1 (most prominent) to 6
    Heading(u8),
    /// Block quote line
    Quote,
    /// Horizontal rule; the whole line is the rule
    Rule,
    /// Task list checkbox, holding the state character (' ', 'x' or 'X')
    Task(char),
    /// Unordered list item
    Bullet,
    /// Ordered list item
    Ordered,
}

/// A run of inline content carrying one formatting role
#[derive(Debug, Clone, PartialEq)]
pub enum Span {
    /// Plain text, emitted verbatim
    Text(String),
    /// Bold
    Strong(Vec<Span>),
    /// Italic
    Emphasis(Vec<Span>),
    /// Inline code; contents are never re-tokenized
    Code(String),
    /// Strikethrough
    Strike(Vec<Span>),
    /// Link with (possibly empty) text
    Link { text: Vec<Span>, url: String },
    /// Bare URL link
    AutoLink(String),
}
