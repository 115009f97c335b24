//! Conversion Pipeline
//!
//! Whole document -> block normalizer -> lines -> fence scanner driving the
//! line rewriter -> converted lines.

use std::borrow::Cow;

use crate::block::{FenceScanner, LineRole, normalize_blocks};
use crate::config::ConvertOptions;
use crate::dialect::Direction;
use crate::emit::render_document;
use crate::parser::parse_line;
use crate::render::render_line;

/// Rewrite a single line known to be outside any code block
pub fn convert_line(line: &str, direction: Direction) -> String {
    let parsed = parse_line(line, direction.source());
    render_line(&parsed, direction.target())
}

/// Convert a whole document into output lines (without terminators)
///
/// Fence marker lines and lines inside code blocks are passed through
/// verbatim; every other line goes through the line rewriter.
pub fn convert_document(
    content: &str,
    direction: Direction,
    options: &ConvertOptions,
) -> Vec<String> {
    let content = normalize_line_endings(content);
    let normalized = normalize_blocks(&content, direction, options);

    let mut scanner = FenceScanner::new();
    let mut rewritten = 0;
    let lines: Vec<String> = normalized
        .lines()
        .map(|line| match scanner.advance(line) {
            LineRole::Text => {
                rewritten += 1;
                convert_line(line, direction)
            }
            LineRole::Fence | LineRole::Payload => line.to_string(),
        })
        .collect();

    if scanner.is_inside_block() {
        log::warn!("document ends inside a code block; trailing lines were left unconverted");
    }
    log::debug!(
        "{:?}: {} line(s), {} rewritten",
        direction,
        lines.len(),
        rewritten
    );

    lines
}

/// Convert Jira markup to Markdown with default options
pub fn jira_to_markdown(content: &str) -> String {
    let lines = convert_document(content, Direction::JiraToMarkdown, &ConvertOptions::default());
    render_document(&lines)
}

/// Convert Markdown to Jira markup with default options
pub fn markdown_to_jira(content: &str) -> String {
    let lines = convert_document(content, Direction::MarkdownToJira, &ConvertOptions::default());
    render_document(&lines)
}

fn normalize_line_endings(content: &str) -> Cow<'_, str> {
    if content.contains("\r\n") {
        Cow::Owned(content.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(content)
    }
}
