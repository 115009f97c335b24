//! Block Normalizer
//!
//! Rewrites the boundaries of multi-line code blocks from the source dialect
//! to the target dialect across the whole document, before any line is
//! rewritten. Payload text between the boundaries is kept byte for byte; the
//! only changes are the fence lines themselves and line breaks inserted so
//! that every fence sits on its own line.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::block::scanner::{FenceScanner, LineRole};
use crate::config::ConvertOptions;
use crate::dialect::Direction;

/// `{code}` or `{code:lang}`, a newline, then the payload up to the nearest `{code}`
static JIRA_CODE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\{code(?::([\w+#.-]+))?\}\n(.*?)\{code\}")
        .expect("code block pattern is valid")
});

/// A fence line with an optional info string, payload lines (possibly none),
/// and a bare closing fence line. Only the first word of the info string is
/// kept as the language tag.
static MARKDOWN_FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?ms)^```([\w+#.-]+)?[^\n`]*\n(?:(.*?)\n)??```[ \t]*$")
        .expect("fence pattern is valid")
});

/// Rewrite all code block boundaries in `content` for `direction`
pub fn normalize_blocks(content: &str, direction: Direction, options: &ConvertOptions) -> String {
    match direction {
        Direction::JiraToMarkdown => {
            let (out, count) = jira_code_to_fences(content);
            log::debug!("converted {count} {{code}} block(s) to fences");
            out
        }
        Direction::MarkdownToJira => {
            let (fenced, count) = fences_to_jira_code(content);
            log::debug!("converted {count} fenced block(s) to {{code}}");

            if !options.indented_code {
                return fenced;
            }

            let (out, count) = indented_to_jira_code(&fenced);
            log::debug!("converted {count} indented block(s) to {{code}}");
            out
        }
    }
}

/// `{code:lang}` blocks to ```` ```lang ```` fences
pub fn jira_code_to_fences(content: &str) -> (String, usize) {
    let mut out = String::with_capacity(content.len());
    let mut last = 0;
    let mut count = 0;

    for caps in JIRA_CODE_BLOCK.captures_iter(content) {
        let Some(whole) = caps.get(0) else { continue };
        out.push_str(&content[last..whole.start()]);

        // Fences must start a line for the scanner to see them
        if !out.is_empty() && !out.ends_with('\n') {
            out.push('\n');
        }

        out.push_str("```");
        if let Some(lang) = caps.get(1) {
            out.push_str(lang.as_str());
        }
        out.push('\n');

        let payload = caps.get(2).map_or("", |m| m.as_str());
        out.push_str(payload);
        if !payload.is_empty() && !payload.ends_with('\n') {
            out.push('\n');
        }
        out.push_str("```");

        let rest = &content[whole.end()..];
        if !rest.is_empty() && !rest.starts_with('\n') {
            out.push('\n');
        }

        last = whole.end();
        count += 1;
    }

    out.push_str(&content[last..]);
    (out, count)
}

/// ```` ```lang ```` fences to `{code:lang}` blocks
pub fn fences_to_jira_code(content: &str) -> (String, usize) {
    let mut count = 0;
    let out = MARKDOWN_FENCE.replace_all(content, |caps: &Captures| {
        count += 1;

        let open = match caps.get(1) {
            Some(lang) => format!("{{code:{}}}", lang.as_str()),
            None => "{code}".to_string(),
        };
        match caps.get(2) {
            Some(payload) => format!("{open}\n{}\n{{code}}", payload.as_str()),
            None => format!("{open}\n{{code}}"),
        }
    });

    (out.into_owned(), count)
}

/// Indented code blocks to `{code}` blocks
///
/// A block is a run of lines indented by four spaces or a tab, outside any
/// fenced block, starting at the top of the document or after a blank line.
/// One level of indentation is stripped from every line of the run.
pub fn indented_to_jira_code(content: &str) -> (String, usize) {
    let mut out = String::with_capacity(content.len());
    let mut scanner = FenceScanner::new();
    let mut run: Vec<&str> = Vec::new();
    let mut after_blank = true;
    let mut count = 0;

    for line in content.lines() {
        let role = scanner.advance(line);

        if role == LineRole::Text {
            let starts_run = after_blank && !line.trim().is_empty();
            if !run.is_empty() || starts_run {
                if let Some(stripped) = strip_indent(line) {
                    run.push(stripped);
                    continue;
                }
            }
        }

        if flush_indented(&mut out, &mut run) {
            count += 1;
        }
        out.push_str(line);
        out.push('\n');
        after_blank = line.trim().is_empty();
    }

    if flush_indented(&mut out, &mut run) {
        count += 1;
    }
    if !content.ends_with('\n') && out.ends_with('\n') {
        out.pop();
    }

    (out, count)
}

fn strip_indent(line: &str) -> Option<&str> {
    line.strip_prefix("    ").or_else(|| line.strip_prefix('\t'))
}

fn flush_indented(out: &mut String, run: &mut Vec<&str>) -> bool {
    if run.is_empty() {
        return false;
    }

    out.push_str("{code}\n");
    for line in run.drain(..) {
        out.push_str(line);
        out.push('\n');
    }
    out.push_str("{code}\n");
    true
}
