//! Line Prefix Rules
//!
//! Regex-driven recognition of the block-level construct that starts a line.
//! Rules are tried in a fixed order and the first match wins.

use std::sync::LazyLock;

use regex::Regex;

use crate::dialect::Dialect;
use crate::parser::ast::LinePrefix;

/// A compiled rule: the regex captures the construct and the remaining body
struct PrefixRule {
    pattern: Regex,
    kind: RuleKind,
}

#[derive(Clone, Copy)]
enum RuleKind {
    /// Group 1 holds the header level, group 2 the body
    Heading,
    /// Group 1 holds the checkbox state, group 2 the body
    Task,
    /// Group 1 holds the body
    Fixed(LinePrefix),
    /// The whole line is the construct
    WholeLine(LinePrefix),
}

fn rule(pattern: &str, kind: RuleKind) -> PrefixRule {
    PrefixRule {
        pattern: Regex::new(pattern).expect("prefix rule pattern is valid"),
        kind,
    }
}

static JIRA_RULES: LazyLock<Vec<PrefixRule>> = LazyLock::new(|| {
    vec![
        rule(r"^h([1-6])\.\s*(\S.*)$", RuleKind::Heading),
        rule(r"^-{4,}\s*$", RuleKind::WholeLine(LinePrefix::Rule)),
        rule(r"^bq\.\s*(.*)$", RuleKind::Fixed(LinePrefix::Quote)),
        rule(r"^\s*(?:[-*]\s*)?\[([xX ])\](.*)$", RuleKind::Task),
        rule(r"^[-*]\s+(.*)$", RuleKind::Fixed(LinePrefix::Bullet)),
        rule(r"^#\s+(.*)$", RuleKind::Fixed(LinePrefix::Ordered)),
    ]
});

static MARKDOWN_RULES: LazyLock<Vec<PrefixRule>> = LazyLock::new(|| {
    vec![
        rule(r"^(#{1,6})\s+(\S.*)$", RuleKind::Heading),
        rule(
            r"^(?:-{3,}|\*{3,}|_{3,})\s*$",
            RuleKind::WholeLine(LinePrefix::Rule),
        ),
        rule(r"^>\s?(.*)$", RuleKind::Fixed(LinePrefix::Quote)),
        // `- [x](url)` is a link, not a checkbox
        rule(r"^\s*[-*+]\s*\[([xX ])\]((?:[^(].*)?)$", RuleKind::Task),
        rule(r"^[-*+]\s+(.*)$", RuleKind::Fixed(LinePrefix::Bullet)),
        rule(r"^\d{1,9}[.)]\s+(.*)$", RuleKind::Fixed(LinePrefix::Ordered)),
    ]
});

/// Split a line into its block-level prefix and the inline body after it
pub fn split_prefix(line: &str, dialect: Dialect) -> (Option<LinePrefix>, &str) {
    let rules = match dialect {
        Dialect::Jira => &*JIRA_RULES,
        Dialect::Markdown => &*MARKDOWN_RULES,
    };

    for rule in rules {
        let Some(caps) = rule.pattern.captures(line) else {
            continue;
        };
        let group = |i: usize| caps.get(i).map_or("", |m| m.as_str());

        let (prefix, body) = match rule.kind {
            RuleKind::Heading => {
                let marker = group(1);
                let level = match dialect {
                    // "h3" carries the digit, "###" the count
                    Dialect::Jira => marker.parse().unwrap_or(1),
                    Dialect::Markdown => marker.len() as u8,
                };
                (LinePrefix::Heading(level), group(2))
            }
            RuleKind::Task => {
                let state = group(1).chars().next().unwrap_or(' ');
                (LinePrefix::Task(state), group(2))
            }
            RuleKind::Fixed(prefix) => (prefix, group(1)),
            RuleKind::WholeLine(prefix) => (prefix, ""),
        };

        return (Some(prefix), body);
    }

    (None, line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jira_headings() {
        for level in 1..=6u8 {
            let line = format!("h{level}. Title");
            assert_eq!(
                split_prefix(&line, Dialect::Jira),
                (Some(LinePrefix::Heading(level)), "Title")
            );
        }
    }

    #[test]
    fn test_markdown_headings_use_longest_run() {
        assert_eq!(
            split_prefix("###### Deep", Dialect::Markdown),
            (Some(LinePrefix::Heading(6)), "Deep")
        );
        assert_eq!(
            split_prefix("## Two", Dialect::Markdown),
            (Some(LinePrefix::Heading(2)), "Two")
        );
        assert_eq!(
            split_prefix("####### Seven", Dialect::Markdown),
            (None, "####### Seven")
        );
    }

    #[test]
    fn test_heading_requires_text() {
        assert_eq!(split_prefix("h1.", Dialect::Jira), (None, "h1."));
        assert_eq!(split_prefix("#  ", Dialect::Markdown), (None, "#  "));
    }

    #[test]
    fn test_tasks_keep_checkbox_case() {
        assert_eq!(
            split_prefix(" [X] task", Dialect::Jira),
            (Some(LinePrefix::Task('X')), " task")
        );
        assert_eq!(
            split_prefix("- [ ] task", Dialect::Markdown),
            (Some(LinePrefix::Task(' ')), " task")
        );
        assert_eq!(
            split_prefix("* [x] task", Dialect::Markdown),
            (Some(LinePrefix::Task('x')), " task")
        );
    }

    #[test]
    fn test_link_after_bullet_is_not_a_task() {
        assert_eq!(
            split_prefix("- [x](http://a)", Dialect::Markdown),
            (Some(LinePrefix::Bullet), "[x](http://a)")
        );
        assert_eq!(
            split_prefix("- [ ]", Dialect::Markdown),
            (Some(LinePrefix::Task(' ')), "")
        );
    }

    #[test]
    fn test_bullets() {
        assert_eq!(
            split_prefix("- item", Dialect::Jira),
            (Some(LinePrefix::Bullet), "item")
        );
        assert_eq!(
            split_prefix("*   item", Dialect::Markdown),
            (Some(LinePrefix::Bullet), "item")
        );
        assert_eq!(split_prefix("*bold*", Dialect::Jira), (None, "*bold*"));
        assert_eq!(split_prefix("-strike-", Dialect::Jira), (None, "-strike-"));
    }

    #[test]
    fn test_rules_and_quotes() {
        assert_eq!(
            split_prefix("----", Dialect::Jira),
            (Some(LinePrefix::Rule), "")
        );
        assert_eq!(
            split_prefix("***", Dialect::Markdown),
            (Some(LinePrefix::Rule), "")
        );
        assert_eq!(
            split_prefix("bq. quoted", Dialect::Jira),
            (Some(LinePrefix::Quote), "quoted")
        );
        assert_eq!(
            split_prefix("> quoted", Dialect::Markdown),
            (Some(LinePrefix::Quote), "quoted")
        );
    }

    #[test]
    fn test_ordered_items() {
        assert_eq!(
            split_prefix("# first", Dialect::Jira),
            (Some(LinePrefix::Ordered), "first")
        );
        assert_eq!(
            split_prefix("12. twelfth", Dialect::Markdown),
            (Some(LinePrefix::Ordered), "twelfth")
        );
    }

    #[test]
    fn test_plain_line_has_no_prefix() {
        assert_eq!(
            split_prefix("just text", Dialect::Markdown),
            (None, "just text")
        );
    }
}
