//! Markdown -> Jira conversion, line by line and for whole documents
use jira_md::{ConvertOptions, Direction, convert_document, convert_line, markdown_to_jira};

fn line(input: &str) -> String {
    convert_line(input, Direction::MarkdownToJira)
}

#[test]
fn test_headers() {
    assert_eq!(line("# Header"), "h1. Header");
    assert_eq!(line("## Header"), "h2. Header");
    assert_eq!(line("### Header"), "h3. Header");
    assert_eq!(line("#### Header"), "h4. Header");
    assert_eq!(line("##### Header"), "h5. Header");
    assert_eq!(line("###### Header"), "h6. Header");
}

#[test]
fn test_inline_markup() {
    assert_eq!(line("**bold**"), "*bold*");
    assert_eq!(line("__bold__"), "*bold*");
    assert_eq!(line("*italic*"), "_italic_");
    assert_eq!(line("_italic_"), "_italic_");
    assert_eq!(line("`code`"), "{{code}}");
    assert_eq!(line("~~strikethrough~~"), "-strikethrough-");
    assert_eq!(
        line("[link](http://example.com)"),
        "[link|http://example.com]"
    );
}

#[test]
fn test_bold_is_not_reconverted_to_italic() {
    assert_eq!(line("a **bold** and *italic* word"), "a *bold* and _italic_ word");
    assert_eq!(line("***both***"), "*_both_*");
}

#[test]
fn test_lists_and_tasks() {
    assert_eq!(line("* item"), "- item");
    assert_eq!(line("+ item"), "- item");
    assert_eq!(line("- [x] task"), "[x] task");
    assert_eq!(line("- [ ] task"), "[ ] task");
    assert_eq!(line("- [X] task"), "[X] task");
    assert_eq!(line("* [x] task"), "[x] task");
    assert_eq!(line("3. third"), "# third");
}

#[test]
fn test_quotes_and_rules() {
    assert_eq!(line("> **Note** this"), "bq. *Note* this");
    assert_eq!(line("---"), "----");
    assert_eq!(line("___"), "----");
    assert_eq!(line("***"), "----");
}

#[test]
fn test_code_span_contents_verbatim() {
    assert_eq!(line("run `a **b** c`"), "run {{a **b** c}}");
}

#[test]
fn test_autolink() {
    assert_eq!(line("see <https://example.com>"), "see [https://example.com]");
}

#[test]
fn test_fenced_block() {
    assert_eq!(
        markdown_to_jira("```python\nprint(\"Hello World!\")\n```"),
        "{code:python}\nprint(\"Hello World!\")\n{code}\n"
    );
}

#[test]
fn test_comments_in_fenced_block_untouched() {
    let input = "```python\n# comment\ndef f(**kwargs):\n    return `x`\n```\n# Title\n";
    assert_eq!(
        markdown_to_jira(input),
        "{code:python}\n# comment\ndef f(**kwargs):\n    return `x`\n{code}\nh1. Title\n"
    );
}

#[test]
fn test_indented_block() {
    let input = "Run this:\n\n    # update\n    apt-get update\n\nDone\n";
    assert_eq!(
        markdown_to_jira(input),
        "Run this:\n\n{code}\n# update\napt-get update\n{code}\n\nDone\n"
    );
}

#[test]
fn test_indented_block_disabled() {
    let options = ConvertOptions {
        indented_code: false,
    };
    let lines = convert_document("intro\n\n    # update\n", Direction::MarkdownToJira, &options);
    assert_eq!(lines, vec!["intro", "", "    # update"]);
}

#[test]
fn test_empty_fenced_block() {
    assert_eq!(markdown_to_jira("```\n```\n"), "{code}\n{code}\n");
}

#[test]
fn test_fence_info_string_after_language() {
    let input = "```rust ignore\na # x\n```\ntext\n```\nb\n```\n";
    assert_eq!(
        markdown_to_jira(input),
        "{code:rust}\na # x\n{code}\ntext\n{code}\nb\n{code}\n"
    );

    let input = "```python title=\"x.py\"\nprint(1)\n```\n";
    assert_eq!(
        markdown_to_jira(input),
        "{code:python}\nprint(1)\n{code}\n"
    );
}

#[test]
fn test_link_labelled_like_checkbox_is_not_a_task() {
    assert_eq!(line("- [x](http://a)"), "- [x|http://a]");
    assert_eq!(line("- [x] (see notes)"), "[x] (see notes)");
    assert_eq!(line("- [x]"), "[x]");
}

#[test]
fn test_long_delimiter_run_does_not_crash() {
    let input = format!("{}x", "*".repeat(200_000));
    let output = line(&input);

    assert!(output.ends_with("*x"));
    assert!(output.len() < input.len());
}

#[test]
fn test_full_document() {
    let input = "# Test Markdown Syntax Formatting\n\
                 \n\
                 ## Header\n\
                 \n\
                 * item\n\
                 \n\
                 - [x] task\n\
                 \n\
                 ```python\n\
                 print('Hello, World!')\n\
                 ```\n";

    let expected = "h1. Test Markdown Syntax Formatting\n\nh2. Header\n\n- item\n\n[x] task\n\n{code:python}\nprint('Hello, World!')\n{code}\n";

    assert_eq!(markdown_to_jira(input), expected);
}
