//! Markup dialects and conversion directions.

/// One of the two markup syntaxes the converter understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Jira / Confluence wiki markup
    Jira,
    /// Markdown (CommonMark with GFM task lists and strikethrough)
    Markdown,
}

/// Which way a document is being converted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    JiraToMarkdown,
    MarkdownToJira,
}

impl Direction {
    /// Dialect the input is written in
    pub fn source(self) -> Dialect {
        match self {
            Direction::JiraToMarkdown => Dialect::Jira,
            Direction::MarkdownToJira => Dialect::Markdown,
        }
    }

    /// Dialect the output is written in
    pub fn target(self) -> Dialect {
        match self {
            Direction::JiraToMarkdown => Dialect::Markdown,
            Direction::MarkdownToJira => Dialect::Jira,
        }
    }

    /// The opposite direction
    pub fn reverse(self) -> Self {
        match self {
            Direction::JiraToMarkdown => Direction::MarkdownToJira,
            Direction::MarkdownToJira => Direction::JiraToMarkdown,
        }
    }

    /// Name of the executable that performs this conversion
    pub fn bin_name(self) -> &'static str {
        match self {
            Direction::JiraToMarkdown => "jira2md",
            Direction::MarkdownToJira => "md2jira",
        }
    }
}
