//! Jira / Markdown converter
//!
//! Line-oriented translation between Jira wiki markup and Markdown.
//!
//! This library provides:
//! - Code block normalization across the whole document
//! - A fence scanner that keeps code block contents untouched
//! - Per-line rewriting of headers, lists, emphasis, code, strikethrough and links
//! - Configuration and the shared driver for the `jira2md` / `md2jira` binaries

pub mod block;
pub mod cli;
pub mod config;
pub mod convert;
pub mod dialect;
pub mod emit;
pub mod parser;
pub mod render;

// Re-exports for clean public API
pub use config::{Config, ConvertOptions};
pub use convert::{convert_document, convert_line, jira_to_markdown, markdown_to_jira};
pub use dialect::{Dialect, Direction};
pub use parser::{ParsedLine, parse_line};
