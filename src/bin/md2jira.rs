use std::process::ExitCode;

use anyhow::Result;
use jira_md::cli;
use jira_md::dialect::Direction;

fn main() -> Result<ExitCode> {
    cli::run(Direction::MarkdownToJira)
}
