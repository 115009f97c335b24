//! Shared driver for the `jira2md` and `md2jira` executables.

use std::fs;
use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};

use crate::config::Config;
use crate::convert::convert_document;
use crate::dialect::Direction;
use crate::emit::emit_lines;

/// Parse the command line, convert the input file and print the result
pub fn run(direction: Direction) -> Result<ExitCode> {
    let config = Config::from_args_and_env()?;
    init_logging(&config.log_level);

    let Some(input) = config.input.as_deref() else {
        print!("{}", usage(direction));
        return Ok(ExitCode::FAILURE);
    };

    if let Some(path) = &config.config_path {
        log::debug!("loaded config from {}", path.display());
    }
    log::info!("converting {} ({:?})", input.display(), direction);

    // Read everything before writing anything
    let content = fs::read_to_string(input)
        .with_context(|| format!("Failed to read input file: {}", input.display()))?;
    let lines = convert_document(&content, direction, &config.options);

    let stdout = io::stdout();
    emit_lines(&mut stdout.lock(), &lines).context("Failed to write output")?;

    Ok(ExitCode::SUCCESS)
}

/// Usage text printed when no input file is given
pub fn usage(direction: Direction) -> String {
    let bin = direction.bin_name();
    let (input, output, sample_in, sample_out) = match direction {
        Direction::JiraToMarkdown => ("<jira_file>", "<markdown_file>", "README.jira", "README.md"),
        Direction::MarkdownToJira => ("<markdown_file>", "<jira_file>", "README.md", "README.jira"),
    };

    format!(
        "Usage:\n\
         {bin} {input}\n\
         {bin} {input} > {output}\n\
         {bin} {input} | pbcopy\n\
         \n\
         Examples:\n\
         {bin} {sample_in}\n\
         {bin} {sample_in} > {sample_out}\n\
         {bin} {sample_in} | pbcopy\n"
    )
}

/// `RUST_LOG` wins over the configured level
fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    if env_logger::Builder::from_env(env).try_init().is_err() {
        log::debug!("logger already initialized");
    }
}
