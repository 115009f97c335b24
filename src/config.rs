//! Configuration management for the converters.
//!
//! Handles:
//! - Command-line argument parsing
//! - Optional TOML configuration file (project-local or per-user)
//! - Merging both into the effective settings

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;

/// File name looked up in the current directory
pub const PROJECT_CONFIG_FILE: &str = ".jira-md.toml";

/// Command-line arguments shared by both converters
#[derive(Debug, Parser)]
#[command(version)]
#[command(about = "Convert between Jira wiki markup and Markdown")]
pub struct Args {
    /// File to convert; the result is written to stdout
    pub input: Option<PathBuf>,

    /// Explicit configuration file
    #[arg(long, help = "Configuration file (default: ./.jira-md.toml)")]
    pub config: Option<PathBuf>,

    /// Leave indented Markdown code blocks as plain text
    #[arg(long, help = "Do not treat 4-space indented Markdown blocks as code")]
    pub no_indented_code: bool,

    /// Log level
    #[arg(long, help = "Log level (trace, debug, info, warn, error)")]
    pub log_level: Option<String>,
}

/// Options that change how a document is converted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Convert indented Markdown code blocks to `{code}` blocks
    pub indented_code: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            indented_code: true,
        }
    }
}

/// Contents of a configuration file; every key is optional
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub log_level: Option<String>,
    pub convert: ConvertSection,
}

/// `[convert]` table
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConvertSection {
    pub indented_code: Option<bool>,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// File to convert, if one was given
    pub input: Option<PathBuf>,
    /// Conversion options
    pub options: ConvertOptions,
    /// Log level filter
    pub log_level: String,
    /// Configuration file that was loaded, if any
    pub config_path: Option<PathBuf>,
}

impl Config {
    /// Create configuration from the process command line
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        let (file, config_path) = match args.config {
            // An explicitly named file must exist
            Some(path) => (load_config_file(&path)?, Some(path)),
            None => match discover_config_file() {
                Some(path) => (load_config_file(&path)?, Some(path)),
                None => (ConfigFile::default(), None),
            },
        };

        let mut options = ConvertOptions::default();
        if let Some(indented_code) = file.convert.indented_code {
            options.indented_code = indented_code;
        }
        if args.no_indented_code {
            options.indented_code = false;
        }

        let log_level = args
            .log_level
            .or(file.log_level)
            .unwrap_or_else(|| "warn".to_string());

        Ok(Config {
            input: args.input,
            options,
            log_level,
            config_path,
        })
    }
}

/// Parse a configuration file
pub fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Look for a project config, then a per-user config
fn discover_config_file() -> Option<PathBuf> {
    let project = PathBuf::from(PROJECT_CONFIG_FILE);
    if project.is_file() {
        return Some(project);
    }

    // ~/.config/jira-md/config.toml
    let user = dirs::config_dir()?.join("jira-md").join("config.toml");
    user.is_file().then_some(user)
}
