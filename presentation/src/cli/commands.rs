//! CLI command definitions

use clap::{Parser, ValueEnum};
use fortune_domain::OutputFormat;
use std::path::PathBuf;

/// Output format flag, mapped onto the domain [`OutputFormat`]
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    /// Formatted console card
    Text,
    /// JSON matching the web endpoint's response shape
    Json,
    /// Plain share card for pasting into chats
    Share,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Text => OutputFormat::Text,
            OutputFormatArg::Json => OutputFormat::Json,
            OutputFormatArg::Share => OutputFormat::Share,
        }
    }
}

/// CLI arguments for mahjong-fortune
#[derive(Parser, Debug)]
#[command(name = "mahjong-fortune")]
#[command(author, version, about = "Daily mahjong fortune with a lucky tile and yaku")]
#[command(long_about = r#"
mahjong-fortune prints the day's mahjong fortune: a lucky tile and lucky yaku
picked deterministically from the date, plus generated flavor text.

The generated text comes from a fallback chain of Gemini models, tried in
order until one produces usable content. A model that answers but returns
nothing usable (for example a filtered reply) falls through to the next
model the same way a connection error does.

Configuration files are loaded from (in priority order):
1. --config <path>      Explicit config file
2. ./fortune.toml       Project-level config
3. ~/.config/mahjong-fortune/config.toml   Global config

The API key is taken from the configured environment variable
(GEMINI_API_KEY by default) or from the config file.

Example:
  mahjong-fortune
  mahjong-fortune --date 2026-12-25 --output share
  mahjong-fortune -m gemini-2.5-flash -m gemini-pro --identity player-3
"#)]
pub struct Cli {
    /// Date to read the fortune for (YYYY-MM-DD, default: today)
    #[arg(short, long, value_name = "DATE")]
    pub date: Option<String>,

    /// Candidate models, highest priority first (can be repeated)
    #[arg(short, long = "model", value_name = "MODEL")]
    pub model: Vec<String>,

    /// Identity mixed into the daily seed, so each player gets their own picks
    #[arg(short, long, value_name = "NAME")]
    pub identity: Option<String>,

    /// Overall deadline for the whole fallback invocation, in seconds
    #[arg(long, value_name = "SECONDS")]
    pub deadline: Option<u64>,

    /// Output format (default: the configured format, or text)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormatArg>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the attempt progress spinner
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
