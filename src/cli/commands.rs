//! CLI commands and argument parsing

use crate::records::FilterOptions;
use crate::types::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Summarise pages of a remote records listing
#[derive(Parser, Debug)]
#[command(name = "managed-records")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch a page and print its summary
    Retrieve(PageArgs),

    /// Print the query URI for a page
    Uri(PageArgs),
}

/// Page selection shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct PageArgs {
    /// Page to fetch (1-based; non-positive values mean page 1)
    #[arg(short, long, allow_negative_numbers = true)]
    pub page: Option<i64>,

    /// Color to filter by (repeatable)
    #[arg(long = "color", value_name = "COLOR")]
    pub colors: Vec<String>,
}

impl From<&PageArgs> for FilterOptions {
    fn from(args: &PageArgs) -> Self {
        Self {
            page: args.page,
            colors: (!args.colors.is_empty()).then(|| args.colors.clone()),
        }
    }
}
