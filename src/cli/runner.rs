//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, PageArgs};
use crate::config::RecordsConfig;
use crate::engine::Retriever;
use crate::error::Result;
use crate::pagination::PageNumber;
use crate::query::QueryBuilder;
use crate::records::FilterOptions;
use crate::types::OutputFormat;
use serde::Serialize;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Retrieve(args) => self.retrieve(args).await,
            Commands::Uri(args) => self.uri(args),
        }
    }

    /// Load configuration, applying command-line overrides
    fn load_config(&self) -> Result<RecordsConfig> {
        let config = match &self.cli.config {
            Some(path) => RecordsConfig::from_file(path)?,
            None => RecordsConfig::default(),
        };

        let config = match &self.cli.base_url {
            Some(url) => config.with_base_url(url),
            None => config,
        };
        config.validate()?;
        Ok(config)
    }

    async fn retrieve(&self, args: &PageArgs) -> Result<()> {
        let config = self.load_config()?;
        let retriever = Retriever::from_config(&config)?;

        let summary = retriever.retrieve(&FilterOptions::from(args)).await?;
        println!("{}", render(&summary, self.cli.format)?);
        Ok(())
    }

    fn uri(&self, args: &PageArgs) -> Result<()> {
        let config = self.load_config()?;
        let query = QueryBuilder::new(&config.base_url, &config.records_path)?;

        let options = FilterOptions::from(args);
        let page = PageNumber::resolve(options.page);
        println!("{}", query.compose_uri(&options, page));
        Ok(())
    }
}

/// Serialize a value in the requested format
pub(crate) fn render<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string(value)?,
        OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
    };
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use serde_json::json;

    #[test]
    fn test_parse_retrieve_args() {
        let cli = Cli::parse_from([
            "managed-records",
            "retrieve",
            "--page",
            "3",
            "--color",
            "red",
            "--color",
            "brown",
        ]);

        let Commands::Retrieve(args) = &cli.command else {
            panic!("Expected Retrieve");
        };
        assert_eq!(
            FilterOptions::from(args),
            FilterOptions::new().page(3).colors(["red", "brown"])
        );
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_parse_negative_page_and_globals() {
        let cli = Cli::parse_from([
            "managed-records",
            "uri",
            "--page",
            "-2",
            "--format",
            "pretty",
            "--base-url",
            "http://127.0.0.1:4000",
        ]);

        let Commands::Uri(args) = &cli.command else {
            panic!("Expected Uri");
        };
        let options = FilterOptions::from(args);
        assert_eq!(options.page, Some(-2));
        assert!(options.colors.is_none());
        assert_eq!(cli.format, OutputFormat::Pretty);
        assert_eq!(cli.base_url.as_deref(), Some("http://127.0.0.1:4000"));
    }

    #[test]
    fn test_load_config_applies_base_url_override() {
        let cli = Cli::parse_from([
            "managed-records",
            "--base-url",
            "http://records.internal:9000",
            "uri",
        ]);
        let config = Runner::new(cli).load_config().unwrap();
        assert_eq!(config.base_url, "http://records.internal:9000");
        assert_eq!(config.records_path, "/records");
    }

    #[test]
    fn test_render_formats() {
        let value = json!({"ids": [1]});
        assert_eq!(render(&value, OutputFormat::Json).unwrap(), r#"{"ids":[1]}"#);
        assert!(render(&value, OutputFormat::Pretty).unwrap().contains('\n'));
    }
}
