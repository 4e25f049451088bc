use crate::core::ConfigProvider;
use crate::domain::defaults;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "book-etl")]
#[command(about = "Downloads the book dataset and saves it as JSON for the front-end")]
pub struct CliConfig {
    #[arg(long, default_value = defaults::DEFAULT_SOURCE_URL)]
    pub source_url: String,

    #[arg(long, default_value = defaults::DEFAULT_OUTPUT_PATH)]
    pub output_path: String,

    #[arg(long, default_value = defaults::DEFAULT_OUTPUT_FILE)]
    pub output_file: String,

    #[arg(long, help = "Fail on numeric values that cannot be converted")]
    pub strict: bool,

    #[arg(long, help = "Read settings from a TOML file instead of flags")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("source_url", &self.source_url)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_file_name("output_file", &self.output_file)?;
        Ok(())
    }
}

impl ConfigProvider for CliConfig {
    fn source_url(&self) -> &str {
        &self.source_url
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_file(&self) -> &str {
        &self.output_file
    }

    fn strict(&self) -> bool {
        self.strict
    }

    fn request_timeout(&self) -> Option<Duration> {
        None
    }
}
