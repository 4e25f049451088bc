use book_etl::utils::logger;
use book_etl::{run_books_etl, CliConfig, TomlConfig};
use clap::Parser;

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting book-etl");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let result = match config.config.clone() {
        Some(path) => {
            tracing::info!("Loading configuration from {}", path);
            match TomlConfig::from_file(&path) {
                Ok(toml_config) => run_books_etl(toml_config).await,
                Err(e) => Err(e),
            }
        }
        None => run_books_etl(config).await,
    };

    match result {
        Ok(report) => {
            println!(
                "Successfully converted and saved {} books to {}",
                report.books_written, report.output_path
            );
        }
        Err(e) => {
            tracing::error!(
                "Run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );

            eprintln!("Error: {}", e.user_friendly_message());
            eprintln!("Suggestion: {}", e.recovery_suggestion());

            std::process::exit(e.severity().exit_code());
        }
    }
}
