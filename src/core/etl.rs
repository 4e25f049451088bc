use crate::adapters::storage::LocalStorage;
use crate::core::pipeline::BookPipeline;
use crate::core::{ConfigProvider, Pipeline};
use crate::utils::error::Result;
use crate::utils::validation::Validate;

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub output_path: String,
    pub books_written: usize,
}

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<RunReport> {
        tracing::info!("Downloading dataset...");
        let raw_data = self.pipeline.extract().await?;
        tracing::info!("Extracted {} records", raw_data.len());

        tracing::info!("Converting to JSON...");
        let transformed = self.pipeline.transform(raw_data).await?;
        let books_written = transformed.books.len();
        tracing::info!("Transformed {} records", books_written);

        let output_path = self.pipeline.load(transformed).await?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(RunReport {
            output_path,
            books_written,
        })
    }
}

/// Validates `config` and runs the book pipeline against the local filesystem.
pub async fn run_books_etl<C: ConfigProvider + Validate>(config: C) -> Result<RunReport> {
    config.validate()?;

    let storage = LocalStorage::new(config.output_path());
    let pipeline = BookPipeline::new(storage, config);

    EtlEngine::new(pipeline).run().await
}
