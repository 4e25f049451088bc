use crate::core::csv_source::parse_records;
use crate::core::transform::BookTransformer;
use crate::core::{ConfigProvider, Pipeline, Record, Storage, TransformResult};
use crate::utils::error::{EtlError, Result};
use reqwest::Client;
use std::path::Path;

/// Downloads the book CSV, normalizes every row and writes the books as one JSON array.
pub struct BookPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: Client,
}

impl<S: Storage, C: ConfigProvider> BookPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            client: Client::new(),
        }
    }

    async fn fetch_csv(&self) -> Result<Vec<u8>> {
        let url = self.config.source_url();
        tracing::debug!("Making API request to: {}", url);

        let mut request = self.client.get(url);
        if let Some(timeout) = self.config.request_timeout() {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        tracing::debug!("API response status: {}", response.status());

        if !response.status().is_success() {
            return Err(EtlError::HttpStatusError {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        // Raw bytes so invalid UTF-8 surfaces as a CSV error rather than U+FFFD.
        Ok(response.bytes().await?.to_vec())
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for BookPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<Record>> {
        let body = self.fetch_csv().await?;
        tracing::debug!("Downloaded {} bytes of CSV", body.len());

        parse_records(&body)
    }

    async fn transform(&self, data: Vec<Record>) -> Result<TransformResult> {
        let transformer = BookTransformer::new(self.config.strict());
        let mut result = TransformResult {
            books: Vec::with_capacity(data.len()),
            defaulted_values: 0,
        };

        for (index, record) in data.iter().enumerate() {
            let (book, defaulted) = transformer.transform(index + 1, record)?;
            result.defaulted_values += defaulted;
            result.books.push(book);
        }

        if result.defaulted_values > 0 {
            tracing::warn!(
                "{} unparseable numeric values were replaced by defaults",
                result.defaulted_values
            );
        }

        Ok(result)
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        let file_name = self.config.output_file();
        let output_path = Path::new(self.config.output_path()).join(file_name);

        // Serialize everything before touching the file so a failure leaves it untouched.
        let json_data = serde_json::to_vec_pretty(&result.books)?;

        tracing::debug!(
            "Writing {} books ({} bytes) to storage",
            result.books.len(),
            json_data.len()
        );
        self.storage.write_file(file_name, &json_data).await?;

        Ok(output_path.display().to_string())
    }
}
