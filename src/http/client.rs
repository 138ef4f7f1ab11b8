//! HTTP transport with retry for transient failures.

use anyhow::{Context, Result};
use log::{debug, warn};
use reqwest::Client;
use url::Url;

use super::retry::{MAX_RETRIES, NonRetryableError, RETRY_DELAY_MS, check_retryable};

/// Thin wrapper over a reqwest `Client` used for every API call.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// GETs `url` and returns the body of a successful response.
    /// Non-2xx statuses are errors; transient failures are retried.
    #[tracing::instrument(skip(self))]
    pub async fn get_bytes(&self, url: &Url) -> Result<Vec<u8>> {
        debug!("GET {}...", url);

        self.with_retry("GET", || async {
            let response = self
                .client
                .get(url.clone())
                .send()
                .await
                .with_context(|| format!("Failed to send request to {}", url))?;

            let response = response.error_for_status().map_err(check_retryable)?;

            let body = response
                .bytes()
                .await
                .with_context(|| format!("Failed to read response body from {}", url))?;

            debug!("Received {} bytes from {}", body.len(), url);
            Ok(body.to_vec())
        })
        .await
    }

    async fn with_retry<F, Fut, T>(&self, operation_name: &str, operation: F) -> Result<T>
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = Result<T>>,
    {
        let mut last_error = None;

        for attempt in 1..=MAX_RETRIES {
            match operation().await {
                Ok(result) => return Ok(result),
                Err(e) => {
                    if e.downcast_ref::<NonRetryableError>().is_some() {
                        debug!("{}: non-retryable error: {}", operation_name, e);
                        return Err(e);
                    }

                    if attempt < MAX_RETRIES {
                        warn!(
                            "{}: attempt {}/{} failed ({}), retrying in {}ms...",
                            operation_name, attempt, MAX_RETRIES, e, RETRY_DELAY_MS
                        );
                        tokio::time::sleep(std::time::Duration::from_millis(RETRY_DELAY_MS)).await;
                    }
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            anyhow::anyhow!("{}: failed after {} attempts", operation_name, MAX_RETRIES)
        }))
    }
}
