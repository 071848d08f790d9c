//! Upstream source retrieval.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::Client;
use tracing::debug;

use crate::config::FetchConfig;
use crate::error::GenerateError;

/// Build the HTTP client used for the fetch.
pub fn build_client(config: &FetchConfig) -> Result<Client, GenerateError> {
    let client = Client::builder()
        .timeout(config.timeout)
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(client)
}

/// GET `url` and decode its base64 body into the raw file bytes.
///
/// Non-success statuses are reported as fetch errors rather than being
/// handed to the decoder.
pub async fn fetch_source(client: &Client, url: &str) -> Result<Vec<u8>, GenerateError> {
    let response = client.get(url).send().await?.error_for_status()?;
    let body = response.bytes().await?;
    debug!("Received {} bytes of base64", body.len());

    decode_base64(&body)
}

/// Decode a base64 body. Gitiles wraps long bodies across lines, so ASCII
/// whitespace is dropped first.
pub fn decode_base64(body: &[u8]) -> Result<Vec<u8>, GenerateError> {
    let compact: Vec<u8> = body
        .iter()
        .copied()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    Ok(STANDARD.decode(compact)?)
}
