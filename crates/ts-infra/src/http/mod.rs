//! HTTP adapters built on a shared `reqwest` client.

mod api_client;
mod error;
mod image_storage;
mod postal_code;

use std::time::Duration;

pub use api_client::HttpApiClient;
pub use image_storage::HttpImageStorage;
pub use postal_code::ViaCepClient;

/// Builds the `reqwest` client shared by all HTTP adapters.
pub fn build_http_client(timeout: Duration) -> anyhow::Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {e}"))?;
    Ok(client)
}

/// Joins a base URL and a path without doubling or dropping the `/`.
pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
