//! reqwest-backed network for native precaching.

use crate::{CacheError, FetchMode, Network, StoredResponse};

/// Fetches over HTTP and buffers the body.
///
/// Outside a browser there is no opaque response: cross-origin entries are
/// fetched normally and come back with their real status.
#[derive(Clone, Default)]
pub struct HttpNetwork {
    client: reqwest::Client,
}

impl HttpNetwork {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Network for HttpNetwork {
    type Response = StoredResponse;
    type Request = str;

    async fn fetch(&self, url: &str, mode: FetchMode) -> Result<StoredResponse, CacheError> {
        log::debug!("[AQS] cache: GET {} ({:?})", url, mode);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| CacheError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| CacheError::Network(e.to_string()))?;
        Ok(StoredResponse {
            status,
            opaque: false,
            body: body.to_vec(),
        })
    }
}
