//! Offline asset cache for the Aqua Sentinel dashboard.
//!
//! The engine is written against two small async traits so the same
//! lifecycle runs inside the browser's service worker (`aqs-worker`) and
//! natively (the CLI `precache` command and the tests):
//!
//! - [`Network`] fetches a URL, or forwards an [`Intercepted`] request
//! - [`CacheBackend`] is a set of named caches keyed by URL
//!
//! [`OfflineCache`] implements install (pre-populate the current cache from
//! the [`Manifest`]), activate (drop caches from older versions) and
//! cache-first request handling.

mod engine;
mod error;
mod manifest;
mod memory;

#[cfg(feature = "http")]
mod http;

pub use engine::{InstallReport, Origin, OfflineCache, Served};
pub use error::CacheError;
pub use manifest::{cache_name, Manifest, CACHE_PREFIX, CACHE_VERSION};
pub use memory::{MemoryStorage, StoredResponse};

#[cfg(feature = "http")]
pub use http::HttpNetwork;

/// How a request leaves the worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    SameOrigin,
    /// Cross-origin without CORS; the response comes back opaque.
    NoCors,
}

/// A response the engine can inspect and duplicate.
pub trait Fetched: Sized {
    fn status(&self) -> u16;

    /// Opaque responses (cross-origin, no-cors) report status 0.
    fn is_opaque(&self) -> bool;

    /// A second handle on the same response, one for the cache and one for
    /// the caller. `None` when the body was already consumed.
    fn try_clone(&self) -> Option<Self>;

    /// Whether this response may be written to the cache.
    fn is_cacheable(&self) -> bool {
        self.status() == 200 || self.is_opaque()
    }
}

/// A request handed to the engine by whoever intercepted it.
pub trait Intercepted {
    /// Cache key for the request.
    fn url(&self) -> String;
}

impl Intercepted for str {
    fn url(&self) -> String {
        self.to_string()
    }
}

#[allow(async_fn_in_trait)]
pub trait Network {
    type Response: Fetched;
    /// What `respond` receives; `str` when only the URL is known.
    type Request: Intercepted + ?Sized;

    async fn fetch(&self, url: &str, mode: FetchMode) -> Result<Self::Response, CacheError>;

    /// Send an intercepted request on a cache miss, headers and all.
    /// Without a richer request type this is a plain fetch of its URL.
    async fn forward(
        &self,
        request: &Self::Request,
        mode: FetchMode,
    ) -> Result<Self::Response, CacheError> {
        self.fetch(&request.url(), mode).await
    }
}

#[allow(async_fn_in_trait)]
pub trait CacheBackend {
    type Response: Fetched;

    async fn cache_names(&self) -> Result<Vec<String>, CacheError>;

    /// Returns whether a cache by that name existed.
    async fn delete_cache(&self, name: &str) -> Result<bool, CacheError>;

    async fn put(&self, cache: &str, url: &str, response: Self::Response) -> Result<(), CacheError>;

    /// Exact-URL match in `cache`, or in any cache when `cache` is `None`.
    async fn lookup(
        &self,
        cache: Option<&str>,
        url: &str,
    ) -> Result<Option<Self::Response>, CacheError>;
}
