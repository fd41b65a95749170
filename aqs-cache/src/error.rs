use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum CacheError {
    /// Network failed and nothing was cached for the request.
    Offline(String),
    Network(String),
    Storage(String),
    /// A response body could not be duplicated for the cache.
    Uncloneable(String),
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheError::Offline(url) => write!(f, "Offline and not cached: {}", url),
            CacheError::Network(msg) => write!(f, "Network error: {}", msg),
            CacheError::Storage(msg) => write!(f, "Cache storage error: {}", msg),
            CacheError::Uncloneable(url) => write!(f, "Response for {} could not be cloned", url),
        }
    }
}

impl std::error::Error for CacheError {}
