//! In-process cache storage for native use and tests.

use crate::{CacheBackend, CacheError, Fetched};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// A fully buffered response.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredResponse {
    pub status: u16,
    pub opaque: bool,
    pub body: Vec<u8>,
}

impl StoredResponse {
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: 200,
            opaque: false,
            body: body.into(),
        }
    }

    pub fn opaque() -> Self {
        Self {
            status: 0,
            opaque: true,
            body: Vec::new(),
        }
    }

    pub fn with_status(status: u16) -> Self {
        Self {
            status,
            opaque: false,
            body: Vec::new(),
        }
    }
}

impl Fetched for StoredResponse {
    fn status(&self) -> u16 {
        self.status
    }

    fn is_opaque(&self) -> bool {
        self.opaque
    }

    fn try_clone(&self) -> Option<Self> {
        Some(self.clone())
    }
}

type Caches = BTreeMap<String, BTreeMap<String, StoredResponse>>;

/// Named caches in memory. Clones share the same caches.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    caches: Rc<RefCell<Caches>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries in `cache`, 0 when it does not exist.
    pub fn entry_count(&self, cache: &str) -> usize {
        self.caches.borrow().get(cache).map_or(0, |c| c.len())
    }

    /// Create an empty cache, as an older worker version would have.
    pub fn open(&self, cache: &str) {
        self.caches.borrow_mut().entry(cache.to_string()).or_default();
    }
}

impl CacheBackend for MemoryStorage {
    type Response = StoredResponse;

    async fn cache_names(&self) -> Result<Vec<String>, CacheError> {
        Ok(self.caches.borrow().keys().cloned().collect())
    }

    async fn delete_cache(&self, name: &str) -> Result<bool, CacheError> {
        Ok(self.caches.borrow_mut().remove(name).is_some())
    }

    async fn put(&self, cache: &str, url: &str, response: StoredResponse) -> Result<(), CacheError> {
        self.caches
            .borrow_mut()
            .entry(cache.to_string())
            .or_default()
            .insert(url.to_string(), response);
        Ok(())
    }

    async fn lookup(
        &self,
        cache: Option<&str>,
        url: &str,
    ) -> Result<Option<StoredResponse>, CacheError> {
        let caches = self.caches.borrow();
        let found = match cache {
            Some(name) => caches.get(name).and_then(|c| c.get(url)),
            None => caches.values().find_map(|c| c.get(url)),
        };
        Ok(found.cloned())
    }
}
