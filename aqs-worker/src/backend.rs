//! Browser implementations of the cache engine's network and storage.

use aqs_cache::{CacheBackend, CacheError, FetchMode, Fetched, Intercepted, Network};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Cache, CacheStorage, Request, RequestInit, RequestMode, Response, ResponseType, WorkerGlobalScope};

fn describe(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

fn storage_err(value: JsValue) -> CacheError {
    CacheError::Storage(describe(value))
}

/// `web_sys::Response` wrapper so the engine can inspect and clone it.
pub struct BrowserResponse(pub Response);

impl Fetched for BrowserResponse {
    fn status(&self) -> u16 {
        self.0.status()
    }

    fn is_opaque(&self) -> bool {
        self.0.type_() == ResponseType::Opaque
    }

    fn try_clone(&self) -> Option<Self> {
        self.0.clone().ok().map(BrowserResponse)
    }
}

/// The request carried by a `fetch` event.
pub struct EventRequest(pub Request);

impl Intercepted for EventRequest {
    fn url(&self) -> String {
        self.0.url()
    }
}

pub struct WorkerNetwork {
    scope: WorkerGlobalScope,
}

impl WorkerNetwork {
    pub fn new(scope: WorkerGlobalScope) -> Self {
        Self { scope }
    }

    async fn send(&self, request: &Request) -> Result<BrowserResponse, CacheError> {
        let value = JsFuture::from(self.scope.fetch_with_request(request))
            .await
            .map_err(|e| CacheError::Network(describe(e)))?;
        let response = value
            .dyn_into::<Response>()
            .map_err(|e| CacheError::Network(describe(e)))?;
        Ok(BrowserResponse(response))
    }
}

impl Network for WorkerNetwork {
    type Response = BrowserResponse;
    type Request = EventRequest;

    async fn fetch(&self, url: &str, mode: FetchMode) -> Result<BrowserResponse, CacheError> {
        let init = RequestInit::new();
        init.set_method("GET");
        if mode == FetchMode::NoCors {
            init.set_mode(RequestMode::NoCors);
        }
        let request = Request::new_with_str_and_init(url, &init)
            .map_err(|e| CacheError::Network(describe(e)))?;
        self.send(&request).await
    }

    /// The page's own request keeps its headers, credentials and mode.
    async fn forward(
        &self,
        request: &EventRequest,
        _mode: FetchMode,
    ) -> Result<BrowserResponse, CacheError> {
        self.send(&request.0).await
    }
}

/// The worker's `caches` object.
pub struct BrowserCaches {
    storage: CacheStorage,
}

impl BrowserCaches {
    pub fn new(storage: CacheStorage) -> Self {
        Self { storage }
    }

    async fn open(&self, name: &str) -> Result<Cache, CacheError> {
        let value = JsFuture::from(self.storage.open(name))
            .await
            .map_err(storage_err)?;
        value.dyn_into::<Cache>().map_err(storage_err)
    }
}

impl CacheBackend for BrowserCaches {
    type Response = BrowserResponse;

    async fn cache_names(&self) -> Result<Vec<String>, CacheError> {
        let keys = JsFuture::from(self.storage.keys()).await.map_err(storage_err)?;
        let keys: js_sys::Array = keys.dyn_into().map_err(storage_err)?;
        Ok(keys.iter().filter_map(|k| k.as_string()).collect())
    }

    async fn delete_cache(&self, name: &str) -> Result<bool, CacheError> {
        let deleted = JsFuture::from(self.storage.delete(name))
            .await
            .map_err(storage_err)?;
        Ok(deleted.as_bool().unwrap_or(false))
    }

    async fn put(&self, cache: &str, url: &str, response: BrowserResponse) -> Result<(), CacheError> {
        let cache = self.open(cache).await?;
        JsFuture::from(cache.put_with_str(url, &response.0))
            .await
            .map_err(storage_err)?;
        Ok(())
    }

    async fn lookup(
        &self,
        cache: Option<&str>,
        url: &str,
    ) -> Result<Option<BrowserResponse>, CacheError> {
        let promise = match cache {
            Some(name) => self.open(name).await?.match_with_str(url),
            None => self.storage.match_with_str(url),
        };
        let value = JsFuture::from(promise).await.map_err(storage_err)?;
        if value.is_undefined() || value.is_null() {
            return Ok(None);
        }
        let response = value.dyn_into::<Response>().map_err(storage_err)?;
        Ok(Some(BrowserResponse(response)))
    }
}
