//! Install / activate / cache-first fetch lifecycle.

use crate::manifest::{cache_name, Manifest, CACHE_VERSION};
use crate::{CacheBackend, CacheError, Fetched, Intercepted, Network};

/// Outcome of pre-populating the cache. Individual failures do not abort
/// the install.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InstallReport {
    pub cached: Vec<String>,
    /// (url, reason)
    pub failed: Vec<(String, String)>,
}

impl InstallReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Where a response came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Hit in the current cache.
    Cache,
    /// Fetched from the network (and cached when cacheable).
    Network,
    /// Network failed; matched in some cache.
    Fallback,
}

#[derive(Debug)]
pub struct Served<R> {
    pub response: R,
    pub origin: Origin,
}

pub struct OfflineCache<N, S> {
    network: N,
    storage: S,
    manifest: Manifest,
    origin: String,
    version: String,
}

impl<N, S> OfflineCache<N, S>
where
    N: Network,
    S: CacheBackend<Response = N::Response>,
{
    /// `origin` is the scheme and host that same-origin manifest paths
    /// resolve against.
    pub fn new(network: N, storage: S, manifest: Manifest, origin: &str) -> Self {
        Self {
            network,
            storage,
            manifest,
            origin: origin.trim_end_matches('/').to_string(),
            version: CACHE_VERSION.to_string(),
        }
    }

    pub fn with_version(mut self, version: &str) -> Self {
        self.version = version.to_string();
        self
    }

    pub fn current_cache(&self) -> String {
        cache_name(&self.version)
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Fetch every manifest entry into the current cache.
    pub async fn install(&self) -> InstallReport {
        let cache = self.current_cache();
        let mut report = InstallReport::default();

        for url in self.manifest.urls(&self.origin) {
            let mode = self.manifest.mode_for(&url);
            let outcome = match self.network.fetch(&url, mode).await {
                Ok(response) if response.is_cacheable() => {
                    self.storage.put(&cache, &url, response).await.map_err(|e| e.to_string())
                }
                Ok(response) => Err(format!("HTTP {}", response.status())),
                Err(e) => Err(e.to_string()),
            };
            match outcome {
                Ok(()) => report.cached.push(url),
                Err(reason) => {
                    log::warn!("[AQS] cache: precache of {} failed: {}", url, reason);
                    report.failed.push((url, reason));
                }
            }
        }

        log::info!(
            "[AQS] cache: installed {} ({} cached, {} failed)",
            cache,
            report.cached.len(),
            report.failed.len()
        );
        report
    }

    /// Delete every cache except the current one. Returns their names.
    pub async fn activate(&self) -> Result<Vec<String>, CacheError> {
        let current = self.current_cache();
        let mut deleted = Vec::new();
        for name in self.storage.cache_names().await? {
            if name == current {
                continue;
            }
            if self.storage.delete_cache(&name).await? {
                log::info!("[AQS] cache: deleted stale cache {}", name);
                deleted.push(name);
            }
        }
        Ok(deleted)
    }

    /// Cache-first handling of an intercepted GET. On a miss the request
    /// itself goes to the network.
    pub async fn respond(&self, request: &N::Request) -> Result<Served<N::Response>, CacheError> {
        let key = request.url();
        let url = key.as_str();
        let cache = self.current_cache();

        match self.storage.lookup(Some(&cache), url).await {
            Ok(Some(response)) => {
                return Ok(Served {
                    response,
                    origin: Origin::Cache,
                })
            }
            Ok(None) => {}
            Err(e) => log::warn!("[AQS] cache: lookup of {} failed: {}", url, e),
        }

        match self.network.forward(request, self.manifest.mode_for(url)).await {
            Ok(response) => {
                if response.is_cacheable() {
                    match response.try_clone() {
                        Some(copy) => {
                            if let Err(e) = self.storage.put(&cache, url, copy).await {
                                log::warn!("[AQS] cache: could not store {}: {}", url, e);
                            }
                        }
                        None => log::warn!("[AQS] cache: {}", CacheError::Uncloneable(url.to_string())),
                    }
                }
                Ok(Served {
                    response,
                    origin: Origin::Network,
                })
            }
            Err(network_err) => {
                log::debug!("[AQS] cache: network failed for {}: {}", url, network_err);
                match self.storage.lookup(None, url).await {
                    Ok(Some(response)) => Ok(Served {
                        response,
                        origin: Origin::Fallback,
                    }),
                    _ => Err(CacheError::Offline(url.to_string())),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FetchMode, MemoryStorage, StoredResponse};
    use std::cell::{Cell, RefCell};
    use std::collections::BTreeMap;
    use std::rc::Rc;

    const ORIGIN: &str = "http://localhost:8080";

    #[derive(Clone, Default)]
    struct FakeNetwork {
        offline: Rc<Cell<bool>>,
        responses: Rc<RefCell<BTreeMap<String, StoredResponse>>>,
        calls: Rc<RefCell<Vec<(String, FetchMode)>>>,
    }

    impl FakeNetwork {
        fn serve(&self, url: &str, response: StoredResponse) {
            self.responses.borrow_mut().insert(url.to_string(), response);
        }

        fn go_offline(&self) {
            self.offline.set(true);
        }

        fn call_count(&self) -> usize {
            self.calls.borrow().len()
        }
    }

    impl Network for FakeNetwork {
        type Response = StoredResponse;
        type Request = str;

        async fn fetch(&self, url: &str, mode: FetchMode) -> Result<StoredResponse, CacheError> {
            self.calls.borrow_mut().push((url.to_string(), mode));
            if self.offline.get() {
                return Err(CacheError::Network("connection refused".to_string()));
            }
            Ok(self
                .responses
                .borrow()
                .get(url)
                .cloned()
                .unwrap_or_else(|| StoredResponse::with_status(404)))
        }
    }

    fn manifest() -> Manifest {
        Manifest {
            same_origin: vec!["/".into(), "/index.html".into(), "/assets/main.css".into()],
            cross_origin: vec!["https://fonts.example.com/inter.css".into()],
        }
    }

    fn online_network() -> FakeNetwork {
        let network = FakeNetwork::default();
        network.serve(&format!("{ORIGIN}/"), StoredResponse::ok("<html>"));
        network.serve(&format!("{ORIGIN}/index.html"), StoredResponse::ok("<html>"));
        network.serve(&format!("{ORIGIN}/assets/main.css"), StoredResponse::ok("body{}"));
        network.serve("https://fonts.example.com/inter.css", StoredResponse::opaque());
        network
    }

    fn engine(network: FakeNetwork, storage: MemoryStorage) -> OfflineCache<FakeNetwork, MemoryStorage> {
        OfflineCache::new(network, storage, manifest(), ORIGIN)
    }

    #[tokio::test]
    async fn install_caches_manifest_including_opaque() {
        let network = online_network();
        let storage = MemoryStorage::new();
        let cache = engine(network.clone(), storage.clone());

        let report = cache.install().await;
        assert!(report.is_complete(), "{:?}", report.failed);
        assert_eq!(report.cached.len(), 4);
        assert_eq!(storage.entry_count("aqua-sentinel-v1"), 4);

        let modes = network.calls.borrow();
        let font = modes
            .iter()
            .find(|(url, _)| url.starts_with("https://fonts"))
            .unwrap();
        assert_eq!(font.1, FetchMode::NoCors);
    }

    #[tokio::test]
    async fn install_tolerates_individual_failures() {
        let network = online_network();
        network.serve(&format!("{ORIGIN}/assets/main.css"), StoredResponse::with_status(500));
        let storage = MemoryStorage::new();
        let report = engine(network, storage.clone()).install().await;

        assert_eq!(report.cached.len(), 3);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].1, "HTTP 500");
        assert_eq!(storage.entry_count("aqua-sentinel-v1"), 3);
    }

    #[tokio::test]
    async fn activate_keeps_only_the_current_cache() {
        let storage = MemoryStorage::new();
        storage.open("aqua-sentinel-v0");
        storage.open("aqua-sentinel-v1");
        storage.open("tide-cache-2023");
        let cache = engine(online_network(), storage.clone());

        let mut deleted = cache.activate().await.unwrap();
        deleted.sort();
        assert_eq!(deleted, vec!["aqua-sentinel-v0", "tide-cache-2023"]);
        assert_eq!(storage.cache_names().await.unwrap(), vec!["aqua-sentinel-v1"]);
        assert!(cache.activate().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn cached_asset_is_served_without_network() {
        let network = online_network();
        let cache = engine(network.clone(), MemoryStorage::new());
        cache.install().await;
        let before = network.call_count();

        let served = cache.respond(&format!("{ORIGIN}/index.html")).await.unwrap();
        assert_eq!(served.origin, Origin::Cache);
        assert_eq!(network.call_count(), before);
    }

    #[tokio::test]
    async fn manifest_assets_are_served_offline() {
        let network = online_network();
        let cache = engine(network.clone(), MemoryStorage::new());
        cache.install().await;
        network.go_offline();

        for url in manifest().urls(ORIGIN) {
            let served = cache.respond(&url).await.unwrap();
            assert_eq!(served.origin, Origin::Cache, "{}", url);
        }
    }

    #[tokio::test]
    async fn network_success_is_cached_but_errors_are_not() {
        let network = online_network();
        network.serve(&format!("{ORIGIN}/news.json"), StoredResponse::ok("[]"));
        let storage = MemoryStorage::new();
        let cache = engine(network.clone(), storage.clone());

        let served = cache.respond(&format!("{ORIGIN}/news.json")).await.unwrap();
        assert_eq!(served.origin, Origin::Network);
        assert_eq!(storage.entry_count("aqua-sentinel-v1"), 1);

        let missing = cache.respond(&format!("{ORIGIN}/missing")).await.unwrap();
        assert_eq!(missing.origin, Origin::Network);
        assert_eq!(missing.response.status, 404);
        assert_eq!(storage.entry_count("aqua-sentinel-v1"), 1);
    }

    #[tokio::test]
    async fn offline_falls_back_to_any_cache_then_fails() {
        let network = online_network();
        network.go_offline();
        let storage = MemoryStorage::new();
        storage
            .put("aqua-sentinel-v0", &format!("{ORIGIN}/old.css"), StoredResponse::ok("old"))
            .await
            .unwrap();
        let cache = engine(network, storage);

        let served = cache.respond(&format!("{ORIGIN}/old.css")).await.unwrap();
        assert_eq!(served.origin, Origin::Fallback);
        assert_eq!(served.response.body, b"old".to_vec());

        let err = cache.respond(&format!("{ORIGIN}/never-seen")).await.unwrap_err();
        assert_eq!(err, CacheError::Offline(format!("{ORIGIN}/never-seen")));
    }

    #[tokio::test]
    async fn version_bump_reinstalls_into_new_cache() {
        let storage = MemoryStorage::new();
        engine(online_network(), storage.clone()).install().await;

        let next = engine(online_network(), storage.clone()).with_version("v2");
        assert_eq!(next.current_cache(), "aqua-sentinel-v2");
        next.install().await;
        assert_eq!(next.activate().await.unwrap(), vec!["aqua-sentinel-v1".to_string()]);
        assert_eq!(storage.entry_count("aqua-sentinel-v2"), 4);
    }

    /// A client request whose headers only survive if the engine forwards it whole.
    struct ClientRequest {
        url: String,
        accept: &'static str,
    }

    impl Intercepted for ClientRequest {
        fn url(&self) -> String {
            self.url.clone()
        }
    }

    #[derive(Clone, Default)]
    struct EchoNetwork {
        forwarded: Rc<RefCell<Vec<String>>>,
    }

    impl Network for EchoNetwork {
        type Response = StoredResponse;
        type Request = ClientRequest;

        async fn fetch(&self, url: &str, _mode: FetchMode) -> Result<StoredResponse, CacheError> {
            Ok(StoredResponse::ok(url.as_bytes().to_vec()))
        }

        async fn forward(
            &self,
            request: &ClientRequest,
            _mode: FetchMode,
        ) -> Result<StoredResponse, CacheError> {
            self.forwarded.borrow_mut().push(request.accept.to_string());
            Ok(StoredResponse::ok(request.accept.as_bytes().to_vec()))
        }
    }

    #[tokio::test]
    async fn cache_miss_forwards_the_intercepted_request() {
        let network = EchoNetwork::default();
        let storage = MemoryStorage::new();
        let cache = OfflineCache::new(network.clone(), storage.clone(), manifest(), ORIGIN);
        let request = ClientRequest {
            url: format!("{ORIGIN}/news.json"),
            accept: "application/json",
        };

        let served = cache.respond(&request).await.unwrap();
        assert_eq!(served.origin, Origin::Network);
        assert_eq!(served.response.body, b"application/json".to_vec());
        assert_eq!(*network.forwarded.borrow(), vec!["application/json".to_string()]);

        let again = cache.respond(&request).await.unwrap();
        assert_eq!(again.origin, Origin::Cache);
        assert_eq!(network.forwarded.borrow().len(), 1);
        assert_eq!(storage.entry_count("aqua-sentinel-v1"), 1);
    }
}
