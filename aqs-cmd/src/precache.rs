//! Warm the offline cache from a running server and prove it serves every
//! manifest entry with the network gone.

use aqs_cache::{
    CacheBackend, CacheError, FetchMode, HttpNetwork, Manifest, MemoryStorage, Network,
    OfflineCache, Origin, StoredResponse,
};
use log::{info, warn};

/// A network that is always down.
#[derive(Clone, Copy, Default)]
pub struct Unreachable;

impl Network for Unreachable {
    type Response = StoredResponse;
    type Request = str;

    async fn fetch(&self, url: &str, _mode: FetchMode) -> Result<StoredResponse, CacheError> {
        Err(CacheError::Network(format!("{} is unreachable", url)))
    }
}

/// Manifest URLs that `storage` cannot serve without a network.
pub async fn missing_offline<S>(
    storage: S,
    manifest: Manifest,
    origin: &str,
    version: &str,
) -> Vec<String>
where
    S: CacheBackend<Response = StoredResponse>,
{
    let urls = manifest.urls(origin);
    let offline = OfflineCache::new(Unreachable, storage, manifest, origin).with_version(version);
    let mut missing = Vec::new();
    for url in urls {
        match offline.respond(url.as_str()).await {
            Ok(served) if served.origin != Origin::Network => {}
            Ok(_) | Err(_) => missing.push(url),
        }
    }
    missing
}

/// Install, activate, then verify against [`Unreachable`].
pub async fn precache<N>(
    network: N,
    storage: MemoryStorage,
    base_url: &str,
    version: &str,
) -> anyhow::Result<usize>
where
    N: Network<Response = StoredResponse>,
{
    let manifest = Manifest::default();
    let cache = OfflineCache::new(network, storage.clone(), manifest.clone(), base_url)
        .with_version(version);

    let report = cache.install().await;
    for (url, reason) in &report.failed {
        warn!("Could not precache {}: {}", url, reason);
    }
    cache.activate().await?;
    info!(
        "Cached {} of {} assets into {}",
        report.cached.len(),
        manifest.len(),
        cache.current_cache()
    );

    let missing = missing_offline(storage, manifest, base_url, version).await;
    if !missing.is_empty() {
        anyhow::bail!(
            "{} asset(s) would not load offline: {}",
            missing.len(),
            missing.join(", ")
        );
    }
    Ok(report.cached.len())
}

pub async fn run_precache(base_url: &str, version: &str) -> anyhow::Result<()> {
    let base_url = base_url.trim_end_matches('/');
    let cached = precache(HttpNetwork::new(), MemoryStorage::new(), base_url, version).await?;
    println!(
        "All {} assets served offline from {}",
        cached,
        aqs_cache::cache_name(version)
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: &str = "http://localhost:8080";

    /// Serves every URL except those listed.
    #[derive(Clone, Default)]
    struct Server {
        broken: Vec<String>,
    }

    impl Network for Server {
        type Response = StoredResponse;
        type Request = str;

        async fn fetch(&self, url: &str, _mode: FetchMode) -> Result<StoredResponse, CacheError> {
            if self.broken.iter().any(|b| b == url) {
                Ok(StoredResponse::with_status(404))
            } else {
                Ok(StoredResponse::ok(url.as_bytes().to_vec()))
            }
        }
    }

    #[tokio::test]
    async fn full_precache_is_served_offline() {
        let storage = MemoryStorage::new();
        let cached = precache(Server::default(), storage.clone(), ORIGIN, "v1")
            .await
            .unwrap();
        assert_eq!(cached, Manifest::default().len());
        assert_eq!(storage.entry_count("aqua-sentinel-v1"), cached);
    }

    #[tokio::test]
    async fn missing_asset_fails_verification() {
        let server = Server {
            broken: vec![format!("{}/manifest.json", ORIGIN)],
        };
        let err = precache(server, MemoryStorage::new(), ORIGIN, "v1")
            .await
            .unwrap_err()
            .to_string();
        assert!(err.contains("1 asset(s)"));
        assert!(err.contains("/manifest.json"));
    }

    #[tokio::test]
    async fn stale_versions_are_dropped() {
        let storage = MemoryStorage::new();
        storage.open("aqua-sentinel-v0");
        storage.open("other-app");
        precache(Server::default(), storage.clone(), ORIGIN, "v1")
            .await
            .unwrap();
        let names = storage.cache_names().await.unwrap();
        assert_eq!(names, vec!["aqua-sentinel-v1".to_string()]);
    }

    #[tokio::test]
    async fn empty_storage_misses_everything() {
        let missing = missing_offline(MemoryStorage::new(), Manifest::default(), ORIGIN, "v1").await;
        assert_eq!(missing.len(), Manifest::default().len());
    }
}
