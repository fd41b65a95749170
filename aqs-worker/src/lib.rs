//! Aqua Sentinel service worker.
//!
//! `sw.js` loads this module and forwards the three lifecycle events:
//!
//! - `install`: precache the manifest, then `skipWaiting()`
//! - `activate`: delete caches from older versions
//! - `fetch`: cache-first response for GET requests
//!
//! Non-GET requests never reach Rust; the shim lets them pass through.

mod backend;
mod logger;

use aqs_cache::{CacheError, Manifest, OfflineCache};
use backend::{BrowserCaches, EventRequest, WorkerNetwork};
use wasm_bindgen::prelude::*;
use web_sys::{Request, Response, ServiceWorkerGlobalScope, WorkerGlobalScope};

type WorkerCache = OfflineCache<WorkerNetwork, BrowserCaches>;

fn scope() -> Result<ServiceWorkerGlobalScope, JsValue> {
    js_sys::global().dyn_into::<ServiceWorkerGlobalScope>().map_err(JsValue::from)
}

fn engine(scope: &ServiceWorkerGlobalScope) -> Result<WorkerCache, JsValue> {
    let worker: WorkerGlobalScope = scope.clone().into();
    let origin = worker.location().origin();
    let storage = BrowserCaches::new(worker.caches()?);
    Ok(OfflineCache::new(
        WorkerNetwork::new(worker),
        storage,
        Manifest::default(),
        &origin,
    ))
}

fn to_js(err: CacheError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen(start)]
pub fn start() {
    logger::init();
}

#[wasm_bindgen]
pub async fn on_install() -> Result<JsValue, JsValue> {
    let scope = scope()?;
    let report = engine(&scope)?.install().await;
    for (url, reason) in &report.failed {
        log::warn!("[AQS] worker: not cached {} ({})", url, reason);
    }
    wasm_bindgen_futures::JsFuture::from(scope.skip_waiting()?).await?;
    Ok(JsValue::from(report.cached.len() as u32))
}

#[wasm_bindgen]
pub async fn on_activate() -> Result<JsValue, JsValue> {
    let deleted = engine(&scope()?)?.activate().await.map_err(to_js)?;
    Ok(JsValue::from(deleted.len() as u32))
}

#[wasm_bindgen]
pub async fn on_fetch(request: Request) -> Result<Response, JsValue> {
    let url = request.url();
    let request = EventRequest(request);
    let served = engine(&scope()?)?.respond(&request).await.map_err(|e| {
        log::warn!("[AQS] worker: {}", e);
        to_js(e)
    })?;
    log::debug!("[AQS] worker: {} from {:?}", url, served.origin);
    Ok(served.response.0)
}
