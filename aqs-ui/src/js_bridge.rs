//! Typed wrappers around the browser APIs the dashboard touches directly.

use aqs_core::profile::Theme;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// Attribute on `<html>` the stylesheet keys its palette on.
pub const THEME_ATTRIBUTE: &str = "data-theme";

fn describe(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Set `data-theme` on the document element.
pub fn apply_theme(theme: Theme) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    match root {
        Some(root) => {
            if let Err(e) = root.set_attribute(THEME_ATTRIBUTE, theme.as_str()) {
                log::warn!("[AQS] bridge: could not apply theme: {}", describe(e));
            }
        }
        None => log::warn!("[AQS] bridge: no document element for theme"),
    }
}

/// `navigator.onLine`, assuming online outside a browser.
pub fn is_online() -> bool {
    web_sys::window()
        .map(|w| w.navigator().on_line())
        .unwrap_or(true)
}

/// Window `online`/`offline` listeners; removed on drop.
pub struct ConnectivityListener {
    window: web_sys::Window,
    on_online: Closure<dyn FnMut(web_sys::Event)>,
    on_offline: Closure<dyn FnMut(web_sys::Event)>,
}

impl Drop for ConnectivityListener {
    fn drop(&mut self) {
        let _ = self.window.remove_event_listener_with_callback(
            "online",
            self.on_online.as_ref().unchecked_ref(),
        );
        let _ = self.window.remove_event_listener_with_callback(
            "offline",
            self.on_offline.as_ref().unchecked_ref(),
        );
    }
}

/// Call `on_change` with the new connectivity whenever the browser reports a change.
pub fn watch_connectivity<F>(on_change: F) -> Option<ConnectivityListener>
where
    F: Fn(bool) + Clone + 'static,
{
    let window = web_sys::window()?;

    let online_cb = on_change.clone();
    let on_online = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
        log::info!("[AQS] bridge: connection restored");
        online_cb(true);
    });
    let on_offline = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
        log::info!("[AQS] bridge: connection lost");
        on_change(false);
    });

    window
        .add_event_listener_with_callback("online", on_online.as_ref().unchecked_ref())
        .ok()?;
    window
        .add_event_listener_with_callback("offline", on_offline.as_ref().unchecked_ref())
        .ok()?;

    Some(ConnectivityListener {
        window,
        on_online,
        on_offline,
    })
}

/// Register the offline cache worker. Failures are logged; the app works without it.
pub fn register_service_worker(script_url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let container = window.navigator().service_worker();
    let promise = container.register(script_url);
    let script_url = script_url.to_string();
    wasm_bindgen_futures::spawn_local(async move {
        match JsFuture::from(promise).await {
            Ok(_) => log::info!("[AQS] bridge: service worker registered ({})", script_url),
            Err(e) => log::warn!(
                "[AQS] bridge: service worker registration failed: {}",
                describe(e)
            ),
        }
    });
}

/// First file selected in the `<input type="file">` with DOM id `input_id`.
pub fn selected_file(input_id: &str) -> Option<web_sys::File> {
    let input = web_sys::window()?
        .document()?
        .get_element_by_id(input_id)?
        .dyn_into::<web_sys::HtmlInputElement>()
        .ok()?;
    input.files()?.get(0)
}

/// Read `file` into a `data:` URL.
pub async fn read_file_as_data_url(file: web_sys::File) -> Result<String, String> {
    let reader = web_sys::FileReader::new().map_err(describe)?;
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        let done = reader.clone();
        let onload = Closure::once_into_js(move |_: web_sys::Event| {
            let _ = resolve.call1(&JsValue::NULL, &done.result().unwrap_or(JsValue::NULL));
        });
        let onerror = Closure::once_into_js(move |_: web_sys::Event| {
            let _ = reject.call1(&JsValue::NULL, &JsValue::from_str("file could not be read"));
        });
        reader.set_onload(Some(onload.unchecked_ref()));
        reader.set_onerror(Some(onerror.unchecked_ref()));
    });
    reader.read_as_data_url(&file).map_err(describe)?;
    let value = JsFuture::from(promise).await.map_err(describe)?;
    value
        .as_string()
        .ok_or_else(|| "file reader returned no text".to_string())
}
