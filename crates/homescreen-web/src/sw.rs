#![forbid(unsafe_code)]

//! One-shot service worker registration.
//!
//! Fire-and-forget: both outcomes are terminal and only observable on the
//! console. A failed registration leaves the install affordance fully
//! functional, so there is no retry and no user-facing error.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::ServiceWorkerRegistration;

use crate::log::{console_debug, console_warn};

/// Register `path` against the page location, if the host supports workers.
pub fn register(path: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let navigator = window.navigator();
    // `serviceWorker` is absent in insecure contexts and older engines.
    if !js_sys::Reflect::has(navigator.as_ref(), &JsValue::from_str("serviceWorker"))
        .unwrap_or(false)
    {
        console_debug!("homescreen: service workers unsupported, skipping registration");
        return;
    }
    let promise = navigator.service_worker().register(path);
    let path = path.to_owned();
    spawn_local(async move {
        match JsFuture::from(promise).await {
            Ok(registration) => {
                let scope = registration
                    .dyn_into::<ServiceWorkerRegistration>()
                    .map(|reg| reg.scope())
                    .unwrap_or_default();
                console_debug!("homescreen: service worker registered for {path} (scope {scope})");
            }
            Err(err) => {
                console_warn!("homescreen: service worker registration failed: {err:?}");
            }
        }
    });
}
