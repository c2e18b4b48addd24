#![forbid(unsafe_code)]

//! Hand-written binding for `BeforeInstallPromptEvent`.
//!
//! `web-sys` ships no binding for this event type, so the surface this
//! crate needs is declared here: `prompt()` and the single-resolution
//! `userChoice` promise. The event object doubles as the deferred install
//! capability — holding on to it after `preventDefault` is what lets a
//! custom button trigger the native prompt later.

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// The deferred install capability delivered by `beforeinstallprompt`.
    #[wasm_bindgen(extends = web_sys::Event, js_name = BeforeInstallPromptEvent)]
    pub type BeforeInstallPromptEvent;

    /// Show the native install prompt. Must be called from a user gesture;
    /// the returned promise rejects otherwise.
    #[wasm_bindgen(method)]
    pub fn prompt(this: &BeforeInstallPromptEvent) -> js_sys::Promise;

    /// Resolves exactly once, after the user answers, to an object whose
    /// `outcome` field is `"accepted"` or `"dismissed"`.
    #[wasm_bindgen(method, getter, js_name = userChoice)]
    pub fn user_choice(this: &BeforeInstallPromptEvent) -> js_sys::Promise;
}
