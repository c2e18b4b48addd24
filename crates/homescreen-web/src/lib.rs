#![forbid(unsafe_code)]

//! WASM frontend for homescreen.
//!
//! Wires the browser to [`homescreen-core`]'s install controller:
//! - one-shot service worker registration at start,
//! - `beforeinstallprompt` / `appinstalled` listeners,
//! - the install button and the manual-instructions overlay,
//! - fire-once timers for the proactive reveal, the button's entry
//!   transition, and the overlay fade-out.
//!
//! All decisions live in the core controller; this crate only captures the
//! environment, forwards signals, and executes the effects that come back.
//!
//! [`homescreen-core`]: homescreen_core

#[cfg(target_arch = "wasm32")]
mod bindings;
#[cfg(target_arch = "wasm32")]
mod log;
#[cfg(target_arch = "wasm32")]
mod sw;
#[cfg(target_arch = "wasm32")]
mod ui;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::HomescreenWeb;

/// Native builds compile this crate as a stub so `cargo check --workspace`
/// stays green on non-wasm targets.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Default)]
pub struct HomescreenWeb;

#[cfg(not(target_arch = "wasm32"))]
impl HomescreenWeb {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self
    }
}
