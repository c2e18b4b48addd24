#![forbid(unsafe_code)]

//! JS-facing entry point.
//!
//! [`HomescreenWeb`] captures the environment once, owns the core
//! controller behind an `Rc<RefCell<_>>` shared with the event closures,
//! and executes controller effects on the single browser thread. The only
//! suspension points are the user-choice await and the fire-once timers.

use std::cell::RefCell;
use std::rc::Rc;

use homescreen_core::{Effect, EnvSnapshot, InstallController, InstallOptions, Outcome, Platform};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::Window;

use crate::bindings::BeforeInstallPromptEvent;
use crate::log::{console_debug, console_warn};
use crate::{sw, ui};

struct App {
    controller: InstallController<BeforeInstallPromptEvent>,
    options: InstallOptions,
}

/// Browser install-affordance driver.
///
/// Construct once, then call [`start`](HomescreenWeb::start) after the page
/// has loaded. All state is transient and rebuilt each session.
#[wasm_bindgen]
pub struct HomescreenWeb {
    app: Rc<RefCell<App>>,
    started: bool,
}

#[wasm_bindgen]
impl HomescreenWeb {
    /// Create a driver. `options` is an optional plain object; missing
    /// fields take defaults and unknown fields are ignored.
    #[wasm_bindgen(constructor)]
    pub fn new(options: Option<js_sys::Object>) -> Result<HomescreenWeb, JsValue> {
        let options = match options {
            Some(raw) => parse_options(&raw)?,
            None => InstallOptions::default(),
        };
        let env = snapshot_env();
        console_debug!(
            "homescreen: platform {}, standalone {}",
            Platform::classify(&env).name(),
            env.is_standalone()
        );
        let controller = InstallController::new(&env, options.reveal_delay_ms);
        Ok(Self {
            app: Rc::new(RefCell::new(App { controller, options })),
            started: false,
        })
    }

    /// Register the service worker, wire the platform listeners, and run
    /// the startup decision. Safe to call more than once; only the first
    /// call does anything.
    pub fn start(&mut self) -> Result<(), JsValue> {
        if self.started {
            return Ok(());
        }
        self.started = true;

        let Some(window) = web_sys::window() else {
            return Ok(());
        };

        sw::register(&self.app.borrow().options.service_worker_path);

        install_listener(&window, "beforeinstallprompt", {
            let app = Rc::clone(&self.app);
            move |event: web_sys::Event| {
                // Keep the browser's own install UI out of the way; the
                // custom button is the sole entry point.
                event.prevent_default();
                let handle: BeforeInstallPromptEvent = event.unchecked_into();
                let effects = app.borrow_mut().controller.can_install(handle);
                run_effects(&app, effects);
            }
        })?;

        install_listener(&window, "appinstalled", {
            let app = Rc::clone(&self.app);
            move |_event: web_sys::Event| {
                console_debug!("homescreen: app installed");
                let effects = app.borrow_mut().controller.installed();
                run_effects(&app, effects);
            }
        })?;

        let effects = self.app.borrow_mut().controller.startup();
        run_effects(&self.app, effects);
        Ok(())
    }
}

/// Attach a page-lifetime listener; the closure is intentionally leaked.
fn install_listener(
    window: &Window,
    kind: &str,
    handler: impl FnMut(web_sys::Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    window.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn parse_options(raw: &js_sys::Object) -> Result<InstallOptions, JsValue> {
    let json: String = js_sys::JSON::stringify(raw)?.into();
    InstallOptions::from_json_str(&json).map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Capture the environment signals classification reads.
fn snapshot_env() -> EnvSnapshot {
    let Some(window) = web_sys::window() else {
        return EnvSnapshot::default();
    };
    let navigator = window.navigator();
    let display_mode_standalone = window
        .match_media("(display-mode: standalone)")
        .ok()
        .flatten()
        .is_some_and(|list| list.matches());
    // Safari-only flag, absent from web-sys.
    let navigator_standalone =
        js_sys::Reflect::get(navigator.as_ref(), &JsValue::from_str("standalone"))
            .ok()
            .and_then(|value| value.as_bool())
            .unwrap_or(false);
    EnvSnapshot {
        user_agent: navigator.user_agent().unwrap_or_default(),
        platform: navigator.platform().unwrap_or_default(),
        max_touch_points: navigator.max_touch_points().max(0) as u32,
        display_mode_standalone,
        navigator_standalone,
    }
}

/// Execute controller effects against the live document.
fn run_effects(app: &Rc<RefCell<App>>, effects: Vec<Effect<BeforeInstallPromptEvent>>) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    for effect in effects {
        match effect {
            Effect::ScheduleReveal { delay_ms } => {
                let app = Rc::clone(app);
                ui::set_timeout(delay_ms as i32, move || {
                    let effects = app.borrow_mut().controller.reveal_elapsed();
                    run_effects(&app, effects);
                });
            }
            Effect::ShowButton => {
                let options = app.borrow().options.clone();
                let on_click = {
                    let app = Rc::clone(app);
                    move || {
                        let effects = app.borrow_mut().controller.button_activated();
                        run_effects(&app, effects);
                    }
                };
                if let Err(err) = ui::render_button(&document, &options, on_click) {
                    console_warn!("homescreen: install button render failed: {err:?}");
                }
            }
            Effect::RemoveButton => {
                let button_id = app.borrow().options.button_id.clone();
                ui::remove_button(&document, &button_id);
            }
            Effect::RunPrompt(handle) => run_prompt(app, handle),
            Effect::ShowGuidance(guidance) => {
                if let Err(err) = ui::show_guidance(&document, guidance) {
                    console_warn!("homescreen: instructions render failed: {err:?}");
                }
            }
        }
    }
}

/// Run the native prompt and feed the single-resolution user choice back
/// into the controller.
fn run_prompt(app: &Rc<RefCell<App>>, handle: BeforeInstallPromptEvent) {
    let app = Rc::clone(app);
    spawn_local(async move {
        let outcome = match JsFuture::from(handle.prompt()).await {
            Ok(_) => match JsFuture::from(handle.user_choice()).await {
                Ok(choice) => {
                    let raw = js_sys::Reflect::get(&choice, &JsValue::from_str("outcome"))
                        .ok()
                        .and_then(|value| value.as_string())
                        .unwrap_or_default();
                    Outcome::parse(&raw).unwrap_or_else(|| {
                        console_warn!("homescreen: unknown install outcome {raw:?}");
                        Outcome::Dismissed
                    })
                }
                Err(err) => {
                    console_warn!("homescreen: user choice rejected: {err:?}");
                    Outcome::Dismissed
                }
            },
            Err(err) => {
                // Typically a prompt outside a user gesture; nothing to
                // wait for in that case.
                console_warn!("homescreen: install prompt rejected: {err:?}");
                Outcome::Dismissed
            }
        };
        console_debug!("homescreen: install prompt {}", outcome.as_str());
        let effects = app.borrow_mut().controller.prompt_settled(outcome);
        run_effects(&app, effects);
    });
}
