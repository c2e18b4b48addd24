#![forbid(unsafe_code)]

//! DOM rendering for the install button and the instructions overlay.
//!
//! Everything here is existence-checked: renders are idempotent by element
//! id, removals tolerate an absent element, and timer callbacks look the
//! element up again before touching it. A missing container is a soft
//! dependency — the page simply gets no button.

use homescreen_core::{Guidance, InstallOptions};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element};

/// Fixed id of the singleton instructions overlay.
const OVERLAY_ID: &str = "install-instructions-overlay";

/// Delay before the button flips from its entry style to the settled one.
const ENTRY_SETTLE_MS: i32 = 60;

/// Overlay fade duration; must match the transition in [`OVERLAY_STYLE`].
const FADE_OUT_MS: i32 = 300;

/// Button style at creation: hidden and offset, ready to transition in.
const BUTTON_STYLE: &str = "display:inline-flex;align-items:center;gap:0.5em;\
    padding:0.6em 1.1em;border:none;border-radius:9999px;\
    background:#1a73e8;color:#fff;font:inherit;font-weight:600;cursor:pointer;\
    opacity:0;transform:translateY(8px);\
    transition:opacity 0.25s ease,transform 0.25s ease;";

/// Download-arrow icon shown before the button label.
const BUTTON_ICON_SVG: &str = "<svg width=\"16\" height=\"16\" viewBox=\"0 0 24 24\" \
    fill=\"none\" stroke=\"currentColor\" stroke-width=\"2\" stroke-linecap=\"round\" \
    stroke-linejoin=\"round\" aria-hidden=\"true\">\
    <path d=\"M12 3v12\"/><path d=\"m7 10 5 5 5-5\"/><path d=\"M5 21h14\"/></svg>";

const OVERLAY_STYLE: &str = "position:fixed;inset:0;z-index:2147483000;\
    display:flex;align-items:center;justify-content:center;\
    background:rgba(0,0,0,0.55);opacity:1;transition:opacity 0.3s ease;";

const CARD_STYLE: &str = "max-width:20rem;margin:1rem;padding:1.25rem 1.5rem;\
    border-radius:12px;background:#fff;color:#202124;\
    font-family:system-ui,sans-serif;text-align:center;\
    box-shadow:0 12px 32px rgba(0,0,0,0.25);";

const CARD_TITLE_STYLE: &str = "margin:0 0 0.5rem;font-size:1.1rem;";

const CARD_BODY_STYLE: &str = "margin:0 0 1rem;font-size:0.95rem;line-height:1.4;";

const DISMISS_STYLE: &str = "border:none;border-radius:9999px;padding:0.5em 1.4em;\
    background:#1a73e8;color:#fff;font:inherit;cursor:pointer;";

/// Render the install button into the configured container.
///
/// Idempotent: an existing button (by id) or a missing container are both
/// silent no-ops. The click listener lives as long as the button element.
pub fn render_button(
    document: &Document,
    options: &InstallOptions,
    on_click: impl FnMut() + 'static,
) -> Result<(), JsValue> {
    if document.get_element_by_id(&options.button_id).is_some() {
        return Ok(());
    }
    let Some(container) = document.get_element_by_id(&options.container_id) else {
        return Ok(());
    };

    let button = document.create_element("button")?;
    button.set_id(&options.button_id);
    button.set_attribute("type", "button")?;
    button.set_attribute("style", BUTTON_STYLE)?;
    button.set_inner_html(BUTTON_ICON_SVG);

    let label = document.create_element("span")?;
    label.set_text_content(Some(&options.button_label));
    button.append_child(&label)?;

    let closure = Closure::<dyn FnMut()>::new(on_click);
    button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    // The listener lives with the button until the page goes away.
    closure.forget();

    container.append_child(&button)?;

    let button_id = options.button_id.clone();
    set_timeout(ENTRY_SETTLE_MS, move || settle_button(&button_id));
    Ok(())
}

/// Flip the button to its settled style, if it still exists.
fn settle_button(button_id: &str) {
    let Some(element) = element_by_id(button_id) else {
        return;
    };
    if let Some(html) = element.dyn_ref::<web_sys::HtmlElement>() {
        let style = html.style();
        let _ = style.set_property("opacity", "1");
        let _ = style.set_property("transform", "none");
    }
}

/// Remove the install button; a no-op if none exists.
pub fn remove_button(document: &Document, button_id: &str) {
    if let Some(element) = document.get_element_by_id(button_id) {
        element.remove();
    }
}

/// Open the manual-instructions overlay on `document.body`.
///
/// A singleton: re-entry while an overlay is up is a no-op. The overlay
/// removes itself after the acknowledgment click and a short fade.
pub fn show_guidance(document: &Document, guidance: Guidance) -> Result<(), JsValue> {
    if document.get_element_by_id(OVERLAY_ID).is_some() {
        return Ok(());
    }
    let Some(body) = document.body() else {
        return Ok(());
    };

    let overlay = document.create_element("div")?;
    overlay.set_id(OVERLAY_ID);
    overlay.set_attribute("role", "dialog")?;
    overlay.set_attribute("aria-modal", "true")?;
    overlay.set_attribute("style", OVERLAY_STYLE)?;

    let card = document.create_element("div")?;
    card.set_attribute("style", CARD_STYLE)?;

    let title = document.create_element("h2")?;
    title.set_attribute("style", CARD_TITLE_STYLE)?;
    title.set_text_content(Some(guidance.title()));

    let instructions = document.create_element("p")?;
    instructions.set_attribute("style", CARD_BODY_STYLE)?;
    instructions.set_text_content(Some(guidance.body()));

    let dismiss = document.create_element("button")?;
    dismiss.set_attribute("type", "button")?;
    dismiss.set_attribute("style", DISMISS_STYLE)?;
    dismiss.set_text_content(Some("Got it"));

    let closure = Closure::<dyn FnMut()>::new(dismiss_overlay);
    dismiss.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();

    card.append_child(&title)?;
    card.append_child(&instructions)?;
    card.append_child(&dismiss)?;
    overlay.append_child(&card)?;
    body.append_child(&overlay)?;
    Ok(())
}

/// Fade the overlay out, then remove it once the fade has run.
fn dismiss_overlay() {
    let Some(element) = element_by_id(OVERLAY_ID) else {
        return;
    };
    if let Some(html) = element.dyn_ref::<web_sys::HtmlElement>() {
        let _ = html.style().set_property("opacity", "0");
    }
    set_timeout(FADE_OUT_MS, || {
        if let Some(element) = element_by_id(OVERLAY_ID) {
            element.remove();
        }
    });
}

fn element_by_id(id: &str) -> Option<Element> {
    web_sys::window()?.document()?.get_element_by_id(id)
}

/// Fire-once, non-cancellable timer on the window event loop.
pub fn set_timeout(delay_ms: i32, callback: impl FnOnce() + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::once_into_js(callback);
    let _ = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(closure.unchecked_ref(), delay_ms);
}
