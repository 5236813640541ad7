use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;
use yew_hooks::prelude::*;

use super::effects::{should_reveal, FADE_IN_STARTUP_DELAY_MS};

fn reveal_visible() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let Ok(elements) = document.query_selector_all(".fade-in") else {
        return;
    };
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);

    for element in (0..elements.length())
        .filter_map(|i| elements.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
    {
        if should_reveal(element.get_bounding_client_rect().top(), viewport_height) {
            let style = element.style();
            let _ = style.set_property("opacity", "1");
            let _ = style.set_property("transform", "translateY(0)");
        }
    }
}

/// Fades in `.fade-in` elements as they scroll into view.
#[hook]
pub fn use_fade_in() {
    use_event_with_window("load", |_: Event| reveal_visible());
    use_event_with_window("scroll", |_: Event| reveal_visible());
    // Catch whatever is already on screen once the first render has settled
    let _ = use_timeout(reveal_visible, FADE_IN_STARTUP_DELAY_MS);
}
