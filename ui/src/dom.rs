use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// Smoothly scroll `element_id` into view after `delay_ms`, giving the
/// renderer time to insert the new content first.
pub fn scroll_into_view_later(element_id: &'static str, delay_ms: i32) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let callback = Closure::<dyn FnMut()>::new(move || {
        let element = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(element_id));
        let Some(element) = element else {
            tracing::debug!("Scroll target #{} not found", element_id);
            return;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Nearest);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    });

    if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.as_ref().unchecked_ref(),
        delay_ms,
    ) {
        tracing::debug!("Failed to schedule scroll: {:?}", e);
    }
    callback.forget();
}
