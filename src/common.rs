//! Common functionality.
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlInputElement, ScrollBehavior, ScrollToOptions};

/// Current value of the input element that fired the event.
pub fn input_value(e: &Event) -> String {
    let target = e.target().expect("event should have target");
    let input = target
        .dyn_ref::<HtmlInputElement>()
        .expect("target should be an input element");

    input.value()
}

/// Smooth scrolls the window to the top of the page.
pub fn scroll_to_top() {
    let Some(window) = web_sys::window() else {
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
