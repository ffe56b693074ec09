//! Back-to-top button, shown after 300px of scroll

use gloo::events::EventListener;
use leptos::prelude::*;

use crate::utility;

#[component]
pub fn BackToTop() -> impl IntoView {
    let (visible, set_visible) = signal(false);

    // The button is mounted once per page, so the listener lives with it.
    if let Some(window) = web_sys::window() {
        EventListener::new(&window, "scroll", move |_| {
            set_visible.set(utility::page_y_offset() > 300.0);
        })
        .forget();
    }

    view! {
        <button
            type="button"
            class="btn btn-primary position-fixed bottom-0 end-0 m-3"
            title="Back to top"
            style:display=move || if visible.get() { "block" } else { "none" }
            on:click=move |_| utility::scroll_to_top()
        >
            "\u{2191}"
        </button>
    }
}
