//! Page-level conveniences: share, smooth scroll, confirmations
//!
//! The delegated listeners also cover server-rendered parts of the page
//! (flash alerts, delete links) that live outside the mounted app.

use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::callback::Timeout;
use leptos::logging;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{
    Document, Element, HtmlDocument, HtmlElement, HtmlTextAreaElement, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions, ShareData, Window,
};

use dealer_forms_common::limits::TOAST_LIFETIME_MS;

use crate::components::toast::{ToastLevel, Toasts};

fn window() -> Window {
    web_sys::window().expect("no window")
}

fn document() -> Document {
    window().document().expect("no document")
}

pub fn current_year() -> i32 {
    js_sys::Date::new_0().get_full_year() as i32
}

/// Install the document-wide enhancements once, before mount.
pub fn init_page_enhancements() {
    init_smooth_anchors();
    init_delete_confirmations();
    auto_dismiss_alerts();
}

/// Smooth-scroll in-page anchor links via one delegated click listener.
fn init_smooth_anchors() {
    let options = EventListenerOptions::enable_prevent_default();
    let listener = EventListener::new_with_options(&document(), "click", options, |event| {
        let Some(anchor) = closest_from_event(event, "a[href^='#']") else {
            return;
        };
        let Some(href) = anchor.get_attribute("href") else {
            return;
        };
        if let Ok(Some(target)) = document().query_selector(&href) {
            event.prevent_default();
            let opts = ScrollIntoViewOptions::new();
            opts.set_behavior(ScrollBehavior::Smooth);
            opts.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&opts);
        }
    });
    listener.forget();
}

/// Delete links get a blocking yes/no prompt; cancel stops navigation.
fn init_delete_confirmations() {
    let options = EventListenerOptions::enable_prevent_default();
    let listener = EventListener::new_with_options(&document(), "click", options, |event| {
        if closest_from_event(event, "a[href*='delete']").is_none() {
            return;
        }
        let confirmed = window()
            .confirm_with_message(
                "Are you sure you want to delete this vehicle? This action cannot be undone.",
            )
            .unwrap_or(false);
        if !confirmed {
            event.prevent_default();
            event.stop_propagation();
        }
    });
    listener.forget();
}

/// Flash alerts without a close button expire on their own.
fn auto_dismiss_alerts() {
    let Ok(alerts) = document().query_selector_all(".alert") else {
        return;
    };
    for i in 0..alerts.length() {
        let Some(el) = alerts.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        if el.query_selector(".btn-close").ok().flatten().is_some() {
            continue;
        }
        Timeout::new(TOAST_LIFETIME_MS, move || el.remove()).forget();
    }
}

fn closest_from_event(event: &web_sys::Event, selector: &str) -> Option<Element> {
    let target = event.target()?;
    let el = target.dyn_ref::<Element>()?;
    el.closest(selector).ok().flatten()
}

/// Scroll the named field into view and focus it.
pub fn focus_field(id: &str) {
    let Some(el) = document().get_element_by_id(id) else {
        return;
    };
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    opts.set_block(ScrollLogicalPosition::Center);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.focus();
    }
}

pub fn scroll_to_top() {
    let opts = ScrollToOptions::new();
    opts.set_top(0.0);
    opts.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&opts);
}

pub fn page_y_offset() -> f64 {
    window().page_y_offset().unwrap_or(0.0)
}

/// Share the current page: native share, then clipboard, then a legacy
/// text-selection copy.
pub fn share_current_page(toasts: Toasts) {
    let window = window();
    let url = window.location().href().unwrap_or_default();
    let title = document().title();
    let navigator = window.navigator();

    if has_property(navigator.as_ref(), "share") {
        let data = ShareData::new();
        data.set_title(&title);
        data.set_url(&url);
        let promise = navigator.share_with_data(&data);
        spawn_local(async move {
            if let Err(err) = JsFuture::from(promise).await {
                logging::warn!("share failed: {err:?}");
            }
        });
    } else if has_property(navigator.as_ref(), "clipboard") {
        let promise = navigator.clipboard().write_text(&url);
        spawn_local(async move {
            match JsFuture::from(promise).await {
                Ok(_) => toasts.success("Link copied to clipboard!"),
                Err(_) => fallback_copy(&url, toasts),
            }
        });
    } else {
        fallback_copy(&url, toasts);
    }
}

/// Copy through a temporary selected textarea and `execCommand`.
fn fallback_copy(url: &str, toasts: Toasts) {
    let document = document();
    let Some(body) = document.body() else {
        return;
    };
    let Some(textarea) = document
        .create_element("textarea")
        .ok()
        .and_then(|el| el.dyn_into::<HtmlTextAreaElement>().ok())
    else {
        return;
    };
    textarea.set_value(url);
    if body.append_child(&textarea).is_err() {
        return;
    }
    textarea.select();
    // execCommand lives on HtmlDocument.
    let copied = document
        .dyn_ref::<HtmlDocument>()
        .and_then(|doc| doc.exec_command("copy").ok())
        .unwrap_or(false);
    if copied {
        toasts.success("Link copied to clipboard!");
    } else {
        toasts.push(
            format!("Unable to copy link. Please copy manually: {url}"),
            ToastLevel::Warning,
        );
    }
    let _ = body.remove_child(&textarea);
}

fn has_property(target: &JsValue, name: &str) -> bool {
    js_sys::Reflect::has(target, &JsValue::from_str(name)).unwrap_or(false)
}
