//! Page header with the share control

use leptos::prelude::*;

use crate::components::toast::Toasts;
use crate::utility;

#[component]
pub fn Header() -> impl IntoView {
    let toasts = expect_context::<Toasts>();
    view! {
        <header class="d-flex justify-content-between align-items-center mb-4">
            <h1 class="h3">"Vehicle Inventory Admin"</h1>
            <button
                type="button"
                class="btn btn-outline-secondary btn-sm"
                title="Share this page"
                on:click=move |_| utility::share_current_page(toasts)
            >
                "Share"
            </button>
        </header>
    }
}
