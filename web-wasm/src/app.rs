//! Application root

use leptos::prelude::*;

use crate::components::back_to_top::BackToTop;
use crate::components::header::Header;
use crate::components::search_bar::SearchBar;
use crate::components::toast::{ToastStack, Toasts};
use crate::components::vehicle_form::VehicleForm;

#[component]
pub fn App() -> impl IntoView {
    provide_context(Toasts::new());

    // Two image intake variants exist: the stepped admin wizard with six
    // upload slots (default) and the flat form with one bulk input,
    // selected by `?form=simple`.
    let simple = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .map(|query| query.contains("form=simple"))
        .unwrap_or(false);

    view! {
        <div class="container py-4">
            <Header />
            <SearchBar />
            <VehicleForm wizard_mode=!simple />
            <ToastStack />
            <BackToTop />
        </div>
    }
}
