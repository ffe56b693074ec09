//! Inventory search form
//!
//! The category select submits immediately; the text input submits after
//! a 500ms pause, once the query is three characters or cleared.

use leptos::html;
use leptos::prelude::*;

use dealer_forms_common::limits::SEARCH_DEBOUNCE_MS;

use crate::debounce::Debouncer;

const CATEGORIES: &[(&str, &str)] = &[
    ("sedan", "Sedan"),
    ("suv", "SUV"),
    ("truck", "Truck"),
    ("coupe", "Coupe"),
    ("van", "Van"),
];

#[component]
pub fn SearchBar() -> impl IntoView {
    let form_ref = NodeRef::<html::Form>::new();
    let debouncer = StoredValue::new_local(Debouncer::new(SEARCH_DEBOUNCE_MS));

    let submit_form = move || {
        if let Some(form) = form_ref.get_untracked() {
            let _ = form.submit();
        }
    };

    let on_search_input = move |ev| {
        let query = event_target_value(&ev);
        debouncer.with_value(|debouncer| {
            debouncer.schedule(move || {
                if query.len() >= 3 || query.is_empty() {
                    submit_form();
                }
            });
        });
    };

    view! {
        <form method="get" action="/vehicles" class="row g-2 mb-4" node_ref=form_ref>
            <div class="col">
                <input
                    type="search"
                    class="form-control"
                    name="search"
                    placeholder="Search vehicles..."
                    on:input=on_search_input
                />
            </div>
            <div class="col-auto">
                <select class="form-select" name="category" on:change=move |_| submit_form()>
                    <option value="">"All categories"</option>
                    {CATEGORIES
                        .iter()
                        .map(|(value, text)| view! { <option value=*value>{*text}</option> })
                        .collect_view()}
                </select>
            </div>
        </form>
    }
}
