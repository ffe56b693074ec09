//! Wizard chrome: progress bar, step panes, navigation buttons
//!
//! Steps carry their target ids on the buttons; no validation gate runs
//! between steps.

use leptos::logging;
use leptos::prelude::*;

use dealer_forms_common::Wizard;

#[component]
pub fn WizardProgress(wizard: RwSignal<Wizard>) -> impl IntoView {
    let percent = move || wizard.with(|w| w.progress_percent());
    view! {
        <div class="progress mb-4" role="progressbar">
            <div
                class="progress-bar"
                style:width=move || format!("{}%", percent())
                aria-valuenow=move || format!("{}", percent())
                aria-valuemin="0"
                aria-valuemax="100"
            />
        </div>
    }
}

/// One tab pane; visible only while its id is the active wizard step.
#[component]
pub fn StepPane(id: &'static str, wizard: RwSignal<Wizard>, children: Children) -> impl IntoView {
    view! {
        <div
            id=id
            class="tab-pane fade"
            class:show=move || wizard.with(|w| w.is_active(id))
            class:active=move || wizard.with(|w| w.is_active(id))
        >
            {children()}
        </div>
    }
}

#[component]
pub fn StepNav(
    wizard: RwSignal<Wizard>,
    #[prop(optional)] prev: Option<&'static str>,
    #[prop(optional)] next: Option<&'static str>,
) -> impl IntoView {
    let go = move |target: &'static str| {
        wizard.update(|w| {
            if let Err(err) = w.activate(target) {
                logging::warn!("wizard navigation failed: {err}");
            }
        });
    };

    view! {
        <div class="d-flex justify-content-between mt-4">
            {prev.map(|target| view! {
                <button
                    type="button"
                    class="btn btn-outline-secondary btn-prev"
                    data-prev=target
                    on:click=move |_| go(target)
                >
                    "Previous"
                </button>
            })}
            {next.map(|target| view! {
                <button
                    type="button"
                    class="btn btn-primary btn-next ms-auto"
                    data-next=target
                    on:click=move |_| go(target)
                >
                    "Next"
                </button>
            })}
        </div>
    }
}
