//! Toast notifications
//!
//! Stacked, dismissible, self-expiring messages. A copyable `Toasts`
//! handle lives in the Leptos context so any component can raise one.

use gloo::timers::callback::Timeout;
use leptos::prelude::*;

use dealer_forms_common::limits::TOAST_LIFETIME_MS;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
    Warning,
}

impl ToastLevel {
    fn css_class(self) -> &'static str {
        match self {
            ToastLevel::Success => "bg-success",
            ToastLevel::Error => "bg-danger",
            ToastLevel::Warning => "bg-warning",
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct ToastMessage {
    pub id: u32,
    pub text: String,
    pub level: ToastLevel,
}

#[derive(Clone, Copy)]
pub struct Toasts {
    items: RwSignal<Vec<ToastMessage>>,
    next_id: RwSignal<u32>,
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    pub fn push(&self, text: impl Into<String>, level: ToastLevel) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id.wrapping_add(1));
        self.items.update(|items| {
            items.push(ToastMessage {
                id,
                text: text.into(),
                level,
            });
        });

        let items = self.items;
        Timeout::new(TOAST_LIFETIME_MS, move || {
            items.update(|list| list.retain(|t| t.id != id));
        })
        .forget();
    }

    pub fn error(&self, text: impl Into<String>) {
        self.push(text, ToastLevel::Error);
    }

    pub fn success(&self, text: impl Into<String>) {
        self.push(text, ToastLevel::Success);
    }

    pub fn dismiss(&self, id: u32) {
        self.items.update(|list| list.retain(|t| t.id != id));
    }
}

#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<Toasts>();
    view! {
        <div class="toast-container position-fixed top-0 end-0 p-3">
            <For
                each=move || toasts.items.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=format!("toast show text-white {}", toast.level.css_class()) role="alert">
                            <div class="toast-body d-flex align-items-center">
                                {toast.text.clone()}
                                <button
                                    type="button"
                                    class="btn-close btn-close-white ms-auto"
                                    on:click=move |_| toasts.dismiss(id)
                                />
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}
