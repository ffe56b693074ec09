//! Form field primitives
//!
//! `FieldModel` is the reactive state for one input: current text, a
//! tri-state validity flag (untouched / valid / invalid), and the message
//! shown in the adjacent feedback element.

use leptos::prelude::*;

use dealer_forms_common::fields::{self, FieldKind, Verdict};

use crate::utility::current_year;

#[derive(Clone, Copy)]
pub struct FieldModel {
    pub value: RwSignal<String>,
    pub valid: RwSignal<Option<bool>>,
    pub message: RwSignal<String>,
}

impl Default for FieldModel {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldModel {
    pub fn new() -> Self {
        Self {
            value: RwSignal::new(String::new()),
            valid: RwSignal::new(None),
            message: RwSignal::new(String::new()),
        }
    }

    /// Write a verdict back into the model.
    pub fn apply(&self, verdict: Verdict) {
        self.value.set(verdict.value);
        self.valid.set(Some(verdict.is_valid));
        self.message.set(verdict.message.unwrap_or_default());
    }

    /// Bootstrap-style validity classes, mutually exclusive.
    fn control_class(&self, base: &'static str) -> String {
        match self.valid.get() {
            None => base.to_string(),
            Some(true) => format!("{base} is-valid"),
            Some(false) => format!("{base} is-invalid"),
        }
    }
}

#[component]
pub fn TextField<FE, FB>(
    model: FieldModel,
    kind: FieldKind,
    id: &'static str,
    label: &'static str,
    on_edit: FE,
    on_blur: FB,
    #[prop(optional)] required: bool,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(default = "")] placeholder: &'static str,
) -> impl IntoView
where
    FE: Fn() + 'static + Clone,
    FB: Fn() + 'static + Clone,
{
    let on_input = {
        let on_edit = on_edit.clone();
        move |ev| {
            let raw = event_target_value(&ev);
            if kind == FieldKind::Email {
                // Email only validates on blur; keep the raw text.
                model.value.set(raw);
            } else {
                // The required check runs live too, so clearing a
                // required field flags it right away.
                model.apply(fields::validate(kind, &raw, required, current_year()));
            }
            on_edit();
        }
    };

    let handle_blur = {
        let on_blur = on_blur.clone();
        move |_| {
            if kind == FieldKind::Email {
                let raw = model.value.get_untracked();
                model.apply(fields::validate(kind, &raw, required, current_year()));
            }
            on_blur();
        }
    };

    view! {
        <div class="mb-3">
            <label class="form-label" for=id>{label}</label>
            <input
                type=input_type
                class=move || model.control_class("form-control")
                id=id
                name=id
                placeholder=placeholder
                required=required
                prop:value=move || model.value.get()
                on:input=on_input
                on:blur=handle_blur
            />
            <div class="invalid-feedback">{move || model.message.get()}</div>
        </div>
    }
}

#[component]
pub fn SelectField<FE>(
    model: FieldModel,
    id: &'static str,
    label: &'static str,
    options: &'static [(&'static str, &'static str)],
    on_edit: FE,
    #[prop(optional)] required: bool,
) -> impl IntoView
where
    FE: Fn() + 'static + Clone,
{
    let on_change = {
        let on_edit = on_edit.clone();
        move |ev| {
            let raw = event_target_value(&ev);
            model.apply(fields::validate(
                FieldKind::Text,
                &raw,
                required,
                current_year(),
            ));
            on_edit();
        }
    };

    let option_views = options
        .iter()
        .map(|(value, text)| {
            let value = *value;
            view! {
                <option value=value selected=move || model.value.get() == value>
                    {*text}
                </option>
            }
        })
        .collect_view();

    view! {
        <div class="mb-3">
            <label class="form-label" for=id>{label}</label>
            <select
                class=move || model.control_class("form-select")
                id=id
                name=id
                required=required
                prop:value=move || model.value.get()
                on:change=on_change
            >
                <option value="">"Select..."</option>
                {option_views}
            </select>
            <div class="invalid-feedback">{move || model.message.get()}</div>
        </div>
    }
}

#[component]
pub fn TextAreaField<FE>(
    model: FieldModel,
    id: &'static str,
    label: &'static str,
    on_edit: FE,
    #[prop(default = 4)] rows: u32,
) -> impl IntoView
where
    FE: Fn() + 'static + Clone,
{
    let on_input = {
        let on_edit = on_edit.clone();
        move |ev| {
            model.value.set(event_target_value(&ev));
            on_edit();
        }
    };

    view! {
        <div class="mb-3">
            <label class="form-label" for=id>{label}</label>
            <textarea
                class="form-control"
                id=id
                name=id
                rows=rows
                prop:value=move || model.value.get()
                on:input=on_input
            ></textarea>
        </div>
    }
}
