//! Vehicle listing form
//!
//! Two renditions share the same field models: the four-step admin wizard
//! with the six-slot image grid (default) and the flat single-page form
//! with the bulk image input. Field formatting runs on every input event,
//! the submit gate re-validates everything, and non-file values auto-save
//! to localStorage on a one second debounce.

use gloo::timers::callback::Timeout;
use leptos::prelude::*;

use dealer_forms_common::fields::{compose_title, validate, FieldKind};
use dealer_forms_common::limits::{AUTOSAVE_DEBOUNCE_MS, AUTOSAVE_KEY, SUBMIT_REENABLE_MS};
use dealer_forms_common::{AutosaveRecord, Wizard};

use crate::autosave::FormAutosave;
use crate::components::bulk_upload::BulkUpload;
use crate::components::field::{FieldModel, SelectField, TextAreaField, TextField};
use crate::components::image_slots::ImageSlots;
use crate::components::toast::Toasts;
use crate::components::wizard::{StepNav, StepPane, WizardProgress};
use crate::utility;

const WIZARD_STEPS: [&str; 4] = ["step-basics", "step-details", "step-images", "step-review"];

const CATEGORY_OPTIONS: &[(&str, &str)] = &[
    ("sedan", "Sedan"),
    ("suv", "SUV"),
    ("truck", "Truck"),
    ("coupe", "Coupe"),
    ("van", "Van"),
];

const STATUS_OPTIONS: &[(&str, &str)] = &[
    ("available", "Available"),
    ("pending", "Sale Pending"),
    ("sold", "Sold"),
];

/// Reactive models for every named field on the form.
#[derive(Clone, Copy)]
pub struct VehicleFields {
    pub title: FieldModel,
    pub category: FieldModel,
    pub make: FieldModel,
    pub model: FieldModel,
    pub year: FieldModel,
    pub price: FieldModel,
    pub mileage: FieldModel,
    pub vin_number: FieldModel,
    pub odometer_reading: FieldModel,
    pub description: FieldModel,
    pub contact_name: FieldModel,
    pub contact_phone: FieldModel,
    pub contact_email: FieldModel,
    pub status: FieldModel,
}

impl Default for VehicleFields {
    fn default() -> Self {
        Self::new()
    }
}

impl VehicleFields {
    pub fn new() -> Self {
        Self {
            title: FieldModel::new(),
            category: FieldModel::new(),
            make: FieldModel::new(),
            model: FieldModel::new(),
            year: FieldModel::new(),
            price: FieldModel::new(),
            mileage: FieldModel::new(),
            vin_number: FieldModel::new(),
            odometer_reading: FieldModel::new(),
            description: FieldModel::new(),
            contact_name: FieldModel::new(),
            contact_phone: FieldModel::new(),
            contact_email: FieldModel::new(),
            status: FieldModel::new(),
        }
    }

    /// Every field with its name, formatting kind, and required flag, in
    /// document order. The submit gate walks this whole list.
    fn checklist(&self) -> [(&'static str, FieldKind, bool, FieldModel); 14] {
        [
            ("title", FieldKind::Text, true, self.title),
            ("category", FieldKind::Text, true, self.category),
            ("make", FieldKind::Text, true, self.make),
            ("model", FieldKind::Text, true, self.model),
            ("year", FieldKind::Year, true, self.year),
            ("price", FieldKind::Price, true, self.price),
            ("mileage", FieldKind::Mileage, true, self.mileage),
            ("vin_number", FieldKind::Vin, false, self.vin_number),
            ("odometer_reading", FieldKind::Text, false, self.odometer_reading),
            ("description", FieldKind::Text, false, self.description),
            ("contact_name", FieldKind::Text, true, self.contact_name),
            ("contact_phone", FieldKind::Phone, true, self.contact_phone),
            ("contact_email", FieldKind::Email, false, self.contact_email),
            ("status", FieldKind::Text, true, self.status),
        ]
    }

    fn snapshot(&self) -> AutosaveRecord {
        let mut record = AutosaveRecord::new();
        for (name, _, _, model) in self.checklist() {
            record.insert(name, &model.value.get_untracked());
        }
        record
    }

    fn restore(&self, record: &AutosaveRecord) {
        for (name, _, _, model) in self.checklist() {
            if let Some(value) = record.get(name) {
                model.value.set(value.to_string());
            }
        }
    }
}

#[component]
pub fn VehicleForm(#[prop(default = true)] wizard_mode: bool) -> impl IntoView {
    let toasts = expect_context::<Toasts>();
    let fields = VehicleFields::new();
    // The debouncer inside holds a timer handle, so the autosave sits in
    // local arena storage behind a copyable handle.
    let autosave = StoredValue::new_local(FormAutosave::new(AUTOSAVE_KEY, AUTOSAVE_DEBOUNCE_MS));
    let (submitting, set_submitting) = signal(false);

    if let Some(record) = autosave.with_value(FormAutosave::restore) {
        fields.restore(&record);
    }

    let on_edit = move || autosave.with_value(|autosave| autosave.schedule_save(fields.snapshot()));

    // Compose "{year} {make} {model}" into an empty title on blur.
    let fill_title = move || {
        if !fields.title.value.with_untracked(|title| title.is_empty()) {
            return;
        }
        let composed = compose_title(
            &fields.year.value.get_untracked(),
            &fields.make.value.get_untracked(),
            &fields.model.value.get_untracked(),
        );
        if let Some(title) = composed {
            fields.title.value.set(title);
        }
    };

    // Seed an empty odometer reading from mileage on blur.
    let fill_odometer = move || {
        let mileage = fields.mileage.value.get_untracked();
        let odometer_empty = fields
            .odometer_reading
            .value
            .with_untracked(|odometer| odometer.is_empty());
        if mileage.is_empty() || !odometer_empty {
            return;
        }
        fields.odometer_reading.value.set(mileage);
    };

    let no_blur = move || {};

    let on_submit = {
        move |ev: web_sys::SubmitEvent| {
            let mut first_invalid = None;
            for (id, kind, required, model) in fields.checklist() {
                let verdict = validate(
                    kind,
                    &model.value.get_untracked(),
                    required,
                    utility::current_year(),
                );
                let ok = verdict.is_valid;
                model.apply(verdict);
                if !ok && first_invalid.is_none() {
                    first_invalid = Some(id);
                }
            }

            if let Some(id) = first_invalid {
                ev.prevent_default();
                ev.stop_propagation();
                utility::focus_field(id);
                toasts.error("Please fill in all required fields correctly");
                return;
            }

            autosave.with_value(FormAutosave::clear);
            set_submitting.set(true);
            Timeout::new(SUBMIT_REENABLE_MS, move || set_submitting.set(false)).forget();
        }
    };

    let submit_button = move || {
        view! {
            <button
                type="submit"
                class="btn btn-primary"
                disabled=move || submitting.get()
            >
                {move || {
                    if submitting.get() {
                        "Processing..."
                    } else {
                        "Save Vehicle"
                    }
                }}
            </button>
        }
    };

    let basics = move || {
        view! {
            <TextField
                model=fields.title
                kind=FieldKind::Text
                id="title"
                label="Vehicle Title"
                required=true
                placeholder="2020 Toyota Camry"
                on_edit=on_edit
                on_blur=no_blur
            />
            <SelectField
                model=fields.category
                id="category"
                label="Category"
                options=CATEGORY_OPTIONS
                required=true
                on_edit=on_edit
            />
            <div class="row">
                <div class="col-md-4">
                    <TextField
                        model=fields.make
                        kind=FieldKind::Text
                        id="make"
                        label="Make"
                        required=true
                        on_edit=on_edit
                        on_blur=fill_title
                    />
                </div>
                <div class="col-md-4">
                    <TextField
                        model=fields.model
                        kind=FieldKind::Text
                        id="model"
                        label="Model"
                        required=true
                        on_edit=on_edit
                        on_blur=fill_title
                    />
                </div>
                <div class="col-md-4">
                    <TextField
                        model=fields.year
                        kind=FieldKind::Year
                        id="year"
                        label="Year"
                        required=true
                        input_type="number"
                        on_edit=on_edit
                        on_blur=fill_title
                    />
                </div>
            </div>
        }
    };

    let details = move || {
        view! {
            <div class="row">
                <div class="col-md-6">
                    <TextField
                        model=fields.price
                        kind=FieldKind::Price
                        id="price"
                        label="Price ($)"
                        required=true
                        on_edit=on_edit
                        on_blur=no_blur
                    />
                </div>
                <div class="col-md-6">
                    <TextField
                        model=fields.mileage
                        kind=FieldKind::Mileage
                        id="mileage"
                        label="Mileage (miles)"
                        required=true
                        on_edit=on_edit
                        on_blur=fill_odometer
                    />
                </div>
            </div>
            <div class="row">
                <div class="col-md-6">
                    <TextField
                        model=fields.vin_number
                        kind=FieldKind::Vin
                        id="vin_number"
                        label="VIN"
                        placeholder="17 characters"
                        on_edit=on_edit
                        on_blur=no_blur
                    />
                </div>
                <div class="col-md-6">
                    <TextField
                        model=fields.odometer_reading
                        kind=FieldKind::Text
                        id="odometer_reading"
                        label="Odometer Reading"
                        on_edit=on_edit
                        on_blur=no_blur
                    />
                </div>
            </div>
            <TextAreaField
                model=fields.description
                id="description"
                label="Description"
                on_edit=on_edit
            />
            <SelectField
                model=fields.status
                id="status"
                label="Status"
                options=STATUS_OPTIONS
                required=true
                on_edit=on_edit
            />
        }
    };

    let contact = move || {
        view! {
            <TextField
                model=fields.contact_name
                kind=FieldKind::Text
                id="contact_name"
                label="Contact Name"
                required=true
                on_edit=on_edit
                on_blur=no_blur
            />
            <TextField
                model=fields.contact_phone
                kind=FieldKind::Phone
                id="contact_phone"
                label="Contact Phone"
                required=true
                input_type="tel"
                placeholder="(555) 123-4567"
                on_edit=on_edit
                on_blur=no_blur
            />
            <TextField
                model=fields.contact_email
                kind=FieldKind::Email
                id="contact_email"
                label="Contact Email"
                input_type="email"
                on_edit=on_edit
                on_blur=no_blur
            />
        }
    };

    let body = if wizard_mode {
        let wizard = RwSignal::new(
            Wizard::new(WIZARD_STEPS).expect("wizard steps are non-empty"),
        );
        view! {
            <WizardProgress wizard=wizard />
            <div class="tab-content">
                <StepPane id="step-basics" wizard=wizard>
                    <h2 class="h5 mb-3">"Basics"</h2>
                    {basics()}
                    <StepNav wizard=wizard next="step-details" />
                </StepPane>
                <StepPane id="step-details" wizard=wizard>
                    <h2 class="h5 mb-3">"Details"</h2>
                    {details()}
                    <StepNav wizard=wizard prev="step-basics" next="step-images" />
                </StepPane>
                <StepPane id="step-images" wizard=wizard>
                    <h2 class="h5 mb-3">"Photos"</h2>
                    <ImageSlots />
                    <StepNav wizard=wizard prev="step-details" next="step-review" />
                </StepPane>
                <StepPane id="step-review" wizard=wizard>
                    <h2 class="h5 mb-3">"Contact & Review"</h2>
                    {contact()}
                    <p class="text-muted">
                        {move || {
                            let title = fields.title.value.get();
                            let price = fields.price.value.get();
                            if title.is_empty() {
                                "Complete the earlier steps, then save.".to_string()
                            } else {
                                format!("Listing: {title} at ${price}")
                            }
                        }}
                    </p>
                    <StepNav wizard=wizard prev="step-images" />
                    {submit_button()}
                </StepPane>
            </div>
        }
        .into_any()
    } else {
        view! {
            {basics()}
            {details()}
            {contact()}
            <BulkUpload />
            {submit_button()}
        }
        .into_any()
    };

    view! {
        <form
            id="vehicleForm"
            method="post"
            action="/admin/vehicles"
            enctype="multipart/form-data"
            novalidate=true
            on:submit=on_submit
        >
            {body}
        </form>
    }
}
