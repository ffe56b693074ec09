//! Six-slot image upload grid
//!
//! Each slot is a click-to-browse and drop target bound to one single-file
//! input. Accepted files are previewed via FileReader and mirrored into
//! the hidden multi-file `images` input the form posts. The `SlotSet`
//! holding File handles lives in arena-local storage; only preview data
//! URLs are reactive.
//!
//! A replaced selection whose FileReader is still in flight can land
//! after the newer one; there is no cancellation for in-flight reads.

use leptos::html;
use leptos::logging;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{DataTransfer, File, FileReader};

use dealer_forms_common::images::{check_slot_file, FileMeta};
use dealer_forms_common::limits::SLOT_COUNT;
use dealer_forms_common::SlotSet;

use crate::components::toast::Toasts;

/// An accepted file plus what we know about it
pub struct SlotImage {
    pub file: File,
    pub meta: FileMeta,
}

/// Copyable handle to the slot state; `File` is not `Send`, so the set
/// sits in local arena storage.
type SharedSlots = StoredValue<SlotSet<SlotImage>, LocalStorage>;

#[component]
pub fn ImageSlots() -> impl IntoView {
    let files: SharedSlots = StoredValue::new_local(SlotSet::new());
    let previews = RwSignal::new(vec![None::<String>; SLOT_COUNT]);
    let dragover = RwSignal::new(None::<usize>);
    let form_input = NodeRef::<html::Input>::new();

    let slots = (0..SLOT_COUNT)
        .map(|index| {
            view! {
                <UploadSlot
                    index=index
                    files=files
                    previews=previews
                    dragover=dragover
                    form_input=form_input
                />
            }
        })
        .collect_view();

    view! {
        <div class="row g-3">
            {slots}
            <input
                type="file"
                name="images"
                id="images"
                multiple=true
                accept="image/*"
                class="d-none"
                node_ref=form_input
            />
        </div>
    }
}

#[component]
fn UploadSlot(
    index: usize,
    files: SharedSlots,
    previews: RwSignal<Vec<Option<String>>>,
    dragover: RwSignal<Option<usize>>,
    form_input: NodeRef<html::Input>,
) -> impl IntoView {
    let toasts = expect_context::<Toasts>();
    let slot_input = NodeRef::<html::Input>::new();

    let slot_number = index + 1;
    let slot_id = format!("image-slot-{slot_number}");
    let input_id = format!("image-input-{slot_number}");
    let preview_id = format!("image-preview-{slot_number}");

    let occupied = move || previews.with(|p| p[index].is_some());

    let accept_file = move |file: File| {
        let meta = FileMeta::new(file.name(), file.type_(), file.size() as u64);
        if let Err(err) = check_slot_file(&meta) {
            toasts.error(err.to_string());
            reset_input(slot_input);
            return;
        }
        read_into_slot(file, meta, index, files, previews, form_input);
    };

    let on_change = move |_| {
        let Some(file) = slot_input
            .get_untracked()
            .and_then(|input| input.files())
            .and_then(|list| list.get(0))
        else {
            return;
        };
        accept_file(file);
    };

    let on_click = move |_| {
        if let Some(input) = slot_input.get_untracked() {
            input.click();
        }
    };

    let on_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        dragover.set(None);
        // First dropped file only; a slot holds one image.
        let Some(file) = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|list| list.get(0))
        else {
            return;
        };
        accept_file(file);
    };

    let on_remove = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        let mut cleared = Ok(None);
        files.update_value(|slots| cleared = slots.clear_slot(index));
        if let Err(err) = cleared {
            logging::warn!("slot remove failed: {err}");
            return;
        }
        previews.update(|p| p[index] = None);
        reset_input(slot_input);
        sync_form_input(files, form_input);
    };

    view! {
        <div class="col-6 col-md-4">
            <div
                id=slot_id
                class="image-upload-slot position-relative text-center border rounded p-2"
                class:dragover=move || dragover.get() == Some(index)
                class:filled=occupied
                on:click=on_click
                on:dragover=move |ev: web_sys::DragEvent| {
                    ev.prevent_default();
                    ev.stop_propagation();
                    dragover.set(Some(index));
                }
                on:dragleave=move |ev: web_sys::DragEvent| {
                    ev.prevent_default();
                    ev.stop_propagation();
                    dragover.set(None);
                }
                on:drop=on_drop
            >
                <div
                    class="slot-content py-3"
                    style:display=move || if occupied() { "none" } else { "block" }
                >
                    <p class="mb-1 fw-bold">"Click to upload"</p>
                    <small class="text-muted d-block">"or drag and drop image here"</small>
                    <small class="text-muted d-block mt-1">"Max 5MB, JPG, PNG, GIF"</small>
                </div>
                <img
                    id=preview_id
                    class="img-fluid rounded"
                    alt=format!("Slot {slot_number} preview")
                    style:display=move || if occupied() { "block" } else { "none" }
                    src=move || previews.with(|p| p[index].clone().unwrap_or_default())
                />
                <button
                    type="button"
                    class="btn btn-danger btn-sm position-absolute top-0 end-0 remove-image-btn"
                    style:display=move || if occupied() { "block" } else { "none" }
                    on:click=on_remove
                >
                    "\u{00d7}"
                </button>
                <input
                    type="file"
                    accept="image/*"
                    id=input_id
                    class="d-none"
                    node_ref=slot_input
                    on:change=on_change
                    on:click=move |ev: web_sys::MouseEvent| ev.stop_propagation()
                />
            </div>
        </div>
    }
}

/// Read the accepted file to a data URL, then commit it to its slot and
/// refresh the hidden form input.
fn read_into_slot(
    file: File,
    meta: FileMeta,
    index: usize,
    files: SharedSlots,
    previews: RwSignal<Vec<Option<String>>>,
    form_input: NodeRef<html::Input>,
) {
    let Ok(reader) = FileReader::new() else {
        logging::warn!("FileReader unavailable");
        return;
    };

    let source = file.clone();
    let reader_clone = reader.clone();
    let closure = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        let Ok(result) = reader_clone.result() else {
            return;
        };
        let Some(data_url) = result.as_string() else {
            return;
        };
        let mut stored = Ok(());
        files.update_value(|slots| {
            stored = slots.set_slot(
                index,
                SlotImage {
                    file: file.clone(),
                    meta: meta.clone(),
                },
            );
        });
        match stored {
            Ok(()) => {
                previews.update(|p| p[index] = Some(data_url));
                sync_form_input(files, form_input);
            }
            Err(err) => logging::warn!("slot store failed: {err}"),
        }
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    let _ = reader.read_as_data_url(&source);
}

/// Rebuild the hidden multi-file input from the compacted slot set.
fn sync_form_input(files: SharedSlots, form_input: NodeRef<html::Input>) {
    let Some(input) = form_input.get_untracked() else {
        return;
    };
    let Ok(transfer) = DataTransfer::new() else {
        logging::warn!("DataTransfer unavailable");
        return;
    };
    files.with_value(|slots| {
        for image in slots.compacted() {
            if let Err(err) = transfer.items().add_with_file(&image.file) {
                logging::warn!("could not stage {}: {err:?}", image.meta.name);
            }
        }
    });
    input.set_files(transfer.files().as_ref());
}

fn reset_input(input_ref: NodeRef<html::Input>) {
    if let Some(input) = input_ref.get_untracked() {
        input.set_value("");
    }
}
