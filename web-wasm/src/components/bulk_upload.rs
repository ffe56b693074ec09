//! Bulk multi-file image intake
//!
//! One `<input multiple>` with thumbnails and whole-batch validation.
//! Thumbnails render for at most the first six entries; the cap counts
//! entries before any per-file type filtering, so a mixed selection can
//! leave later images unpreviewed. The first rule violation is the one
//! reported, and thumbnails rendered before the failure stay in place.

use leptos::html;
use leptos::logging;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{File, FileList, FileReader};

use dealer_forms_common::images::{check_batch, preview_count, FileMeta};
use dealer_forms_common::limits::MAX_IMAGES;

#[derive(Clone, PartialEq, Eq)]
struct Thumbnail {
    id: String,
    name: String,
    data_url: String,
}

#[component]
pub fn BulkUpload() -> impl IntoView {
    let thumbnails = RwSignal::new(Vec::<Thumbnail>::new());
    let (error, set_error) = signal(None::<String>);
    let (overflow, set_overflow) = signal(false);
    let input_ref = NodeRef::<html::Input>::new();

    let on_change = move |_| {
        let Some(list) = input_ref.get_untracked().and_then(|input| input.files()) else {
            return;
        };
        thumbnails.update(Vec::clear);

        let total = list.length() as usize;
        set_overflow.set(total > MAX_IMAGES);

        let metas = collect_metas(&list);
        match check_batch(&metas) {
            Ok(()) => set_error.set(None),
            Err(err) => set_error.set(Some(err.to_string())),
        }

        for i in 0..preview_count(total) {
            let Some(file) = list.get(i as u32) else {
                continue;
            };
            if file.type_().starts_with("image/") {
                read_thumbnail(file, thumbnails);
            }
        }
    };

    view! {
        <div class="mb-3">
            <label class="form-label" for="images">"Vehicle Images"</label>
            <input
                type="file"
                class=move || {
                    if error.get().is_some() {
                        "form-control is-invalid"
                    } else {
                        "form-control"
                    }
                }
                id="images"
                name="images"
                multiple=true
                accept="image/*"
                node_ref=input_ref
                on:change=on_change
            />
            <div class="invalid-feedback d-block" id="image-error">
                {move || error.get().unwrap_or_default()}
            </div>
            <small
                class="text-warning"
                style:display=move || if overflow.get() { "block" } else { "none" }
            >
                {format!("Note: Only first {MAX_IMAGES} images will be uploaded.")}
            </small>
            <div class="row g-2 mt-2" id="image-preview-container">
                <For
                    each=move || thumbnails.get()
                    key=|thumb| thumb.id.clone()
                    children=move |thumb| {
                        view! {
                            <div class="col-4 col-md-3">
                                <div class="position-relative">
                                    <img
                                        src=thumb.data_url.clone()
                                        class="img-thumbnail w-100"
                                        alt=thumb.name.clone()
                                    />
                                    <small class="text-muted d-block mt-1">
                                        {truncate_name(&thumb.name)}
                                    </small>
                                </div>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}

fn collect_metas(list: &FileList) -> Vec<FileMeta> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|file| FileMeta::new(file.name(), file.type_(), file.size() as u64))
        .collect()
}

fn read_thumbnail(file: File, thumbnails: RwSignal<Vec<Thumbnail>>) {
    let Ok(reader) = FileReader::new() else {
        logging::warn!("FileReader unavailable");
        return;
    };

    let name = file.name();
    let reader_clone = reader.clone();
    let closure = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        let Ok(result) = reader_clone.result() else {
            return;
        };
        let Some(data_url) = result.as_string() else {
            return;
        };
        thumbnails.update(|list| {
            list.push(Thumbnail {
                id: format!("{}-{}", name, js_sys::Date::now()),
                name: name.clone(),
                data_url,
            });
        });
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    let _ = reader.read_as_data_url(&file);
}

fn truncate_name(name: &str) -> String {
    if name.chars().count() <= 15 {
        name.to_string()
    } else {
        let short: String = name.chars().take(15).collect();
        format!("{short}...")
    }
}
