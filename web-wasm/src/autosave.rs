//! Debounced localStorage persistence for form fields
//!
//! The record is overwritten whole on each save and deleted on a
//! successful submit. A corrupt record is logged and treated as absent.

use dealer_forms_common::AutosaveRecord;
use gloo::storage::{LocalStorage, Storage};
use leptos::logging;

use crate::debounce::Debouncer;

#[derive(Clone)]
pub struct FormAutosave {
    key: &'static str,
    debouncer: Debouncer,
}

impl FormAutosave {
    pub fn new(key: &'static str, delay_ms: u32) -> Self {
        Self {
            key,
            debouncer: Debouncer::new(delay_ms),
        }
    }

    /// Load the saved record, if any survives parsing.
    pub fn restore(&self) -> Option<AutosaveRecord> {
        let raw = LocalStorage::raw().get_item(self.key).ok().flatten()?;
        match AutosaveRecord::from_json(&raw) {
            Ok(record) if !record.is_empty() => Some(record),
            Ok(_) => None,
            Err(err) => {
                logging::warn!("Failed to load auto-saved data: {err}");
                None
            }
        }
    }

    /// Persist `record` once the debounce window closes.
    pub fn schedule_save(&self, record: AutosaveRecord) {
        let key = self.key;
        self.debouncer.schedule(move || write_record(key, &record));
    }

    /// Drop the stored record and any save still pending.
    pub fn clear(&self) {
        self.debouncer.cancel();
        LocalStorage::delete(self.key);
    }
}

fn write_record(key: &str, record: &AutosaveRecord) {
    match record.to_json() {
        Ok(json) => {
            if let Err(err) = LocalStorage::raw().set_item(key, &json) {
                logging::warn!("auto-save write failed: {err:?}");
            }
        }
        Err(err) => logging::warn!("auto-save serialization failed: {err}"),
    }
}
