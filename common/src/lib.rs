//! Dealer Forms Common Library
//!
//! Browser-independent form logic shared with the WASM front end:
//! field formatting and validation, upload-slot bookkeeping, bulk image
//! batch checks, the auto-save record, and wizard step state.

pub mod autosave;
pub mod error;
pub mod fields;
pub mod images;
pub mod limits;
pub mod slots;
pub mod wizard;

pub use autosave::AutosaveRecord;
pub use error::{Error, Result};
pub use fields::{validate, FieldKind, Verdict};
pub use images::{check_batch, check_slot_file, FileMeta, ImageError};
pub use slots::SlotSet;
pub use wizard::Wizard;
