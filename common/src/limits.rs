//! Upload and validation limits shared across the form layer

/// Number of upload slots on the wizard form
pub const SLOT_COUNT: usize = 6;

/// Maximum images accepted by the bulk file input
pub const MAX_IMAGES: usize = 6;

/// Per-file cap for the slot upload path (5 MiB)
pub const SLOT_MAX_BYTES: u64 = 5 * 1024 * 1024;

/// Per-file cap for the bulk upload path, matches the server's
/// MAX_CONTENT_LENGTH (16 MiB)
pub const BULK_MAX_BYTES: u64 = 16 * 1024 * 1024;

/// MIME types accepted by the bulk validator
pub const ALLOWED_IMAGE_TYPES: [&str; 4] =
    ["image/jpeg", "image/jpg", "image/png", "image/gif"];

/// Exact VIN length
pub const VIN_LENGTH: usize = 17;

/// Oldest model year accepted
pub const MIN_YEAR: i32 = 1990;

/// Auto-save debounce window in milliseconds
pub const AUTOSAVE_DEBOUNCE_MS: u32 = 1000;

/// Search box debounce window in milliseconds
pub const SEARCH_DEBOUNCE_MS: u32 = 500;

/// Toast lifetime in milliseconds
pub const TOAST_LIFETIME_MS: u32 = 5000;

/// Submit button re-enable fallback in milliseconds
pub const SUBMIT_REENABLE_MS: u32 = 5000;

/// localStorage key for the vehicle form auto-save record
pub const AUTOSAVE_KEY: &str = "vehicle_form_autosave";
