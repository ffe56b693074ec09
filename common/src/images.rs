//! Image acceptance rules
//!
//! Two intake paths with different caps: the per-slot path (any image/*
//! type, 5 MiB) and the bulk multi-file path (explicit type list, 16 MiB,
//! at most six files). Messages surface verbatim in toasts and inline
//! errors.

use thiserror::Error;

use crate::limits::{ALLOWED_IMAGE_TYPES, BULK_MAX_BYTES, MAX_IMAGES, SLOT_MAX_BYTES};

/// What the browser tells us about a selected file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMeta {
    pub name: String,
    pub mime: String,
    pub size: u64,
}

impl FileMeta {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            size,
        }
    }

    pub fn is_image(&self) -> bool {
        self.mime.starts_with("image/")
    }
}

/// Why a selection was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImageError {
    #[error("Please select a valid image file.")]
    NotAnImage,

    #[error("Image size should be less than 5MB.")]
    SlotTooLarge,

    #[error("Maximum {0} images allowed")]
    TooMany(usize),

    #[error("Invalid file type: {0}. Only JPG, PNG, and GIF are allowed.")]
    InvalidType(String),

    #[error("File too large: {0}. Maximum size is 16MB.")]
    TooLarge(String),
}

/// Acceptance check for a single file dropped or picked into a slot.
pub fn check_slot_file(meta: &FileMeta) -> Result<(), ImageError> {
    if !meta.is_image() {
        return Err(ImageError::NotAnImage);
    }
    if meta.size > SLOT_MAX_BYTES {
        return Err(ImageError::SlotTooLarge);
    }
    Ok(())
}

/// Whole-batch check for the bulk multi-file input. First violation wins.
pub fn check_batch(files: &[FileMeta]) -> Result<(), ImageError> {
    if files.len() > MAX_IMAGES {
        return Err(ImageError::TooMany(MAX_IMAGES));
    }
    for file in files {
        if !ALLOWED_IMAGE_TYPES.contains(&file.mime.as_str()) {
            return Err(ImageError::InvalidType(file.name.clone()));
        }
        if file.size > BULK_MAX_BYTES {
            return Err(ImageError::TooLarge(file.name.clone()));
        }
    }
    Ok(())
}

/// How many entries the bulk preview renders. The cap is applied before
/// any per-file type filtering, so non-image entries still count.
pub fn preview_count(total: usize) -> usize {
    total.min(MAX_IMAGES)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jpeg(name: &str, size: u64) -> FileMeta {
        FileMeta::new(name, "image/jpeg", size)
    }

    #[test]
    fn test_slot_accepts_small_image() {
        assert_eq!(check_slot_file(&jpeg("front.jpg", 5 * 1024 * 1024)), Ok(()));
    }

    #[test]
    fn test_slot_rejects_oversize() {
        let err = check_slot_file(&jpeg("front.jpg", 6 * 1024 * 1024)).unwrap_err();
        assert_eq!(err, ImageError::SlotTooLarge);
        assert_eq!(err.to_string(), "Image size should be less than 5MB.");
    }

    #[test]
    fn test_slot_rejects_non_image() {
        let meta = FileMeta::new("listing.pdf", "application/pdf", 1024);
        assert_eq!(check_slot_file(&meta), Err(ImageError::NotAnImage));
    }

    #[test]
    fn test_batch_rejects_seven_files() {
        let files: Vec<FileMeta> = (0..7).map(|i| jpeg(&format!("{i}.jpg"), 100)).collect();
        let err = check_batch(&files).unwrap_err();
        assert_eq!(err, ImageError::TooMany(6));
        assert_eq!(err.to_string(), "Maximum 6 images allowed");
    }

    #[test]
    fn test_batch_rejects_bad_type_first() {
        let files = vec![
            jpeg("a.jpg", 100),
            FileMeta::new("b.webp", "image/webp", 100),
            jpeg("c.jpg", 100 * 1024 * 1024),
        ];
        assert_eq!(
            check_batch(&files),
            Err(ImageError::InvalidType("b.webp".into()))
        );
    }

    #[test]
    fn test_batch_rejects_over_16mib() {
        let files = vec![jpeg("big.jpg", 16 * 1024 * 1024 + 1)];
        assert_eq!(check_batch(&files), Err(ImageError::TooLarge("big.jpg".into())));
    }

    #[test]
    fn test_batch_accepts_six_valid() {
        let files: Vec<FileMeta> = (0..6).map(|i| jpeg(&format!("{i}.jpg"), 1024)).collect();
        assert_eq!(check_batch(&files), Ok(()));
    }

    #[test]
    fn test_preview_count_caps_at_six() {
        assert_eq!(preview_count(2), 2);
        assert_eq!(preview_count(6), 6);
        assert_eq!(preview_count(9), 6);
    }
}
