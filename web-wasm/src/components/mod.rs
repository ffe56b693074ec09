pub mod back_to_top;
pub mod bulk_upload;
pub mod field;
pub mod header;
pub mod image_slots;
pub mod search_bar;
pub mod toast;
pub mod vehicle_form;
pub mod wizard;
