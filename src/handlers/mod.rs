/// HTTP endpoint handlers
pub mod captures;
pub mod images;

pub use captures::{check_trigger, health, trigger_capture};
pub use images::{list_images, upload_image};
