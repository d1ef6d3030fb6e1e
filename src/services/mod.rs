/// Service layer
pub mod capture;

pub use capture::{capture_filename, CaptureService};
