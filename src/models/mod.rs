/// Data models for the capture service
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A stored motion capture, one row per uploaded image.
///
/// Rows are immutable after insert and never deleted by this service.
#[derive(Debug, Clone, FromRow)]
pub struct MotionImage {
    pub id: i64,
    pub image_url: String,
    pub captured_at: DateTime<Utc>,
}
