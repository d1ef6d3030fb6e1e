/// Capture service - orchestrates the trigger mailbox, blob store, and
/// image records
use crate::db::{control_repo, image_repo};
use crate::error::{AppError, Result};
use crate::models::MotionImage;
use crate::storage::BlobStore;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

/// Blob key for a capture taken at `captured_at`.
///
/// Microsecond precision makes collisions practically impossible at the
/// expected capture rate of one every few seconds.
pub fn capture_filename(captured_at: DateTime<Utc>) -> String {
    format!(
        "motion-capture-{}.jpg",
        captured_at.format("%Y%m%d_%H%M%S_%6f")
    )
}

#[derive(Clone)]
pub struct CaptureService {
    pool: PgPool,
    blob: BlobStore,
}

impl CaptureService {
    pub fn new(pool: PgPool, blob: BlobStore) -> Self {
        Self { pool, blob }
    }

    /// Request a manual capture by asserting the trigger flag.
    pub async fn request_capture(&self) -> Result<()> {
        control_repo::set_trigger(&self.pool).await
    }

    /// Poll the trigger flag, clearing it when set. Returns the pre-read
    /// value.
    pub async fn poll_trigger(&self) -> Result<bool> {
        control_repo::take_trigger(&self.pool).await
    }

    /// Store an uploaded capture and record it.
    ///
    /// The blob write happens first; if the insert then fails, the blob
    /// stays behind as an orphan. No rollback or cleanup is attempted.
    pub async fn upload_image(&self, bytes: Vec<u8>) -> Result<String> {
        if bytes.is_empty() {
            return Err(AppError::BadRequest("no image data received".to_string()));
        }

        let captured_at = Utc::now();
        let key = capture_filename(captured_at);

        let image_url = self.blob.put_public_object(&key, bytes, "image/jpeg").await?;

        if let Err(err) = image_repo::insert_image(&self.pool, &image_url, captured_at).await {
            tracing::error!(%image_url, "capture stored but insert failed, blob orphaned: {}", err);
            return Err(err);
        }

        Ok(image_url)
    }

    /// All captures, most recent first.
    pub async fn list_images(&self) -> Result<Vec<MotionImage>> {
        image_repo::list_images(&self.pool).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn filename_embeds_instant_at_microsecond_precision() {
        let at = Utc
            .with_ymd_and_hms(2024, 3, 5, 7, 9, 11)
            .unwrap()
            .checked_add_signed(chrono::Duration::microseconds(123_456))
            .unwrap();
        assert_eq!(
            capture_filename(at),
            "motion-capture-20240305_070911_123456.jpg"
        );
    }

    #[test]
    fn filename_pads_fractional_seconds_to_six_digits() {
        let at = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(
            capture_filename(at),
            "motion-capture-20241231_235959_000000.jpg"
        );
    }
}
