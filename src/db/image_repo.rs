/// Image repository - database operations for motion capture records
use crate::error::Result;
use crate::models::MotionImage;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

/// Record an uploaded capture. Called only after the blob write succeeded.
pub async fn insert_image(pool: &PgPool, image_url: &str, captured_at: DateTime<Utc>) -> Result<()> {
    sqlx::query("INSERT INTO motion_images (image_url, captured_at) VALUES ($1, $2)")
        .bind(image_url)
        .bind(captured_at)
        .execute(pool)
        .await?;
    Ok(())
}

/// All captures, most recent first. No pagination.
pub async fn list_images(pool: &PgPool) -> Result<Vec<MotionImage>> {
    let images = sqlx::query_as::<_, MotionImage>(
        r#"
        SELECT id, image_url, captured_at
        FROM motion_images
        ORDER BY captured_at DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(images)
}
