/// Database access layer
///
/// Schema initialization plus the two repositories: motion image records
/// and the single-row camera control flag.
use crate::error::Result;
use sqlx::PgPool;

pub mod control_repo;
pub mod image_repo;

const CREATE_MOTION_IMAGES: &str = r#"
CREATE TABLE IF NOT EXISTS motion_images (
    id          BIGSERIAL PRIMARY KEY,
    image_url   TEXT NOT NULL,
    captured_at TIMESTAMPTZ NOT NULL
)
"#;

const CREATE_CAMERA_CONTROL: &str = r#"
CREATE TABLE IF NOT EXISTS camera_control (
    id              INT PRIMARY KEY,
    trigger_capture BOOLEAN NOT NULL DEFAULT FALSE
)
"#;

// Conflict-tolerant seed keeps the id = 1 invariant across restarts.
const SEED_CONTROL_ROW: &str = r#"
INSERT INTO camera_control (id, trigger_capture) VALUES (1, FALSE)
ON CONFLICT (id) DO NOTHING
"#;

/// Create tables if absent and seed the control row.
///
/// Idempotent; runs once at startup against the pool.
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(CREATE_MOTION_IMAGES).execute(pool).await?;
    sqlx::query(CREATE_CAMERA_CONTROL).execute(pool).await?;
    sqlx::query(SEED_CONTROL_ROW).execute(pool).await?;
    Ok(())
}
