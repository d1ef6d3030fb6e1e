/// Camera control repository - the single-slot trigger mailbox
///
/// One row (id = 1) holds a boolean "capture requested" flag. The flag is
/// overwritten, not queued: a second trigger before the first poll is
/// absorbed.
use crate::error::Result;
use sqlx::PgPool;

/// Assert the trigger flag. Idempotent while a trigger is already pending.
pub async fn set_trigger(pool: &PgPool) -> Result<()> {
    sqlx::query("UPDATE camera_control SET trigger_capture = TRUE WHERE id = 1")
        .execute(pool)
        .await?;
    Ok(())
}

/// Read and clear the trigger flag, returning the pre-read value.
///
/// The conditional UPDATE makes read-and-clear one atomic statement, so
/// at most one poller observes `true` per trigger assertion even when
/// polls race.
pub async fn take_trigger(pool: &PgPool) -> Result<bool> {
    let result =
        sqlx::query("UPDATE camera_control SET trigger_capture = FALSE WHERE id = 1 AND trigger_capture = TRUE")
            .execute(pool)
            .await?;
    Ok(result.rows_affected() > 0)
}
