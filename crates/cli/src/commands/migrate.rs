//! Database migration commands.
//!
//! Migrations live in `crates/admin/migrations/` and are embedded at compile time.

use super::{CommandError, connect};

/// Run admin database migrations.
pub async fn admin() -> Result<(), CommandError> {
    let pool = connect().await?;

    tracing::info!("Running admin migrations...");
    sqlx::migrate!("../admin/migrations").run(&pool).await?;

    tracing::info!("Admin migrations complete!");
    Ok(())
}
