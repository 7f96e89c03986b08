//! SQL schema bootstrap.

use sqlx::SqlitePool;

/// Creates the tables the server relies on if they do not exist yet.
///
/// Runs on startup; every statement is idempotent.
pub async fn migrate(db: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS user (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT NOT NULL UNIQUE,
            name TEXT NOT NULL DEFAULT '',
            email TEXT,
            mobile TEXT NOT NULL DEFAULT '',
            salt TEXT NOT NULL DEFAULT '',
            password TEXT NOT NULL DEFAULT '',
            sidemenu INTEGER NOT NULL DEFAULT 0,
            visits INTEGER NOT NULL DEFAULT 0,
            last_seen_at TEXT,
            created TEXT NOT NULL,
            updated TEXT NOT NULL
        )
        "#,
    )
    .execute(db)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS team_member (
            team_id INTEGER NOT NULL,
            user_id INTEGER NOT NULL,
            role TEXT NOT NULL,
            created TEXT NOT NULL,
            PRIMARY KEY (team_id, user_id)
        )
        "#,
    )
    .execute(db)
    .await?;

    Ok(())
}
