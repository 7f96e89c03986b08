use anyhow::{Context, Result};

use chrono::{DateTime, TimeZone as _, Utc};

use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};

use vista_server::schema;

/// Opens a single-connection in-memory database with the schema applied.
pub async fn pool() -> Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .context("open in-memory database")?;

    schema::migrate(&pool).await.context("apply schema")?;

    Ok(pool)
}

pub fn at(unix: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(unix, 0).unwrap()
}

#[allow(dead_code)]
pub async fn insert_user(
    pool: &SqlitePool,
    id: i64,
    username: &str,
    created_unix: i64,
) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO user (id, username, name, email, mobile, salt, password, sidemenu, visits, created, updated)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $10)
        "#,
    )
    .bind(id)
    .bind(username)
    .bind(format!("User {}", username))
    .bind(format!("{}@example.com", username))
    .bind("555-0100")
    .bind("saltsalt")
    .bind("8c6976e5b5410415bde908bd4dee15dfb167a9c873fc4bb8a81f6f2ab448a918")
    .bind(3i64)
    .bind(9i64)
    .bind(at(created_unix))
    .execute(pool)
    .await
    .context("insert user")?;

    Ok(())
}

#[allow(dead_code)]
pub async fn insert_membership(
    pool: &SqlitePool,
    team_id: i64,
    user_id: i64,
    role: &str,
) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO team_member (team_id, user_id, role, created)
        VALUES ($1, $2, $3, $4)
        "#,
    )
    .bind(team_id)
    .bind(user_id)
    .bind(role)
    .bind(at(0))
    .execute(pool)
    .await
    .context("insert membership")?;

    Ok(())
}
