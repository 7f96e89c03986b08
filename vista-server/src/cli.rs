//! Vista server command-line interface.

use std::path::PathBuf;

use chrono::Utc;
use clap::{Parser, Subcommand};

use anyhow::Error;

use vista_model::{
    role::{Role, SUPER_ADMIN_ID, SUPER_ADMIN_USERNAME},
    team::GLOBAL_TEAM_ID,
};

use crate::{
    app::AppState,
    crypto::{encode_password, generate_password, generate_salt},
};

/// The command line arguments.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Subcommands.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Operational commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    InitAdmin(InitAdmin),
}

/// Seeds the built-in administrator account.
#[derive(clap::Args, Debug)]
pub struct InitAdmin {
    /// Changes the display name of the administrator account.
    #[arg(short, long, default_value = "Administrator")]
    pub name: String,
}

/// Runs a command.
pub async fn run_command(command: &Command, state: &AppState) -> Result<(), Error> {
    match command {
        Command::InitAdmin(command) => init_admin(command, state).await,
    }
}

async fn init_admin(command: &InitAdmin, state: &AppState) -> Result<(), Error> {
    let mut tx = state.db.begin().await?;

    let now = Utc::now();

    // the reserved account is created exactly once
    let existing = sqlx::query_as::<_, (i64,)>(
        r#"
        SELECT
            u.id
        FROM
            user u
        WHERE
            u.id = $1
        "#,
    )
    .bind(SUPER_ADMIN_ID)
    .fetch_optional(&mut *tx)
    .await?;

    if existing.is_some() {
        return Err(Error::msg("administrator account already exists"));
    }

    let password = generate_password();
    let salt = generate_salt();
    let hash = encode_password(&password, &salt);

    sqlx::query(
        r#"
        INSERT INTO user (id, username, name, salt, password, created, updated)
        VALUES ($1, $2, $3, $4, $5, $6, $6)
        "#,
    )
    .bind(SUPER_ADMIN_ID)
    .bind(SUPER_ADMIN_USERNAME)
    .bind(&command.name)
    .bind(&salt)
    .bind(&hash)
    .bind(now)
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        r#"
        INSERT INTO team_member (team_id, user_id, role, created)
        VALUES ($1, $2, $3, $4)
        "#,
    )
    .bind(GLOBAL_TEAM_ID)
    .bind(SUPER_ADMIN_ID)
    .bind(Role::Admin.to_str())
    .bind(now)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    tracing::info!("created administrator account `{}`", SUPER_ADMIN_USERNAME);

    // export initial password
    println!("{}", password);

    Ok(())
}
