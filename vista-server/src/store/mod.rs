//! Storage access for the user directory.

pub mod team;

use chrono::{DateTime, Utc};

use sqlx::{FromRow, SqlitePool};

use vista_model::{role::Role, team::GLOBAL_TEAM_ID, user::User};

/// Read access to the user directory.
///
/// Holds its own handle to the connection pool; cheaply cloneable.
#[derive(Clone, Debug)]
pub struct UserStore {
    db: SqlitePool,
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    username: String,
    name: String,
    email: Option<String>,
    mobile: String,
    salt: String,
    password: String,
    sidemenu: i64,
    visits: i64,
    last_seen_at: Option<DateTime<Utc>>,
    created: DateTime<Utc>,
    updated: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(value: UserRow) -> Self {
        User {
            id: value.id,
            username: value.username,
            name: value.name,
            email: value.email,
            mobile: value.mobile,
            // the role lives on the global team membership, not the row
            role: Role::default(),
            last_seen_at: value.last_seen_at,
            created: value.created,
            updated: value.updated,
            sidemenu: value.sidemenu,
            visits: value.visits,
            salt: value.salt,
            password: value.password,
        }
    }
}

impl UserStore {
    /// Creates a new `UserStore` on a connection pool.
    pub fn new(db: SqlitePool) -> UserStore {
        UserStore { db }
    }

    /// Fetches a user by their id and resolves their platform role.
    ///
    /// A missing user is not an error; it is `Ok(None)`. Any other storage
    /// error propagates unchanged.
    pub async fn user_by_id(&self, id: i64) -> Result<Option<User>, sqlx::Error> {
        let user = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                u.id, u.username, u.name, u.email, u.mobile, u.salt,
                u.password, u.sidemenu, u.visits, u.last_seen_at,
                u.created, u.updated
            FROM
                user u
            WHERE
                u.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        let Some(mut user) = user.map(User::from) else {
            return Ok(None);
        };

        self.resolve_global_role(&mut user).await?;

        Ok(Some(user))
    }

    /// Fetches a user by their username.
    ///
    /// Unlike [`UserStore::user_by_id`], this does not resolve the user's
    /// role; the role field is left at its default.
    pub async fn user_by_name(&self, username: &str) -> Result<Option<User>, sqlx::Error> {
        let user = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                u.id, u.username, u.name, u.email, u.mobile, u.salt,
                u.password, u.sidemenu, u.visits, u.last_seen_at,
                u.created, u.updated
            FROM
                user u
            WHERE
                u.username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.db)
        .await?;

        Ok(user.map(User::from))
    }

    /// Fetches every user in the directory.
    ///
    /// Roles are not resolved; callers that need them resolve per user.
    pub async fn users(&self) -> Result<Vec<User>, sqlx::Error> {
        let users = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                u.id, u.username, u.name, u.email, u.mobile, u.salt,
                u.password, u.sidemenu, u.visits, u.last_seen_at,
                u.created, u.updated
            FROM
                user u
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(users.into_iter().map(User::from).collect())
    }

    /// Resolves a user's platform role from their global team membership,
    /// writing it onto the user in place.
    ///
    /// A user with no membership keeps the default role. If the lookup
    /// fails, the error propagates and the role is left untouched.
    pub async fn resolve_global_role(&self, user: &mut User) -> Result<(), sqlx::Error> {
        let member = team::membership(&self.db, GLOBAL_TEAM_ID, user.id).await?;

        if let Some(member) = member {
            user.role = member.role;
        }

        Ok(())
    }
}
