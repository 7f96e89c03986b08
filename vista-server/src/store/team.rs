//! Team membership lookups.

use chrono::{DateTime, Utc};

use sqlx::{FromRow, SqlitePool};

use vista_model::{role::Role, team::TeamMember};

#[derive(Debug, FromRow)]
struct TeamMemberRow {
    team_id: i64,
    user_id: i64,
    #[sqlx(try_from = "String")]
    role: Role,
    created: DateTime<Utc>,
}

impl From<TeamMemberRow> for TeamMember {
    fn from(value: TeamMemberRow) -> Self {
        TeamMember {
            team_id: value.team_id,
            user_id: value.user_id,
            role: value.role,
            created: value.created,
        }
    }
}

/// Looks up a user's membership in a team.
///
/// A user that is not a member of the team is `Ok(None)`.
pub async fn membership(
    db: &SqlitePool,
    team_id: i64,
    user_id: i64,
) -> Result<Option<TeamMember>, sqlx::Error> {
    let member = sqlx::query_as::<_, TeamMemberRow>(
        r#"
        SELECT
            tm.team_id, tm.user_id, tm.role, tm.created
        FROM
            team_member tm
        WHERE
            tm.team_id = $1
            AND tm.user_id = $2
        "#,
    )
    .bind(team_id)
    .bind(user_id)
    .fetch_optional(db)
    .await?;

    Ok(member.map(TeamMember::from))
}
