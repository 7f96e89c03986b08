//! Team membership models.

use chrono::{DateTime, Utc};

use serde::{Deserialize, Serialize};

use crate::role::Role;

/// The id of the global team.
///
/// Every user on the platform is a member of this team; their membership in
/// it carries their baseline role, independent of any project team.
pub const GLOBAL_TEAM_ID: i64 = 1;

/// A user's membership in a team.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct TeamMember {
    /// The team the membership is scoped to.
    pub team_id: i64,
    /// The member's user id.
    pub user_id: i64,
    /// The role the membership grants.
    pub role: Role,
    /// When the membership was created.
    pub created: DateTime<Utc>,
}
