//! User roles and the reserved administrator account.

use std::str::FromStr;

use derive_more::{Display, Error};

use serde::{Deserialize, Serialize};

/// The username of the built-in administrator account.
///
/// Together with [`SUPER_ADMIN_ID`], this identifies the one account the
/// platform always trusts. Authorization code compares against these
/// constants directly, so they must never be changed or reassigned.
pub const SUPER_ADMIN_USERNAME: &str = "admin";

/// The user id of the built-in administrator account.
pub const SUPER_ADMIN_ID: i64 = 1;

/// Checks if an id belongs to the built-in administrator account.
pub fn is_super_admin(id: i64) -> bool {
    id == SUPER_ADMIN_ID
}

/// A user's privilege level on the platform.
///
/// A user's baseline role comes from their membership in the global team,
/// independent of any project team they belong to.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Can view dashboards, but not change them.
    #[default]
    Viewer,
    /// Can create and edit dashboards.
    Editor,
    /// Can manage teams, users and platform settings.
    Admin,
}

impl Role {
    /// Creates a string representation of the role that can be used to get
    /// back the role with [`FromStr`].
    pub fn to_str(&self) -> &'static str {
        match self {
            Role::Viewer => "viewer",
            Role::Editor => "editor",
            Role::Admin => "admin",
        }
    }

    /// Checks if the role is [`Role::Admin`].
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl TryFrom<String> for Role {
    type Error = NoSuchRole;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<&str> for Role {
    type Error = NoSuchRole;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl FromStr for Role {
    type Err = NoSuchRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "viewer" => Ok(Role::Viewer),
            "editor" => Ok(Role::Editor),
            "admin" => Ok(Role::Admin),
            _ => Err(NoSuchRole(s.to_string())),
        }
    }
}

#[derive(Clone, Debug, Display, Error)]
#[display("no such role \"{_0}\" exists")]
pub struct NoSuchRole(#[error(not(source))] String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_str_round_trip() {
        for role in [Role::Viewer, Role::Editor, Role::Admin] {
            assert_eq!(role.to_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn unknown_role_is_rejected() {
        assert!("owner".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn default_role_is_viewer() {
        assert_eq!(Role::default(), Role::Viewer);
    }

    #[test]
    fn super_admin_is_id_one() {
        assert!(is_super_admin(SUPER_ADMIN_ID));
        assert!(is_super_admin(1));
        assert!(!is_super_admin(0));
        assert!(!is_super_admin(2));
        assert!(!is_super_admin(-1));
    }
}
