//! User directory models.

use chrono::{DateTime, Utc};

use derive_more::{Deref, DerefMut, From, Into};

use serde::{Deserialize, Serialize};

use crate::role::Role;

/// A single user.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct User {
    /// The unique ID of the user.
    pub id: i64,
    /// The unique, human-chosen username.
    pub username: String,
    /// The display name of the user.
    pub name: String,
    /// The user's email address, if one is on record.
    pub email: Option<String>,
    /// The user's mobile number.
    pub mobile: String,
    /// The user's platform role.
    ///
    /// Resolved from the user's global team membership. Until resolution
    /// runs, this holds the default role.
    #[serde(default)]
    pub role: Role,
    /// When the user was last seen on the platform.
    #[serde(default, rename = "lastSeenAt", skip_serializing_if = "Option::is_none")]
    pub last_seen_at: Option<DateTime<Utc>>,
    /// When the user was created.
    pub created: DateTime<Utc>,
    /// When the user was last updated.
    pub updated: DateTime<Utc>,
    /// The id of the side menu the user has selected.
    pub sidemenu: i64,
    /// How many times the user has visited the platform.
    pub visits: i64,
    /// The salt the user's password was hashed with.
    ///
    /// Never leaves the server; excluded from serialization entirely.
    #[serde(skip)]
    pub salt: String,
    /// The user's hashed password.
    ///
    /// Never leaves the server; excluded from serialization entirely.
    #[serde(skip)]
    pub password: String,
}

/// An ordered collection of users.
#[derive(Clone, Debug, Default, Deref, DerefMut, Deserialize, From, Into, Serialize)]
pub struct UserList(Vec<User>);

impl UserList {
    /// Sorts the list so the most recently created users come first.
    pub fn sort_newest_first(&mut self) {
        self.0
            .sort_unstable_by(|a, b| b.created.timestamp().cmp(&a.created.timestamp()));
    }
}

impl FromIterator<User> for UserList {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = User>,
    {
        UserList(iter.into_iter().collect())
    }
}

/// A pairing of a bearer token with the user it was issued to.
///
/// Issuance and expiry are owned by the authentication service; this is
/// only the data shape.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Session {
    /// The opaque bearer token.
    pub token: String,
    /// A snapshot of the user at issuance.
    pub user: User,
    /// When the session was created.
    pub create_time: DateTime<Utc>,
}

/// A user's public GitHub profile.
///
/// Deserialization target for the GitHub identity response.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct GithubUser {
    /// The GitHub account id.
    pub id: i64,
    /// The avatar image URL.
    #[serde(rename = "avatar_url")]
    pub avatar: String,
    /// The GitHub login name.
    #[serde(rename = "login")]
    pub username: String,
    /// The account's display name.
    pub name: String,
    /// The profile bio.
    #[serde(rename = "bio")]
    pub tagline: String,
    /// The profile website.
    #[serde(rename = "blog")]
    pub website: String,
    /// Free-text location.
    pub location: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::TimeZone as _;

    fn user(id: i64, created_unix: i64) -> User {
        User {
            id,
            username: format!("user{}", id),
            name: format!("User {}", id),
            email: None,
            mobile: String::new(),
            role: Role::default(),
            last_seen_at: None,
            created: Utc.timestamp_opt(created_unix, 0).unwrap(),
            updated: Utc.timestamp_opt(created_unix, 0).unwrap(),
            sidemenu: 0,
            visits: 0,
            salt: String::new(),
            password: String::new(),
        }
    }

    #[test]
    fn list_sorts_newest_first() {
        let mut users = UserList::from(vec![
            user(1, 1_000),
            user(2, 3_000),
            user(3, 2_000),
        ]);

        users.sort_newest_first();

        let ids = users.iter().map(|u| u.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn credentials_never_serialize() {
        let mut user = user(4, 1_000);
        user.salt = "pepper".into();
        user.password = "8c6976e5b54104...".into();

        let json = serde_json::to_value(&user).unwrap();
        let object = json.as_object().unwrap();

        assert!(!object.contains_key("salt"));
        assert!(!object.contains_key("password"));
        assert!(!json.to_string().contains("pepper"));
    }

    #[test]
    fn empty_credentials_never_serialize() {
        let json = serde_json::to_value(user(5, 1_000)).unwrap();
        let object = json.as_object().unwrap();

        assert!(!object.contains_key("salt"));
        assert!(!object.contains_key("password"));
    }

    #[test]
    fn last_seen_serializes_as_camel_case_when_present() {
        let mut user = user(6, 1_000);
        assert!(
            serde_json::to_value(&user)
                .unwrap()
                .get("lastSeenAt")
                .is_none()
        );

        user.last_seen_at = Some(Utc.timestamp_opt(2_000, 0).unwrap());
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("lastSeenAt").is_some());
    }

    #[test]
    fn github_user_deserializes_from_profile_response() {
        let payload = r#"{
            "id": 583231,
            "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4",
            "login": "octocat",
            "name": "The Octocat",
            "bio": "GitHub's mascot",
            "blog": "https://github.blog",
            "location": "San Francisco",
            "public_repos": 8
        }"#;

        let profile: GithubUser = serde_json::from_str(payload).unwrap();
        assert_eq!(profile.id, 583231);
        assert_eq!(profile.username, "octocat");
        assert!(!profile.avatar.is_empty());
        assert_eq!(profile.tagline, "GitHub's mascot");
        assert_eq!(profile.website, "https://github.blog");
    }

    #[test]
    fn session_round_trips() {
        let session = Session {
            token: "b1946ac92492d234".into(),
            user: user(7, 1_000),
            create_time: Utc.timestamp_opt(5_000, 0).unwrap(),
        };

        let json = serde_json::to_string(&session).unwrap();
        let back: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(back.token, session.token);
        assert_eq!(back.user, session.user);
    }
}
