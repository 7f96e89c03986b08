//! API user request models.

use serde::{Deserialize, Serialize};

/// List users endpoint.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ListUsersQuery {
    /// The query's page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// How many results should be returned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}
