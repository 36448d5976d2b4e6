//! User model and role enumeration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role a user holds within their team.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Full control, including task deletion.
    Admin,
    /// Creates and assigns work for the team.
    Manager,
    /// Works assigned tasks; may only move their own.
    Member,
}

impl Role {
    /// Stable string form used in persistence and messages.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Manager => "manager",
            Self::Member => "member",
        }
    }

    /// Parse the stable string form back into a role.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(Self::Admin),
            "manager" => Some(Self::Manager),
            "member" => Some(Self::Member),
            _ => None,
        }
    }
}

/// A registered user belonging to exactly one team.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct User {
    /// Unique record identifier.
    pub id: String,
    /// Display name; the resolver matches assignee fragments against it.
    pub name: String,
    /// Contact handle; also matched by the resolver.
    pub email: String,
    /// Role within the owning team.
    pub role: Role,
    /// Owning team identifier.
    pub team_id: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Construct a new user with a generated identifier.
    #[must_use]
    pub fn new(name: String, email: String, role: Role, team_id: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            email,
            role,
            team_id,
            created_at: Utc::now(),
        }
    }
}
