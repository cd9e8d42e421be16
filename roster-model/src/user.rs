use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Record, RecordId, error::ModelError};

/// Account status as stored by the directory.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
}

impl UserStatus {
    pub fn all() -> &'static [UserStatus] {
        &[UserStatus::Active, UserStatus::Inactive]
    }

    /// Wire name, also used as the sort key text.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "active" => Ok(UserStatus::Active),
            "inactive" => Ok(UserStatus::Inactive),
            _ => Err(ModelError::unknown(
                "status",
                s,
                &["active", "inactive"],
            )),
        }
    }
}

/// A user account owned by the remote directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: RecordId,
    pub name: String,
    pub email: String,
    /// Name of the role this account holds.
    pub role: String,
    pub status: UserStatus,
}

/// Candidate user submitted on create, or full replacement on update.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: UserStatus,
}

impl UserDraft {
    /// Empty draft for the create form: no name/email, `active`.
    pub fn blank(role: impl Into<String>) -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            role: role.into(),
            status: UserStatus::Active,
        }
    }
}

impl Record for User {
    type Draft = UserDraft;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn to_draft(&self) -> UserDraft {
        UserDraft {
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role.clone(),
            status: self.status,
        }
    }
}
