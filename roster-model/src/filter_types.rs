use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{UserStatus, error::ModelError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    pub fn all() -> &'static [StatusFilter] {
        use StatusFilter::*;
        &[All, Active, Inactive]
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Active => "active",
            StatusFilter::Inactive => "inactive",
        }
    }

    /// `None` means no status restriction.
    pub fn status(&self) -> Option<UserStatus> {
        match self {
            StatusFilter::All => None,
            StatusFilter::Active => Some(UserStatus::Active),
            StatusFilter::Inactive => Some(UserStatus::Inactive),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StatusFilter {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StatusFilter::all()
            .iter()
            .copied()
            .find(|f| f.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                ModelError::unknown(
                    "status filter",
                    s,
                    &["all", "active", "inactive"],
                )
            })
    }
}

/// Either every role or exactly one role name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum RoleFilter {
    #[default]
    All,
    Named(String),
}

impl RoleFilter {
    pub fn role(&self) -> Option<&str> {
        match self {
            RoleFilter::All => None,
            RoleFilter::Named(name) => Some(name),
        }
    }
}

impl fmt::Display for RoleFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoleFilter::All => f.write_str("all"),
            RoleFilter::Named(name) => f.write_str(name),
        }
    }
}

impl From<&str> for RoleFilter {
    /// `"all"` selects every role; anything else is taken as a role name.
    fn from(raw: &str) -> Self {
        if raw == "all" {
            RoleFilter::All
        } else {
            RoleFilter::Named(raw.to_string())
        }
    }
}

/// Sortable column of the user table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Name,
    Email,
    Role,
    Status,
}

impl SortKey {
    pub fn all() -> &'static [SortKey] {
        use SortKey::*;
        &[Name, Email, Role, Status]
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Email => "email",
            SortKey::Role => "role",
            SortKey::Status => "status",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SortKey {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::all()
            .iter()
            .copied()
            .find(|k| k.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                ModelError::unknown(
                    "sort key",
                    s,
                    &["name", "email", "role", "status"],
                )
            })
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SortDirection {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(ModelError::unknown("sort direction", s, &["asc", "desc"])),
        }
    }
}
