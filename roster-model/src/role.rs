use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Record, RecordId};

/// A role definition. Permissions are carried verbatim and never interpreted
/// by the console.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    #[serde(rename = "_id")]
    pub id: RecordId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub permissions: Value,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RoleDraft {
    pub name: String,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub permissions: Value,
}

impl RoleDraft {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            permissions: Value::Null,
        }
    }
}

impl Record for Role {
    type Draft = RoleDraft;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn to_draft(&self) -> RoleDraft {
        RoleDraft {
            name: self.name.clone(),
            permissions: self.permissions.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permissions_round_trip_untouched() {
        let raw = r#"{"_id":"r1","name":"Admin","permissions":["read","write",{"scope":"all"}]}"#;
        let role: Role = serde_json::from_str(raw).unwrap();
        let draft = role.to_draft();
        assert_eq!(draft.permissions[2]["scope"], "all");
    }

    #[test]
    fn missing_permissions_are_omitted_on_submit() {
        let json = serde_json::to_string(&RoleDraft::named("Viewer")).unwrap();
        assert_eq!(json, r#"{"name":"Viewer"}"#);
    }
}
