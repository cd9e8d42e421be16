//! Convenience re-exports for downstream crates.

pub use crate::{
    ModelError, Record, RecordId, Role, RoleDraft, RoleFilter, SortDirection,
    SortKey, StatusFilter, User, UserDraft, UserStatus,
};
