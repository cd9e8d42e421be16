//! Core data model definitions shared across Roster crates.
#![allow(missing_docs)]

pub mod error;
pub mod filter_types;
pub mod ids;
pub mod prelude;
pub mod role;
pub mod user;

pub use error::{ModelError, Result as ModelResult};
pub use filter_types::{RoleFilter, SortDirection, SortKey, StatusFilter};
pub use ids::RecordId;
pub use role::{Role, RoleDraft};
pub use user::{User, UserDraft, UserStatus};

/// A server-owned record addressed by an opaque identifier.
///
/// Cache reconciliation only ever matches records through this trait, never
/// by position.
pub trait Record {
    /// Editable fields submitted on create/update.
    type Draft: Clone + std::fmt::Debug + Send + Sync;

    fn id(&self) -> &RecordId;

    /// Seed a draft from the record's current values (edit mode).
    fn to_draft(&self) -> Self::Draft;
}
