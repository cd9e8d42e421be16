//! Remote directory access.
//!
//! One operation per collection per verb. Implementations never retry and
//! never cache; failures come back classified as [`DirectoryError`].

pub mod error;
pub mod http;

use std::fmt;

use async_trait::async_trait;
use roster_model::{RecordId, Role, RoleDraft, User, UserDraft};

pub use error::{DirectoryError, DirectoryResult};

/// One of the two managed resource sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Users,
    Roles,
}

impl Collection {
    /// Path segment under the directory root.
    pub fn path(&self) -> &'static str {
        match self {
            Collection::Users => "users",
            Collection::Roles => "roles",
        }
    }

    pub fn singular(&self) -> &'static str {
        match self {
            Collection::Users => "user",
            Collection::Roles => "role",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Verb being performed, which decides how a failure status is classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    List,
    Create,
    Update,
    Delete,
}

impl Operation {
    pub fn verb(&self) -> &'static str {
        match self {
            Operation::List => "fetch",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DirectoryService: Send + Sync {
    async fn list_users(&self) -> DirectoryResult<Vec<User>>;
    async fn create_user(&self, draft: &UserDraft) -> DirectoryResult<User>;
    async fn update_user(
        &self,
        id: &RecordId,
        draft: &UserDraft,
    ) -> DirectoryResult<User>;
    async fn delete_user(&self, id: &RecordId) -> DirectoryResult<()>;

    async fn list_roles(&self) -> DirectoryResult<Vec<Role>>;
    async fn create_role(&self, draft: &RoleDraft) -> DirectoryResult<Role>;
    async fn update_role(
        &self,
        id: &RecordId,
        draft: &RoleDraft,
    ) -> DirectoryResult<Role>;
    async fn delete_role(&self, id: &RecordId) -> DirectoryResult<()>;
}
