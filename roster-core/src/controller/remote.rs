//! Routes generic controller actions to the per-collection service calls.

use async_trait::async_trait;
use roster_model::{Record, RecordId, Role, RoleDraft, User, UserDraft};

use crate::directory::{Collection, DirectoryResult, DirectoryService};

#[async_trait]
pub(crate) trait RemoteRecord: Record + Clone + Send + Sync + Sized {
    const COLLECTION: Collection;

    async fn create(
        service: &dyn DirectoryService,
        draft: &Self::Draft,
    ) -> DirectoryResult<Self>;

    async fn update(
        service: &dyn DirectoryService,
        id: &RecordId,
        draft: &Self::Draft,
    ) -> DirectoryResult<Self>;

    async fn delete(
        service: &dyn DirectoryService,
        id: &RecordId,
    ) -> DirectoryResult<()>;
}

#[async_trait]
impl RemoteRecord for User {
    const COLLECTION: Collection = Collection::Users;

    async fn create(
        service: &dyn DirectoryService,
        draft: &UserDraft,
    ) -> DirectoryResult<Self> {
        service.create_user(draft).await
    }

    async fn update(
        service: &dyn DirectoryService,
        id: &RecordId,
        draft: &UserDraft,
    ) -> DirectoryResult<Self> {
        service.update_user(id, draft).await
    }

    async fn delete(
        service: &dyn DirectoryService,
        id: &RecordId,
    ) -> DirectoryResult<()> {
        service.delete_user(id).await
    }
}

#[async_trait]
impl RemoteRecord for Role {
    const COLLECTION: Collection = Collection::Roles;

    async fn create(
        service: &dyn DirectoryService,
        draft: &RoleDraft,
    ) -> DirectoryResult<Self> {
        service.create_role(draft).await
    }

    async fn update(
        service: &dyn DirectoryService,
        id: &RecordId,
        draft: &RoleDraft,
    ) -> DirectoryResult<Self> {
        service.update_role(id, draft).await
    }

    async fn delete(
        service: &dyn DirectoryService,
        id: &RecordId,
    ) -> DirectoryResult<()> {
        service.delete_role(id).await
    }
}
