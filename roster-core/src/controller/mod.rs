//! List view controller.
//!
//! Owns the cached collections, the view parameters and the create/edit
//! forms. Every action takes `&mut self`, so one action (including its
//! network round trip) finishes before the next one can start.

pub mod cache;
pub mod messages;
pub mod modal;
mod remote;
mod update;

use std::sync::Arc;

use roster_model::{
    RecordId, Role, RoleDraft, RoleFilter, SortKey, StatusFilter, User,
    UserDraft,
};
use thiserror::Error;
use tracing::{error, info, warn};

use crate::{
    directory::{DirectoryError, DirectoryService},
    view::{self, ViewParams},
};

pub use modal::{Modal, ModalMode};
use remote::RemoteRecord;

/// Role seeded into the create form when no roles are cached.
pub const FALLBACK_ROLE: &str = "User";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheState {
    #[default]
    Empty,
    Loading,
    Ready,
}

/// Failure of a controller action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsoleError {
    #[error("no {0} form is open")]
    NoOpenForm(&'static str),
    #[error("no cached {collection} with id {id}")]
    UnknownRecord {
        collection: &'static str,
        id: RecordId,
    },
    #[error(transparent)]
    Directory(#[from] DirectoryError),
}

impl ConsoleError {
    /// The directory failure behind this error, if any.
    pub fn directory(&self) -> Option<&DirectoryError> {
        match self {
            ConsoleError::Directory(err) => Some(err),
            _ => None,
        }
    }
}

pub struct DirectoryController {
    service: Arc<dyn DirectoryService>,
    cache_state: CacheState,
    users: Vec<User>,
    roles: Vec<Role>,
    params: ViewParams,
    user_modal: Modal<User>,
    role_modal: Modal<Role>,
    last_error: Option<DirectoryError>,
}

impl std::fmt::Debug for DirectoryController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectoryController")
            .field("cache_state", &self.cache_state)
            .field("users", &self.users.len())
            .field("roles", &self.roles.len())
            .field("params", &self.params)
            .field("user_modal", &self.user_modal.mode())
            .field("role_modal", &self.role_modal.mode())
            .field("last_error", &self.last_error)
            .finish()
    }
}

impl DirectoryController {
    pub fn new(service: Arc<dyn DirectoryService>) -> Self {
        Self::with_params(service, ViewParams::default())
    }

    pub fn with_params(
        service: Arc<dyn DirectoryService>,
        params: ViewParams,
    ) -> Self {
        Self {
            service,
            cache_state: CacheState::Empty,
            users: Vec::new(),
            roles: Vec::new(),
            params,
            user_modal: Modal::Closed,
            role_modal: Modal::Closed,
            last_error: None,
        }
    }

    /// Load both collections. Also used to refresh.
    ///
    /// A failed list leaves that collection's previous contents in place and
    /// is surfaced through [`Self::last_error`]; the controller still ends in
    /// [`CacheState::Ready`].
    pub async fn activate(&mut self) -> Result<(), ConsoleError> {
        self.cache_state = CacheState::Loading;
        info!("Loading users and roles from directory");

        let (users, roles) = futures::join!(
            self.service.list_users(),
            self.service.list_roles()
        );

        let mut failure = None;
        match users {
            Ok(users) => {
                info!("Successfully loaded {} users", users.len());
                self.users = users;
            }
            Err(err) => {
                error!("Failed to load users: {}", err);
                failure.get_or_insert(err);
            }
        }
        match roles {
            Ok(roles) => {
                info!("Successfully loaded {} roles", roles.len());
                self.roles = roles;
            }
            Err(err) => {
                error!("Failed to load roles: {}", err);
                failure.get_or_insert(err);
            }
        }

        self.cache_state = CacheState::Ready;
        self.last_error = failure.clone();
        match failure {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }

    pub fn cache_state(&self) -> CacheState {
        self.cache_state
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    pub fn params(&self) -> &ViewParams {
        &self.params
    }

    /// Derived user table for the current cache and parameters.
    pub fn view(&self) -> Vec<&User> {
        view::derive_view(&self.users, &self.params)
    }

    pub fn roles_view(&self) -> Vec<&Role> {
        view::sorted_roles(&self.roles)
    }

    /// Most recent surfaced failure of a load or delete.
    pub fn last_error(&self) -> Option<&DirectoryError> {
        self.last_error.as_ref()
    }

    pub fn dismiss_error(&mut self) {
        self.last_error = None;
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.params.search = text.into();
    }

    pub fn set_status_filter(&mut self, filter: StatusFilter) {
        self.params.status = filter;
    }

    pub fn set_role_filter(&mut self, filter: RoleFilter) {
        self.params.role = filter;
    }

    pub fn click_sort_header(&mut self, key: SortKey) {
        self.params.click_header(key);
    }

    /// Role seeded into a new user: the first cached role, else
    /// [`FALLBACK_ROLE`].
    pub fn default_role(&self) -> String {
        self.roles
            .first()
            .map(|role| role.name.clone())
            .unwrap_or_else(|| FALLBACK_ROLE.to_string())
    }

    // Users

    pub fn user_modal(&self) -> &Modal<User> {
        &self.user_modal
    }

    pub fn user_draft_mut(&mut self) -> Option<&mut UserDraft> {
        self.user_modal.draft_mut()
    }

    pub fn open_create_user(&mut self) {
        self.user_modal = Modal::creating(UserDraft::blank(self.default_role()));
    }

    pub fn open_edit_user(&mut self, id: &RecordId) -> Result<(), ConsoleError> {
        let user = cache::find(&self.users, id).ok_or_else(|| {
            ConsoleError::UnknownRecord {
                collection: "user",
                id: id.clone(),
            }
        })?;
        self.user_modal = Modal::editing(user);
        Ok(())
    }

    pub fn cancel_user_form(&mut self) {
        self.user_modal.close();
    }

    /// Update when the form carries an identifier, create otherwise.
    pub async fn submit_user(&mut self) -> Result<User, ConsoleError> {
        submit_form(self.service.as_ref(), &mut self.users, &mut self.user_modal)
            .await
    }

    pub async fn delete_user(&mut self, id: &RecordId) -> Result<(), ConsoleError> {
        delete_record::<User>(
            self.service.as_ref(),
            &mut self.users,
            id,
            &mut self.last_error,
        )
        .await
    }

    // Roles

    pub fn role_modal(&self) -> &Modal<Role> {
        &self.role_modal
    }

    pub fn role_draft_mut(&mut self) -> Option<&mut RoleDraft> {
        self.role_modal.draft_mut()
    }

    pub fn open_create_role(&mut self) {
        self.role_modal = Modal::creating(RoleDraft::default());
    }

    pub fn open_edit_role(&mut self, id: &RecordId) -> Result<(), ConsoleError> {
        let role = cache::find(&self.roles, id).ok_or_else(|| {
            ConsoleError::UnknownRecord {
                collection: "role",
                id: id.clone(),
            }
        })?;
        self.role_modal = Modal::editing(role);
        Ok(())
    }

    pub fn cancel_role_form(&mut self) {
        self.role_modal.close();
    }

    pub async fn submit_role(&mut self) -> Result<Role, ConsoleError> {
        submit_form(self.service.as_ref(), &mut self.roles, &mut self.role_modal)
            .await
    }

    pub async fn delete_role(&mut self, id: &RecordId) -> Result<(), ConsoleError> {
        delete_record::<Role>(
            self.service.as_ref(),
            &mut self.roles,
            id,
            &mut self.last_error,
        )
        .await
    }
}

async fn submit_form<R: RemoteRecord>(
    service: &dyn DirectoryService,
    cache: &mut Vec<R>,
    modal: &mut Modal<R>,
) -> Result<R, ConsoleError> {
    let singular = R::COLLECTION.singular();
    let (id, draft) = match &*modal {
        Modal::Closed => return Err(ConsoleError::NoOpenForm(singular)),
        Modal::Creating { draft, .. } => (None, draft.clone()),
        Modal::Editing { id, draft, .. } => (Some(id.clone()), draft.clone()),
    };

    let result = match &id {
        Some(id) => R::update(service, id, &draft).await,
        None => R::create(service, &draft).await,
    };

    match result {
        Ok(record) => {
            match &id {
                Some(id) => {
                    if !cache::replace(cache, id, record.clone()) {
                        warn!("Updated {} {} is no longer cached", singular, id);
                    }
                    info!("Updated {} {}", singular, id);
                }
                None => {
                    info!("Created {} {}", singular, record.id());
                    cache::append(cache, record.clone());
                }
            }
            modal.close();
            Ok(record)
        }
        Err(err) => {
            warn!("Failed to save {}: {}", singular, err);
            modal.set_error(err.clone());
            Err(err.into())
        }
    }
}

async fn delete_record<R: RemoteRecord>(
    service: &dyn DirectoryService,
    cache: &mut Vec<R>,
    id: &RecordId,
    last_error: &mut Option<DirectoryError>,
) -> Result<(), ConsoleError> {
    let singular = R::COLLECTION.singular();
    match R::delete(service, id).await {
        Ok(()) => {
            let removed = cache::remove(cache, id);
            info!("Deleted {} {} ({} cached entries removed)", singular, id, removed);
            Ok(())
        }
        Err(err) => {
            error!("Failed to delete {} {}: {}", singular, id, err);
            *last_error = Some(err.clone());
            Err(err.into())
        }
    }
}
