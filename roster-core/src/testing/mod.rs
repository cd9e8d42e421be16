//! In-memory [`DirectoryService`] for tests and offline demos.
//!
//! Behaves like a well-behaved directory: sequential identifiers, `404` for
//! unknown identifiers and `400` for drafts with an empty name or email. A
//! failure can be armed for the next call with [`InMemoryDirectory::fail_next`].

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use roster_model::{RecordId, Role, RoleDraft, User, UserDraft};

use crate::directory::{
    Collection, DirectoryError, DirectoryResult, DirectoryService, Operation,
};

/// A recorded call: `(collection, operation)`.
pub type Call = (Collection, Operation);

#[derive(Debug, Default)]
struct State {
    users: Vec<User>,
    roles: Vec<Role>,
    next_id: u64,
    armed: Option<DirectoryError>,
    calls: Vec<Call>,
}

impl State {
    /// Next sequential identifier not already held by a seeded record.
    fn issue_id(&mut self, prefix: &str) -> DirectoryResult<RecordId> {
        loop {
            self.next_id += 1;
            let candidate = RecordId::new(format!("{prefix}{}", self.next_id))
                .map_err(|err| DirectoryError::Unclassified {
                    status: None,
                    message: err.to_string(),
                })?;
            let taken = self.users.iter().any(|user| user.id == candidate)
                || self.roles.iter().any(|role| role.id == candidate);
            if !taken {
                return Ok(candidate);
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    state: Arc<Mutex<State>>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed both collections, replacing anything already stored.
    pub fn with_records(users: Vec<User>, roles: Vec<Role>) -> Self {
        let directory = Self::new();
        {
            let mut state = directory.lock();
            state.users = users;
            state.roles = roles;
        }
        directory
    }

    /// Make the next call, whatever it is, fail with `err`.
    pub fn fail_next(&self, err: DirectoryError) {
        self.lock().armed = Some(err);
    }

    pub fn users(&self) -> Vec<User> {
        self.lock().users.clone()
    }

    pub fn roles(&self) -> Vec<Role> {
        self.lock().roles.clone()
    }

    /// Every call received so far, in order.
    pub fn calls(&self) -> Vec<Call> {
        self.lock().calls.clone()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Record the call and hand back the guard, or the armed failure.
    fn enter(
        &self,
        collection: Collection,
        operation: Operation,
    ) -> DirectoryResult<MutexGuard<'_, State>> {
        let mut state = self.lock();
        state.calls.push((collection, operation));
        match state.armed.take() {
            Some(err) => Err(err),
            None => Ok(state),
        }
    }
}

fn not_found(collection: Collection) -> DirectoryError {
    DirectoryError::classify(collection, Operation::Update, 404, "")
}

fn rejected(message: &str) -> DirectoryError {
    DirectoryError::BadRequest(message.to_string())
}

fn validate_user(draft: &UserDraft) -> DirectoryResult<()> {
    if draft.name.trim().is_empty() {
        return Err(rejected("Name is required"));
    }
    if draft.email.trim().is_empty() {
        return Err(rejected("Email is required"));
    }
    Ok(())
}

fn validate_role(draft: &RoleDraft) -> DirectoryResult<()> {
    if draft.name.trim().is_empty() {
        return Err(rejected("Role name is required"));
    }
    Ok(())
}

fn user_from(id: RecordId, draft: &UserDraft) -> User {
    User {
        id,
        name: draft.name.clone(),
        email: draft.email.clone(),
        role: draft.role.clone(),
        status: draft.status,
    }
}

fn role_from(id: RecordId, draft: &RoleDraft) -> Role {
    Role {
        id,
        name: draft.name.clone(),
        permissions: draft.permissions.clone(),
    }
}

#[async_trait]
impl DirectoryService for InMemoryDirectory {
    async fn list_users(&self) -> DirectoryResult<Vec<User>> {
        let state = self.enter(Collection::Users, Operation::List)?;
        Ok(state.users.clone())
    }

    async fn create_user(&self, draft: &UserDraft) -> DirectoryResult<User> {
        let mut state = self.enter(Collection::Users, Operation::Create)?;
        validate_user(draft)?;
        let user = user_from(state.issue_id("u")?, draft);
        state.users.push(user.clone());
        Ok(user)
    }

    async fn update_user(
        &self,
        id: &RecordId,
        draft: &UserDraft,
    ) -> DirectoryResult<User> {
        let mut state = self.enter(Collection::Users, Operation::Update)?;
        let slot = state
            .users
            .iter_mut()
            .find(|user| &user.id == id)
            .ok_or_else(|| not_found(Collection::Users))?;
        validate_user(draft)?;
        *slot = user_from(id.clone(), draft);
        Ok(slot.clone())
    }

    async fn delete_user(&self, id: &RecordId) -> DirectoryResult<()> {
        let mut state = self.enter(Collection::Users, Operation::Delete)?;
        let before = state.users.len();
        state.users.retain(|user| &user.id != id);
        if state.users.len() == before {
            return Err(not_found(Collection::Users));
        }
        Ok(())
    }

    async fn list_roles(&self) -> DirectoryResult<Vec<Role>> {
        let state = self.enter(Collection::Roles, Operation::List)?;
        Ok(state.roles.clone())
    }

    async fn create_role(&self, draft: &RoleDraft) -> DirectoryResult<Role> {
        let mut state = self.enter(Collection::Roles, Operation::Create)?;
        validate_role(draft)?;
        if state.roles.iter().any(|role| role.name == draft.name) {
            return Err(rejected("Role name already exists"));
        }
        let role = role_from(state.issue_id("r")?, draft);
        state.roles.push(role.clone());
        Ok(role)
    }

    async fn update_role(
        &self,
        id: &RecordId,
        draft: &RoleDraft,
    ) -> DirectoryResult<Role> {
        let mut state = self.enter(Collection::Roles, Operation::Update)?;
        if state
            .roles
            .iter()
            .any(|role| role.name == draft.name && &role.id != id)
        {
            return Err(rejected("Role name already exists"));
        }
        let slot = state
            .roles
            .iter_mut()
            .find(|role| &role.id == id)
            .ok_or_else(|| not_found(Collection::Roles))?;
        validate_role(draft)?;
        *slot = role_from(id.clone(), draft);
        Ok(slot.clone())
    }

    async fn delete_role(&self, id: &RecordId) -> DirectoryResult<()> {
        let mut state = self.enter(Collection::Roles, Operation::Delete)?;
        let before = state.roles.len();
        state.roles.retain(|role| &role.id != id);
        if state.roles.len() == before {
            return Err(not_found(Collection::Roles));
        }
        Ok(())
    }
}
