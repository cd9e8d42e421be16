//! Reqwest-backed directory adapter.
//!
//! Owns transport details only: URL building, JSON encoding/decoding and
//! status classification.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use roster_model::{RecordId, Role, RoleDraft, User, UserDraft};
use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;
use url::Url;

use super::{
    Collection, DirectoryError, DirectoryResult, DirectoryService, Operation,
};

/// HTTP client for the `/users` and `/roles` collections.
#[derive(Debug, Clone)]
pub struct HttpDirectory {
    client: Client,
    base_url: Url,
}

impl HttpDirectory {
    /// Build a client with the transport's default timeout behaviour.
    pub fn new(base_url: Url) -> Result<Self, reqwest::Error> {
        Self::with_timeout(base_url, None)
    }

    /// Build a client, optionally bounding every request by `timeout`.
    pub fn with_timeout(
        base_url: Url,
        timeout: Option<Duration>,
    ) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self::from_client(builder.build()?, base_url))
    }

    pub fn from_client(client: Client, mut base_url: Url) -> Self {
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn collection_url(&self, collection: Collection) -> DirectoryResult<Url> {
        self.join(collection.path())
    }

    fn item_url(
        &self,
        collection: Collection,
        id: &RecordId,
    ) -> DirectoryResult<Url> {
        self.join(&format!(
            "{}/{}",
            collection.path(),
            urlencoding::encode(id.as_str())
        ))
    }

    fn join(&self, path: &str) -> DirectoryResult<Url> {
        self.base_url
            .join(path)
            .map_err(|err| DirectoryError::Unclassified {
                status: None,
                message: format!("invalid request path '{path}': {err}"),
            })
    }

    async fn list<T: DeserializeOwned>(
        &self,
        collection: Collection,
    ) -> DirectoryResult<Vec<T>> {
        let url = self.collection_url(collection)?;
        debug!("GET {}", url);
        self.execute(collection, Operation::List, self.client.get(url))
            .await
    }

    async fn create<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        collection: Collection,
        body: &B,
    ) -> DirectoryResult<T> {
        let url = self.collection_url(collection)?;
        debug!("POST {}", url);
        self.execute(
            collection,
            Operation::Create,
            self.client.post(url).json(body),
        )
        .await
    }

    async fn update<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        collection: Collection,
        id: &RecordId,
        body: &B,
    ) -> DirectoryResult<T> {
        let url = self.item_url(collection, id)?;
        debug!("PUT {}", url);
        self.execute(
            collection,
            Operation::Update,
            self.client.put(url).json(body),
        )
        .await
    }

    async fn delete(
        &self,
        collection: Collection,
        id: &RecordId,
    ) -> DirectoryResult<()> {
        let url = self.item_url(collection, id)?;
        debug!("DELETE {}", url);
        let response = self
            .client
            .delete(url)
            .send()
            .await
            .map_err(DirectoryError::transport)?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(DirectoryError::classify(
            collection,
            Operation::Delete,
            status.as_u16(),
            &body,
        ))
    }

    /// Send a request and decode a JSON success payload.
    async fn execute<T: DeserializeOwned>(
        &self,
        collection: Collection,
        operation: Operation,
        request: RequestBuilder,
    ) -> DirectoryResult<T> {
        let response = request.send().await.map_err(DirectoryError::transport)?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(
                %status,
                collection = %collection,
                operation = operation.verb(),
                "directory request failed"
            );
            return Err(DirectoryError::classify(
                collection,
                operation,
                status.as_u16(),
                &body,
            ));
        }

        response.json::<T>().await.map_err(|err| {
            DirectoryError::Unclassified {
                status: Some(status.as_u16()),
                message: format!("invalid response body: {err}"),
            }
        })
    }
}

#[async_trait]
impl DirectoryService for HttpDirectory {
    async fn list_users(&self) -> DirectoryResult<Vec<User>> {
        self.list(Collection::Users).await
    }

    async fn create_user(&self, draft: &UserDraft) -> DirectoryResult<User> {
        self.create(Collection::Users, draft).await
    }

    async fn update_user(
        &self,
        id: &RecordId,
        draft: &UserDraft,
    ) -> DirectoryResult<User> {
        self.update(Collection::Users, id, draft).await
    }

    async fn delete_user(&self, id: &RecordId) -> DirectoryResult<()> {
        self.delete(Collection::Users, id).await
    }

    async fn list_roles(&self) -> DirectoryResult<Vec<Role>> {
        self.list(Collection::Roles).await
    }

    async fn create_role(&self, draft: &RoleDraft) -> DirectoryResult<Role> {
        self.create(Collection::Roles, draft).await
    }

    async fn update_role(
        &self,
        id: &RecordId,
        draft: &RoleDraft,
    ) -> DirectoryResult<Role> {
        self.update(Collection::Roles, id, draft).await
    }

    async fn delete_role(&self, id: &RecordId) -> DirectoryResult<()> {
        self.delete(Collection::Roles, id).await
    }
}
