//! Drives `HttpDirectory` against a real axum server on an ephemeral port.

use axum::{
    Json, Router,
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
};
use roster_core::{DirectoryError, DirectoryService, HttpDirectory};
use roster_model::{RecordId, RoleDraft, UserDraft, UserStatus};
use serde_json::json;
use url::Url;

fn stored_user(id: &str, draft: &UserDraft) -> serde_json::Value {
    json!({
        "_id": id,
        "name": draft.name,
        "email": draft.email,
        "role": draft.role,
        "status": draft.status,
        "__v": 0,
    })
}

async fn list_users() -> Json<serde_json::Value> {
    Json(json!([
        {"_id": "u1", "name": "Bob", "email": "b@x.com", "role": "Admin", "status": "active"},
        {"_id": "u2", "name": "alice", "email": "a@x.com", "role": "Viewer", "status": "inactive"},
    ]))
}

async fn create_user(Json(draft): Json<UserDraft>) -> Response {
    if draft.name.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"message": "Name is required"})),
        )
            .into_response();
    }
    (StatusCode::CREATED, Json(stored_user("u9", &draft))).into_response()
}

async fn update_user(
    Path(id): Path<String>,
    Json(draft): Json<UserDraft>,
) -> Response {
    match id.as_str() {
        "missing" => StatusCode::NOT_FOUND.into_response(),
        "invalid" => StatusCode::BAD_REQUEST.into_response(),
        "conflict" => (StatusCode::CONFLICT, "already taken").into_response(),
        _ => Json(stored_user(&id, &draft)).into_response(),
    }
}

async fn delete_user(Path(id): Path<String>) -> Response {
    match id.as_str() {
        "a/b c" | "u1" => StatusCode::NO_CONTENT.into_response(),
        "boom" => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"message": "Database unavailable"})),
        )
            .into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn list_roles() -> StatusCode {
    StatusCode::INTERNAL_SERVER_ERROR
}

async fn create_role() -> &'static str {
    "not json"
}

fn router() -> Router {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/{id}", put(update_user).delete(delete_user))
        .route("/roles", get(list_roles).post(create_role))
}

async fn spawn_directory() -> HttpDirectory {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router()).await.unwrap();
    });
    HttpDirectory::new(Url::parse(&format!("http://{addr}")).unwrap()).unwrap()
}

fn draft(name: &str) -> UserDraft {
    UserDraft {
        name: name.into(),
        email: "c@x.com".into(),
        role: "Viewer".into(),
        status: UserStatus::Active,
    }
}

fn id(raw: &str) -> RecordId {
    RecordId::new(raw).unwrap()
}

#[tokio::test]
async fn lists_users_in_server_order() {
    let directory = spawn_directory().await;
    let users = directory.list_users().await.unwrap();
    let names: Vec<_> = users.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["Bob", "alice"]);
    assert_eq!(users[1].status, UserStatus::Inactive);
}

#[tokio::test]
async fn create_returns_assigned_identifier() {
    let directory = spawn_directory().await;
    let user = directory.create_user(&draft("Carol")).await.unwrap();
    assert_eq!(user.id, id("u9"));
    assert_eq!(user.name, "Carol");
}

#[tokio::test]
async fn create_rejection_uses_server_message() {
    let directory = spawn_directory().await;
    let err = directory.create_user(&draft("")).await.unwrap_err();
    assert_eq!(err, DirectoryError::BadRequest("Name is required".into()));
}

#[tokio::test]
async fn update_statuses_are_classified() {
    let directory = spawn_directory().await;

    let err = directory
        .update_user(&id("missing"), &draft("x"))
        .await
        .unwrap_err();
    assert_eq!(err, DirectoryError::NotFound("User not found".into()));

    let err = directory
        .update_user(&id("invalid"), &draft("x"))
        .await
        .unwrap_err();
    assert_eq!(err, DirectoryError::BadRequest("Failed to update user".into()));

    let err = directory
        .update_user(&id("conflict"), &draft("x"))
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(409));
    assert!(err.to_string().contains("already taken"));

    let user = directory.update_user(&id("u2"), &draft("Alicia")).await.unwrap();
    assert_eq!(user.id, id("u2"));
    assert_eq!(user.name, "Alicia");
}

#[tokio::test]
async fn delete_encodes_identifier_and_classifies_failures() {
    let directory = spawn_directory().await;

    directory.delete_user(&id("a/b c")).await.unwrap();
    directory.delete_user(&id("u1")).await.unwrap();

    let err = directory.delete_user(&id("ghost")).await.unwrap_err();
    assert_eq!(err, DirectoryError::NotFound("User not found".into()));

    let err = directory.delete_user(&id("boom")).await.unwrap_err();
    assert_eq!(err, DirectoryError::ServerFault("Database unavailable".into()));
}

#[tokio::test]
async fn role_failures_fall_back_to_generic_messages() {
    let directory = spawn_directory().await;

    let err = directory.list_roles().await.unwrap_err();
    assert_eq!(err, DirectoryError::ServerFault("Failed to fetch roles".into()));

    let err = directory
        .create_role(&RoleDraft::named("Auditor"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DirectoryError::Unclassified { status: Some(200), .. }
    ));
}

#[tokio::test]
async fn unreachable_directory_is_unclassified() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let directory =
        HttpDirectory::new(Url::parse(&format!("http://{addr}")).unwrap()).unwrap();
    let err = directory.list_users().await.unwrap_err();
    assert!(matches!(err, DirectoryError::Unclassified { status: None, .. }));
}
