//! End-to-end controller behaviour against the in-memory directory.

use std::sync::Arc;

use roster_core::{
    CacheState, Collection, ConsoleError, DirectoryController, DirectoryError,
    Message, ModalMode, Operation, UserField, testing::InMemoryDirectory,
};
use roster_model::{
    RecordId, Role, RoleFilter, SortKey, StatusFilter, User, UserStatus,
};

fn user(id: &str, name: &str, email: &str, role: &str, status: UserStatus) -> User {
    User {
        id: RecordId::new(id).unwrap(),
        name: name.into(),
        email: email.into(),
        role: role.into(),
        status,
    }
}

fn role(id: &str, name: &str) -> Role {
    Role {
        id: RecordId::new(id).unwrap(),
        name: name.into(),
        permissions: serde_json::json!(["read"]),
    }
}

fn seeded() -> InMemoryDirectory {
    InMemoryDirectory::with_records(
        vec![
            user("u1", "Bob", "b@x.com", "Admin", UserStatus::Active),
            user("u2", "alice", "a@x.com", "Viewer", UserStatus::Inactive),
            user("u3", "Carol", "carol@x.com", "Admin", UserStatus::Active),
        ],
        vec![role("r1", "Viewer"), role("r2", "Admin")],
    )
}

async fn controller(directory: &InMemoryDirectory) -> DirectoryController {
    let mut controller = DirectoryController::new(Arc::new(directory.clone()));
    controller.update(Message::Activate).await.unwrap();
    controller
}

fn names(controller: &DirectoryController) -> Vec<String> {
    controller.view().iter().map(|u| u.name.clone()).collect()
}

#[tokio::test]
async fn activation_requests_both_collections() {
    let directory = seeded();
    let controller = controller(&directory).await;

    assert_eq!(controller.cache_state(), CacheState::Ready);
    let calls = directory.calls();
    assert_eq!(calls.len(), 2);
    assert!(calls.contains(&(Collection::Users, Operation::List)));
    assert!(calls.contains(&(Collection::Roles, Operation::List)));
}

#[tokio::test]
async fn search_matches_name_or_email_case_insensitively() {
    let directory = seeded();
    let mut controller = controller(&directory).await;

    controller
        .update(Message::SearchChanged("CAROL@".into()))
        .await
        .unwrap();
    assert_eq!(names(&controller), vec!["Carol"]);

    controller.update(Message::SearchChanged("b".into())).await.unwrap();
    for viewed in controller.view() {
        let hit = viewed.name.to_lowercase().contains('b')
            || viewed.email.to_lowercase().contains('b');
        assert!(hit, "{} does not match", viewed.name);
    }
    assert_eq!(names(&controller), vec!["Bob"]);
}

#[tokio::test]
async fn filters_and_sort_compose() {
    let directory = seeded();
    let mut controller = controller(&directory).await;

    controller
        .update(Message::RoleFilterChanged(RoleFilter::from("Admin")))
        .await
        .unwrap();
    controller
        .update(Message::StatusFilterChanged(StatusFilter::Active))
        .await
        .unwrap();
    assert_eq!(names(&controller), vec!["Bob", "Carol"]);

    controller
        .update(Message::SortHeaderClicked(SortKey::Name))
        .await
        .unwrap();
    assert_eq!(names(&controller), vec!["Carol", "Bob"]);

    controller
        .update(Message::SortHeaderClicked(SortKey::Name))
        .await
        .unwrap();
    assert_eq!(names(&controller), vec!["Bob", "Carol"]);
}

#[tokio::test]
async fn created_user_appears_exactly_once() {
    let directory = seeded();
    let mut controller = controller(&directory).await;

    controller.update(Message::OpenCreateUser).await.unwrap();
    assert_eq!(controller.user_modal().draft().unwrap().role, "Viewer");
    for field in [
        UserField::Name("Dave".into()),
        UserField::Email("dave@x.com".into()),
        UserField::Status(UserStatus::Inactive),
    ] {
        controller
            .update(Message::UserFormChanged(field))
            .await
            .unwrap();
    }

    let before: Vec<RecordId> =
        controller.users().iter().map(|u| u.id.clone()).collect();
    let created = controller.submit_user().await.unwrap();

    assert!(!before.contains(&created.id));
    assert_eq!(
        controller.users().iter().filter(|u| u.id == created.id).count(),
        1
    );
    assert_eq!(controller.user_modal().mode(), ModalMode::Closed);
    assert_eq!(directory.users().len(), 4);
}

#[tokio::test]
async fn rejected_create_keeps_the_form_open() {
    let directory = seeded();
    let mut controller = controller(&directory).await;

    controller.update(Message::OpenCreateUser).await.unwrap();
    let err = controller.update(Message::SubmitUser).await.unwrap_err();

    assert_eq!(
        err,
        ConsoleError::Directory(DirectoryError::BadRequest(
            "Name is required".into()
        ))
    );
    assert_eq!(controller.user_modal().mode(), ModalMode::Creating);
    assert!(controller.user_modal().error().is_some());
    assert_eq!(controller.users().len(), 3);

    controller.update(Message::CancelUser).await.unwrap();
    assert!(!controller.user_modal().is_open());
}

#[tokio::test]
async fn delete_keeps_remaining_order() {
    let directory = seeded();
    let mut controller = controller(&directory).await;
    let target = RecordId::new("u2").unwrap();

    controller
        .update(Message::DeleteUser(target.clone()))
        .await
        .unwrap();

    let ids: Vec<&str> =
        controller.users().iter().map(|u| u.id.as_str()).collect();
    assert_eq!(ids, vec!["u1", "u3"]);
    assert!(controller.users().iter().all(|u| u.id != target));
}

#[tokio::test]
async fn update_not_found_leaves_cache_and_form() {
    let directory = seeded();
    let mut controller = controller(&directory).await;
    let target = RecordId::new("u1").unwrap();

    controller
        .update(Message::OpenEditUser(target.clone()))
        .await
        .unwrap();
    controller
        .update(Message::UserFormChanged(UserField::Name("Robert".into())))
        .await
        .unwrap();

    directory.fail_next(DirectoryError::NotFound("User not found".into()));
    let before = controller.users().to_vec();
    let err = controller.update(Message::SubmitUser).await.unwrap_err();

    assert_eq!(
        err.directory(),
        Some(&DirectoryError::NotFound("User not found".into()))
    );
    assert_eq!(controller.users(), before.as_slice());
    assert_eq!(controller.user_modal().mode(), ModalMode::Editing);
    assert_eq!(controller.user_modal().editing_id(), Some(&target));

    // Retrying the same form succeeds once the directory recovers.
    controller.update(Message::SubmitUser).await.unwrap();
    assert_eq!(controller.users()[0].name, "Robert");
}

#[tokio::test]
async fn failed_refresh_keeps_previous_cache() {
    let directory = seeded();
    let mut controller = controller(&directory).await;

    directory.fail_next(DirectoryError::ServerFault("Failed to fetch users".into()));
    assert!(controller.update(Message::Refresh).await.is_err());
    assert_eq!(controller.cache_state(), CacheState::Ready);
    assert_eq!(controller.users().len() + controller.roles().len(), 5);
    assert!(controller.last_error().is_some());

    controller.update(Message::DismissError).await.unwrap();
    assert!(controller.last_error().is_none());
}

#[tokio::test]
async fn roles_are_managed_like_users() {
    let directory = seeded();
    let mut controller = controller(&directory).await;

    controller.update(Message::OpenCreateRole).await.unwrap();
    controller
        .update(Message::RoleFormChanged(roster_core::RoleField::Name(
            "Auditor".into(),
        )))
        .await
        .unwrap();
    controller.update(Message::SubmitRole).await.unwrap();

    let names: Vec<_> =
        controller.roles_view().iter().map(|r| r.name.clone()).collect();
    assert_eq!(names, vec!["Admin", "Auditor", "Viewer"]);

    controller.update(Message::OpenCreateRole).await.unwrap();
    controller
        .update(Message::RoleFormChanged(roster_core::RoleField::Name(
            "Admin".into(),
        )))
        .await
        .unwrap();
    let err = controller.update(Message::SubmitRole).await.unwrap_err();
    assert_eq!(
        err,
        ConsoleError::Directory(DirectoryError::BadRequest(
            "Role name already exists".into()
        ))
    );
    assert_eq!(controller.roles().len(), 3);
}

#[tokio::test]
async fn form_edits_need_an_open_form() {
    let directory = seeded();
    let mut controller = controller(&directory).await;
    let err = controller
        .update(Message::UserFormChanged(UserField::Name("x".into())))
        .await
        .unwrap_err();
    assert_eq!(err, ConsoleError::NoOpenForm("user"));
}
