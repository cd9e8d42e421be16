//! One-shot subcommands. Each one activates the controller, drives it with
//! messages, and prints the result.

use anyhow::{Context, Result, bail};
use dialoguer::{Confirm, console::Term};
use roster_core::{DirectoryController, Message, RoleField, UserField};
use roster_model::{RecordId, RoleFilter, SortDirection};
use tracing::warn;

use crate::{
    cli::{ListArgs, RoleAction, UserAction},
    render,
};

/// Load both collections; a failed list degrades to an empty table.
async fn activate(controller: &mut DirectoryController) {
    if let Err(err) = controller.update(Message::Activate).await {
        warn!("continuing with partial data: {}", err);
        eprintln!("warning: {err}");
    }
}

fn confirmed(yes: bool, prompt: String) -> Result<bool> {
    if yes {
        return Ok(true);
    }
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact_on(&Term::stderr())?)
}

fn permissions(raw: &str) -> Result<serde_json::Value> {
    serde_json::from_str(raw).context("--permissions must be a JSON value")
}

async fn list_users(
    controller: &mut DirectoryController,
    args: ListArgs,
) -> Result<()> {
    if let Some(search) = args.search {
        controller.update(Message::SearchChanged(search)).await?;
    }
    controller
        .update(Message::StatusFilterChanged(args.status))
        .await?;
    if let Some(role) = args.role {
        controller
            .update(Message::RoleFilterChanged(RoleFilter::from(role.as_str())))
            .await?;
    }

    let key = args.sort.unwrap_or(controller.params().sort_key);
    let direction = if args.desc {
        SortDirection::Descending
    } else {
        controller.params().direction
    };
    // Header clicks reach any (key, direction) in at most two steps.
    if controller.params().sort_key != key {
        controller.update(Message::SortHeaderClicked(key)).await?;
    }
    if controller.params().direction != direction {
        controller.update(Message::SortHeaderClicked(key)).await?;
    }

    let view = controller.view();
    print!("{}", render::users(&view, controller.params()));
    println!(
        "{}",
        render::summary(controller.params(), view.len(), controller.users().len())
    );
    Ok(())
}

pub async fn users(
    controller: &mut DirectoryController,
    action: UserAction,
) -> Result<()> {
    activate(controller).await;

    match action {
        UserAction::List(args) => list_users(controller, args).await,
        UserAction::Create {
            name,
            email,
            role,
            status,
        } => {
            controller.update(Message::OpenCreateUser).await?;
            let mut fields = vec![UserField::Name(name), UserField::Email(email)];
            fields.extend(role.map(UserField::Role));
            fields.extend(status.map(UserField::Status));
            submit_user(controller, fields).await
        }
        UserAction::Update {
            id,
            name,
            email,
            role,
            status,
        } => {
            controller.update(Message::OpenEditUser(id)).await?;
            let mut fields = Vec::new();
            fields.extend(name.map(UserField::Name));
            fields.extend(email.map(UserField::Email));
            fields.extend(role.map(UserField::Role));
            fields.extend(status.map(UserField::Status));
            submit_user(controller, fields).await
        }
        UserAction::Delete { id, yes } => {
            let label = describe_user(controller, &id);
            if !confirmed(yes, format!("Delete user {label}?"))? {
                println!("Aborted");
                return Ok(());
            }
            controller.update(Message::DeleteUser(id.clone())).await?;
            println!("Deleted user {id}");
            Ok(())
        }
    }
}

async fn submit_user(
    controller: &mut DirectoryController,
    fields: Vec<UserField>,
) -> Result<()> {
    for field in fields {
        controller.update(Message::UserFormChanged(field)).await?;
    }
    let user = controller.submit_user().await?;
    let view = [&user];
    print!("{}", render::users(&view, controller.params()));
    Ok(())
}

fn describe_user(controller: &DirectoryController, id: &RecordId) -> String {
    controller
        .users()
        .iter()
        .find(|user| &user.id == id)
        .map(|user| format!("{} <{}> ({id})", user.name, user.email))
        .unwrap_or_else(|| id.to_string())
}

pub async fn roles(
    controller: &mut DirectoryController,
    action: RoleAction,
) -> Result<()> {
    activate(controller).await;

    match action {
        RoleAction::List => {
            print!("{}", render::roles(&controller.roles_view()));
            Ok(())
        }
        RoleAction::Create { name, permissions: raw } => {
            controller.update(Message::OpenCreateRole).await?;
            let mut fields = vec![RoleField::Name(name)];
            if let Some(raw) = raw {
                fields.push(RoleField::Permissions(permissions(&raw)?));
            }
            submit_role(controller, fields).await
        }
        RoleAction::Update {
            id,
            name,
            permissions: raw,
        } => {
            if name.is_none() && raw.is_none() {
                bail!("nothing to update: pass --name and/or --permissions");
            }
            controller.update(Message::OpenEditRole(id)).await?;
            let mut fields = Vec::new();
            fields.extend(name.map(RoleField::Name));
            if let Some(raw) = raw {
                fields.push(RoleField::Permissions(permissions(&raw)?));
            }
            submit_role(controller, fields).await
        }
        RoleAction::Delete { id, yes } => {
            if !confirmed(yes, format!("Delete role {id}?"))? {
                println!("Aborted");
                return Ok(());
            }
            controller.update(Message::DeleteRole(id.clone())).await?;
            println!("Deleted role {id}");
            Ok(())
        }
    }
}

async fn submit_role(
    controller: &mut DirectoryController,
    fields: Vec<RoleField>,
) -> Result<()> {
    for field in fields {
        controller.update(Message::RoleFormChanged(field)).await?;
    }
    let role = controller.submit_role().await?;
    print!("{}", render::roles(&[&role]));
    Ok(())
}
