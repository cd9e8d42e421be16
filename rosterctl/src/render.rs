//! Plain-text tables for the terminal.

use std::fmt::Write;

use roster_core::{DirectoryController, Modal, ViewParams};
use roster_model::{Role, SortDirection, SortKey, User, UserDraft};

const USER_COLUMNS: [(&str, Option<SortKey>); 5] = [
    ("ID", None),
    ("NAME", Some(SortKey::Name)),
    ("EMAIL", Some(SortKey::Email)),
    ("ROLE", Some(SortKey::Role)),
    ("STATUS", Some(SortKey::Status)),
];

fn table(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> =
        headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let mut line = |cells: &[String]| {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect();
        let _ = writeln!(out, "{}", padded.join("  ").trim_end());
    };
    line(headers);
    for row in rows {
        line(row);
    }
    out
}

/// User table with the active sort column marked.
pub fn users(view: &[&User], params: &ViewParams) -> String {
    let arrow = match params.direction {
        SortDirection::Ascending => "^",
        SortDirection::Descending => "v",
    };
    let headers: Vec<String> = USER_COLUMNS
        .iter()
        .map(|(label, key)| match key {
            Some(key) if *key == params.sort_key => format!("{label} {arrow}"),
            _ => (*label).to_string(),
        })
        .collect();
    let rows: Vec<Vec<String>> = view
        .iter()
        .map(|user| {
            vec![
                user.id.to_string(),
                user.name.clone(),
                user.email.clone(),
                user.role.clone(),
                user.status.to_string(),
            ]
        })
        .collect();
    table(&headers, &rows)
}

pub fn roles(roles: &[&Role]) -> String {
    let headers = vec!["ID".to_string(), "NAME".to_string(), "PERMISSIONS".to_string()];
    let rows: Vec<Vec<String>> = roles
        .iter()
        .map(|role| {
            let permissions = if role.permissions.is_null() {
                "-".to_string()
            } else {
                role.permissions.to_string()
            };
            vec![role.id.to_string(), role.name.clone(), permissions]
        })
        .collect();
    table(&headers, &rows)
}

pub fn user_draft(draft: &UserDraft) -> String {
    format!(
        "name={:?} email={:?} role={:?} status={}",
        draft.name, draft.email, draft.role, draft.status
    )
}

pub fn summary(params: &ViewParams, shown: usize, total: usize) -> String {
    format!(
        "{shown} of {total} users | search={:?} status={} role={} sort={} {}",
        params.search, params.status, params.role, params.sort_key, params.direction
    )
}

/// Full shell screen: table, filters, open form and pending error.
pub fn screen(controller: &DirectoryController) -> String {
    let view = controller.view();
    let mut out = users(&view, controller.params());
    let _ = writeln!(
        out,
        "{}",
        summary(controller.params(), view.len(), controller.users().len())
    );

    match controller.user_modal() {
        Modal::Closed => {}
        modal => {
            let title = match modal.editing_id() {
                Some(id) => format!("editing user {id}"),
                None => "new user".to_string(),
            };
            if let Some(draft) = modal.draft() {
                let _ = writeln!(out, "[{title}] {}", user_draft(draft));
            }
            if let Some(err) = modal.error() {
                let _ = writeln!(out, "  error: {err}");
            }
        }
    }
    match controller.role_modal() {
        Modal::Closed => {}
        modal => {
            let title = match modal.editing_id() {
                Some(id) => format!("editing role {id}"),
                None => "new role".to_string(),
            };
            if let Some(draft) = modal.draft() {
                let _ = writeln!(out, "[{title}] name={:?} permissions={}", draft.name, draft.permissions);
            }
            if let Some(err) = modal.error() {
                let _ = writeln!(out, "  error: {err}");
            }
        }
    }
    if let Some(err) = controller.last_error() {
        let _ = writeln!(out, "error: {err} (type 'dismiss' to clear)");
    }
    out
}
