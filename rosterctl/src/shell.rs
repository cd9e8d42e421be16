//! Interactive console: one line in, one controller message out, then the
//! screen is redrawn.

use anyhow::{Result, anyhow, bail};
use dialoguer::{Confirm, Input, console::Term};
use roster_core::{
    ConsoleError, DirectoryController, Message, RoleField, UserField,
};
use roster_model::{RecordId, RoleFilter, SortKey, StatusFilter, UserStatus};

use crate::render;

const HELP: &str = "\
commands:
  search [TEXT]             filter by name or email (empty clears)
  status all|active|inactive
  role all|NAME             filter by exact role name
  sort name|email|role|status
                            click a column header
  roles                     list roles
  new user|role             open a create form
  edit user|role ID         open an edit form
  set FIELD VALUE           edit the open form (name, email, role, status,
                            permissions)
  save | cancel             submit or close the open form
  delete user|role ID       delete after confirmation
  refresh                   reload users and roles
  dismiss                   clear the last error
  help | quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    User,
    Role,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    Send(Message),
    Set { field: String, value: String },
    Save,
    Cancel,
    Delete(Target, RecordId),
    Roles,
    Help,
    Quit,
}

fn target(word: Option<&str>) -> Result<Target> {
    match word {
        Some("user") | Some("users") => Ok(Target::User),
        Some("role") | Some("roles") => Ok(Target::Role),
        _ => bail!("expected 'user' or 'role'"),
    }
}

fn record_id(word: Option<&str>) -> Result<RecordId> {
    let raw = word.ok_or_else(|| anyhow!("missing record id"))?;
    Ok(raw.parse()?)
}

/// Parse one input line.
///
/// The search argument is everything after `search `, untrimmed, so that
/// leading or trailing spaces take part in matching.
pub fn parse(line: &str) -> Result<ShellCommand> {
    let (head, rest) = match line.trim_start().split_once(' ') {
        Some((head, rest)) => (head, rest),
        None => (line.trim(), ""),
    };
    let mut args = rest.split_whitespace();

    let command = match head {
        "search" => ShellCommand::Send(Message::SearchChanged(rest.to_string())),
        "status" => {
            let filter: StatusFilter =
                args.next().unwrap_or("all").parse()?;
            ShellCommand::Send(Message::StatusFilterChanged(filter))
        }
        "role" => {
            let name = rest.trim();
            let filter = if name.is_empty() {
                RoleFilter::All
            } else {
                RoleFilter::from(name)
            };
            ShellCommand::Send(Message::RoleFilterChanged(filter))
        }
        "sort" => {
            let key: SortKey = args
                .next()
                .ok_or_else(|| anyhow!("missing sort column"))?
                .parse()?;
            ShellCommand::Send(Message::SortHeaderClicked(key))
        }
        "new" => match target(args.next())? {
            Target::User => ShellCommand::Send(Message::OpenCreateUser),
            Target::Role => ShellCommand::Send(Message::OpenCreateRole),
        },
        "edit" => {
            let which = target(args.next())?;
            let id = record_id(args.next())?;
            match which {
                Target::User => ShellCommand::Send(Message::OpenEditUser(id)),
                Target::Role => ShellCommand::Send(Message::OpenEditRole(id)),
            }
        }
        "set" => {
            let (field, value) = rest
                .trim_start()
                .split_once(' ')
                .ok_or_else(|| anyhow!("usage: set FIELD VALUE"))?;
            ShellCommand::Set {
                field: field.to_string(),
                value: value.trim().to_string(),
            }
        }
        "save" => ShellCommand::Save,
        "cancel" => ShellCommand::Cancel,
        "delete" => {
            let which = target(args.next())?;
            ShellCommand::Delete(which, record_id(args.next())?)
        }
        "refresh" => ShellCommand::Send(Message::Refresh),
        "dismiss" => ShellCommand::Send(Message::DismissError),
        "roles" => ShellCommand::Roles,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        other => bail!("unknown command '{other}' (try 'help')"),
    };
    Ok(command)
}

/// Resolve `set FIELD VALUE` against whichever form is open.
fn form_edit(
    controller: &DirectoryController,
    field: &str,
    value: String,
) -> Result<Message> {
    if controller.user_modal().is_open() {
        let field = match field {
            "name" => UserField::Name(value),
            "email" => UserField::Email(value),
            "role" => UserField::Role(value),
            "status" => UserField::Status(value.parse::<UserStatus>()?),
            other => bail!("users have no field '{other}'"),
        };
        return Ok(Message::UserFormChanged(field));
    }
    if controller.role_modal().is_open() {
        let field = match field {
            "name" => RoleField::Name(value),
            "permissions" => RoleField::Permissions(serde_json::from_str(&value)?),
            other => bail!("roles have no field '{other}'"),
        };
        return Ok(Message::RoleFormChanged(field));
    }
    bail!("no form is open (use 'new' or 'edit')")
}

fn open_form_message(controller: &DirectoryController, user: Message, role: Message) -> Result<Message> {
    if controller.user_modal().is_open() {
        Ok(user)
    } else if controller.role_modal().is_open() {
        Ok(role)
    } else {
        bail!("no form is open")
    }
}

/// Send one message. Directory failures are kept on the form or in the
/// error line of the redrawn screen; anything else is handed back so the
/// caller can report it.
async fn dispatch(
    controller: &mut DirectoryController,
    message: Message,
) -> Option<ConsoleError> {
    match controller.update(message).await {
        Err(err) if err.directory().is_none() => Some(err),
        _ => None,
    }
}

fn confirm(prompt: String) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact_on(&Term::stderr())?)
}

pub async fn run(controller: &mut DirectoryController) -> Result<()> {
    if let Err(err) = controller.update(Message::Activate).await {
        eprintln!("warning: {err}");
    }
    println!("{}", render::screen(controller));
    println!("type 'help' for commands");

    loop {
        let line: String = Input::new()
            .with_prompt("roster")
            .allow_empty(true)
            .interact_text()?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse(&line) {
            Ok(command) => command,
            Err(err) => {
                eprintln!("{err}");
                continue;
            }
        };

        let message = match command {
            ShellCommand::Quit => return Ok(()),
            ShellCommand::Help => {
                println!("{HELP}");
                continue;
            }
            ShellCommand::Roles => {
                print!("{}", render::roles(&controller.roles_view()));
                continue;
            }
            ShellCommand::Send(message) => Ok(message),
            ShellCommand::Set { field, value } => {
                form_edit(controller, &field, value)
            }
            ShellCommand::Save => open_form_message(
                controller,
                Message::SubmitUser,
                Message::SubmitRole,
            ),
            ShellCommand::Cancel => open_form_message(
                controller,
                Message::CancelUser,
                Message::CancelRole,
            ),
            ShellCommand::Delete(which, id) => {
                let noun = match which {
                    Target::User => "user",
                    Target::Role => "role",
                };
                if !confirm(format!("Delete {noun} {id}?"))? {
                    println!("Aborted");
                    continue;
                }
                Ok(match which {
                    Target::User => Message::DeleteUser(id),
                    Target::Role => Message::DeleteRole(id),
                })
            }
        };

        match message {
            Ok(message) => {
                if let Some(err) = dispatch(controller, message).await {
                    eprintln!("{err}");
                }
            }
            Err(err) => eprintln!("{err}"),
        }
        println!("{}", render::screen(controller));
    }
}
