use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use roster_model::{RecordId, SortKey, StatusFilter, UserStatus};

#[derive(Parser, Debug)]
#[command(
    name = "rosterctl",
    version,
    about = "Manage users and roles in a remote directory"
)]
pub struct Cli {
    /// TOML configuration file (default: ./roster.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Dotenv file; variables already set in the process win
    #[arg(long, global = true)]
    pub env_file: Option<PathBuf>,
    /// Directory base URL, overriding config and environment
    #[arg(long, global = true)]
    pub api_url: Option<String>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List, create, update or delete users
    Users {
        #[command(subcommand)]
        action: UserAction,
    },
    /// List, create, update or delete roles
    Roles {
        #[command(subcommand)]
        action: RoleAction,
    },
    /// Interactive console with live search, filters and forms
    Shell,
}

#[derive(Subcommand, Debug)]
pub enum UserAction {
    /// Print the filtered, sorted user table
    List(ListArgs),
    /// Create a user (role defaults to the first role, status to active)
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        role: Option<String>,
        #[arg(long)]
        status: Option<UserStatus>,
    },
    /// Update fields of an existing user
    Update {
        id: RecordId,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        role: Option<String>,
        #[arg(long)]
        status: Option<UserStatus>,
    },
    /// Delete a user
    Delete {
        id: RecordId,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Case-insensitive substring of name or email
    #[arg(long)]
    pub search: Option<String>,
    /// all, active or inactive
    #[arg(long, default_value = "all")]
    pub status: StatusFilter,
    /// Exact role name
    #[arg(long)]
    pub role: Option<String>,
    /// name, email, role or status (default from config)
    #[arg(long)]
    pub sort: Option<SortKey>,
    /// Sort descending
    #[arg(long)]
    pub desc: bool,
}

#[derive(Subcommand, Debug)]
pub enum RoleAction {
    /// Print roles sorted by name
    List,
    /// Create a role
    Create {
        #[arg(long)]
        name: String,
        /// Permissions as a JSON value, stored verbatim
        #[arg(long)]
        permissions: Option<String>,
    },
    /// Rename a role or replace its permissions
    Update {
        id: RecordId,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        permissions: Option<String>,
    },
    /// Delete a role
    Delete {
        id: RecordId,
        #[arg(long, short)]
        yes: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn list_flags_parse_into_view_types() {
        let cli = Cli::parse_from([
            "rosterctl", "users", "list", "--status", "inactive", "--sort",
            "email", "--desc",
        ]);
        let Command::Users {
            action: UserAction::List(args),
        } = cli.command
        else {
            panic!("expected users list");
        };
        assert_eq!(args.status, StatusFilter::Inactive);
        assert_eq!(args.sort, Some(SortKey::Email));
        assert!(args.desc);
    }

    #[test]
    fn global_flags_follow_subcommands() {
        let cli = Cli::parse_from([
            "rosterctl", "roles", "list", "--api-url", "http://dir:8080",
        ]);
        assert_eq!(cli.api_url.as_deref(), Some("http://dir:8080"));
    }
}
