use roster_model::{
    RecordId, RoleDraft, RoleFilter, SortKey, StatusFilter, UserDraft,
    UserStatus,
};

/// One edit to the open user form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UserField {
    Name(String),
    Email(String),
    Role(String),
    Status(UserStatus),
}

impl UserField {
    pub fn apply(self, draft: &mut UserDraft) {
        match self {
            UserField::Name(name) => draft.name = name,
            UserField::Email(email) => draft.email = email,
            UserField::Role(role) => draft.role = role,
            UserField::Status(status) => draft.status = status,
        }
    }
}

/// One edit to the open role form.
#[derive(Clone, Debug, PartialEq)]
pub enum RoleField {
    Name(String),
    Permissions(serde_json::Value),
}

impl RoleField {
    pub fn apply(self, draft: &mut RoleDraft) {
        match self {
            RoleField::Name(name) => draft.name = name,
            RoleField::Permissions(permissions) => {
                draft.permissions = permissions
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Message {
    // Loading
    Activate,
    Refresh,

    // View parameters
    SearchChanged(String),
    StatusFilterChanged(StatusFilter),
    RoleFilterChanged(RoleFilter),
    SortHeaderClicked(SortKey),

    // User form
    OpenCreateUser,
    OpenEditUser(RecordId),
    UserFormChanged(UserField),
    SubmitUser,
    CancelUser,
    DeleteUser(RecordId),

    // Role form
    OpenCreateRole,
    OpenEditRole(RecordId),
    RoleFormChanged(RoleField),
    SubmitRole,
    CancelRole,
    DeleteRole(RecordId),

    DismissError,
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Activate => "Directory::Activate",
            Self::Refresh => "Directory::Refresh",

            Self::SearchChanged(_) => "Directory::SearchChanged",
            Self::StatusFilterChanged(_) => "Directory::StatusFilterChanged",
            Self::RoleFilterChanged(_) => "Directory::RoleFilterChanged",
            Self::SortHeaderClicked(_) => "Directory::SortHeaderClicked",

            Self::OpenCreateUser => "Directory::OpenCreateUser",
            Self::OpenEditUser(_) => "Directory::OpenEditUser",
            Self::UserFormChanged(_) => "Directory::UserFormChanged",
            Self::SubmitUser => "Directory::SubmitUser",
            Self::CancelUser => "Directory::CancelUser",
            Self::DeleteUser(_) => "Directory::DeleteUser",

            Self::OpenCreateRole => "Directory::OpenCreateRole",
            Self::OpenEditRole(_) => "Directory::OpenEditRole",
            Self::RoleFormChanged(_) => "Directory::RoleFormChanged",
            Self::SubmitRole => "Directory::SubmitRole",
            Self::CancelRole => "Directory::CancelRole",
            Self::DeleteRole(_) => "Directory::DeleteRole",

            Self::DismissError => "Directory::DismissError",
        }
    }
}
