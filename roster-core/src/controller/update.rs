//! Single entry point mapping [`Message`]s onto controller actions.

use tracing::debug;

use super::{ConsoleError, DirectoryController, messages::Message};

impl DirectoryController {
    /// Handle one message. Form edits with no open form are rejected with
    /// [`ConsoleError::NoOpenForm`].
    pub async fn update(&mut self, message: Message) -> Result<(), ConsoleError> {
        debug!("Directory update: {}", message.name());

        match message {
            Message::Activate | Message::Refresh => self.activate().await,

            Message::SearchChanged(text) => {
                self.set_search(text);
                Ok(())
            }
            Message::StatusFilterChanged(filter) => {
                self.set_status_filter(filter);
                Ok(())
            }
            Message::RoleFilterChanged(filter) => {
                self.set_role_filter(filter);
                Ok(())
            }
            Message::SortHeaderClicked(key) => {
                self.click_sort_header(key);
                Ok(())
            }

            Message::OpenCreateUser => {
                self.open_create_user();
                Ok(())
            }
            Message::OpenEditUser(id) => self.open_edit_user(&id),
            Message::UserFormChanged(field) => {
                let draft = self
                    .user_draft_mut()
                    .ok_or(ConsoleError::NoOpenForm("user"))?;
                field.apply(draft);
                Ok(())
            }
            Message::SubmitUser => self.submit_user().await.map(|_| ()),
            Message::CancelUser => {
                self.cancel_user_form();
                Ok(())
            }
            Message::DeleteUser(id) => self.delete_user(&id).await,

            Message::OpenCreateRole => {
                self.open_create_role();
                Ok(())
            }
            Message::OpenEditRole(id) => self.open_edit_role(&id),
            Message::RoleFormChanged(field) => {
                let draft = self
                    .role_draft_mut()
                    .ok_or(ConsoleError::NoOpenForm("role"))?;
                field.apply(draft);
                Ok(())
            }
            Message::SubmitRole => self.submit_role().await.map(|_| ()),
            Message::CancelRole => {
                self.cancel_role_form();
                Ok(())
            }
            Message::DeleteRole(id) => self.delete_role(&id).await,

            Message::DismissError => {
                self.dismiss_error();
                Ok(())
            }
        }
    }
}
