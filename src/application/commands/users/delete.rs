use super::UserCommandService;
use crate::application::{error::ApplicationResult, resolve_user_id};

pub struct DeleteUserCommand {
    pub user_id: i64,
}

impl UserCommandService {
    /// Hard delete; there is no tombstone.
    #[tracing::instrument(name = "user.delete", skip_all, fields(user_id = command.user_id))]
    pub async fn delete_user(&self, command: DeleteUserCommand) -> ApplicationResult<()> {
        let user_id = resolve_user_id(command.user_id)?;

        self.user_repo.delete(user_id).await?;
        self.cache.invalidate(user_id);

        tracing::info!(user_id = %user_id, "user deleted");
        Ok(())
    }
}
