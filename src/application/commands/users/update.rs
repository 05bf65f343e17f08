use super::UserCommandService;
use crate::{
    application::{dto::UserDto, error::ApplicationResult, resolve_user_id},
    domain::user::ProfileChanges,
};

pub struct UpdateUserCommand {
    pub user_id: i64,
    pub name: String,
    pub email: String,
    pub age: i32,
}

impl UserCommandService {
    #[tracing::instrument(name = "user.update", skip_all, fields(user_id = command.user_id))]
    pub async fn update_user(&self, command: UpdateUserCommand) -> ApplicationResult<UserDto> {
        let user_id = resolve_user_id(command.user_id)?;
        let changes = ProfileChanges::new(&command.name, &command.email, command.age)?;

        let mut user = self.user_repo.get_by_id(user_id).await?;

        if changes.email != user.email {
            self.ensure_email_available(&changes.email, Some(user_id))
                .await?;
        }

        user.apply_profile(changes, self.clock.now());
        let user = self.user_repo.update(&user).await?;

        self.cache.invalidate(user_id);
        Ok(user.into())
    }
}
