use super::UserCommandService;
use crate::{
    application::{dto::UserDto, error::ApplicationResult},
    domain::user::{NewUser, PasswordHash, UserDraft},
};

pub struct CreateUserCommand {
    pub name: String,
    pub email: String,
    pub password: String,
    pub age: i32,
}

impl UserCommandService {
    #[tracing::instrument(name = "user.create", skip_all)]
    pub async fn create_user(&self, command: CreateUserCommand) -> ApplicationResult<UserDto> {
        let draft = UserDraft::new(
            &command.name,
            &command.email,
            &command.password,
            command.age,
        )?;

        self.ensure_email_available(&draft.email, None).await?;

        let hashed = self.password_hasher.hash(&draft.password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        let new_user = NewUser::new(
            draft.name,
            draft.email,
            password_hash,
            draft.age,
            self.clock.now(),
        );
        let user = self.user_repo.insert(new_user).await?;

        tracing::info!(user_id = %user.id, "user created");
        Ok(user.into())
    }
}
