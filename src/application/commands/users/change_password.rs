use super::UserCommandService;
use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        resolve_user_id,
    },
    domain::user::{PasswordHash, value_objects::validate_password},
};

pub struct ChangePasswordCommand {
    pub user_id: i64,
    pub old_password: String,
    pub new_password: String,
}

impl UserCommandService {
    /// The stored hash is only replaced once the old password has been
    /// verified and the new one has passed validation.
    #[tracing::instrument(name = "user.change_password", skip_all, fields(user_id = command.user_id))]
    pub async fn change_password(&self, command: ChangePasswordCommand) -> ApplicationResult<()> {
        let user_id = resolve_user_id(command.user_id)?;
        let mut user = self.user_repo.get_by_id(user_id).await?;

        let matches = self
            .password_hasher
            .verify(&command.old_password, user.password_hash.as_str())
            .await?;
        if !matches {
            return Err(ApplicationError::incorrect_credential(
                "old password is incorrect",
            ));
        }

        validate_password(&command.new_password)?;

        let hashed = self.password_hasher.hash(&command.new_password).await?;
        user.replace_password(PasswordHash::new(hashed)?, self.clock.now());
        self.user_repo.update(&user).await?;

        self.cache.invalidate(user_id);
        tracing::info!(user_id = %user_id, "password changed");
        Ok(())
    }
}
