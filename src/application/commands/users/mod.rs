mod change_password;
mod create;
mod delete;
mod service;
mod update;

pub use change_password::ChangePasswordCommand;
pub use create::CreateUserCommand;
pub use delete::DeleteUserCommand;
pub use service::UserCommandService;
pub use update::UpdateUserCommand;
