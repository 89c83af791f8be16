//! Account command and query handlers.

mod get_current_user;
mod login_user;
mod register_user;

pub use get_current_user::{GetCurrentUserHandler, GetCurrentUserQuery};
pub use login_user::{LoginCommand, LoginResult, LoginUserHandler};
pub use register_user::{RegisterUserCommand, RegisterUserHandler};
