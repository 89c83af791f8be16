//! User domain module.
//!
//! Local accounts with email/password login. Tokens are issued and checked
//! through the `TokenIssuer` and `SessionValidator` ports.

mod account;
mod errors;

pub use account::{
    normalize_email, validate_password, User, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH,
};
pub use errors::UserError;
