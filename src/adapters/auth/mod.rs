//! Authentication adapters.
//!
//! - `JwtService` - HS256 token issuing and validation
//! - `Argon2PasswordHasher` - password hashing
//! - `MockSessionValidator` - token table for tests

mod argon2_hasher;
mod jwt;
mod mock;

pub use argon2_hasher::Argon2PasswordHasher;
pub use jwt::JwtService;
pub use mock::MockSessionValidator;
