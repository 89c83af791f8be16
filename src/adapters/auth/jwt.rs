//! HS256 access tokens.
//!
//! One service both signs tokens at login and validates them in the auth
//! middleware, so the issuer and secret can never drift apart.

use async_trait::async_trait;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AuthError, AuthenticatedUser, Timestamp, UserId};
use crate::domain::user::User;
use crate::ports::{IssuedToken, SessionValidator, TokenIssuer};

/// Claims carried by every access token.
#[derive(Debug, Serialize, Deserialize)]
struct AccessClaims {
    /// User id
    sub: String,
    email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    iss: String,
    iat: i64,
    exp: i64,
}

/// Signs and validates HS256 JWTs.
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
    ttl_minutes: i64,
}

impl JwtService {
    pub fn new(secret: &Secret<String>, issuer: impl Into<String>, ttl_minutes: i64) -> Self {
        let bytes = secret.expose_secret().as_bytes();
        Self {
            encoding_key: EncodingKey::from_secret(bytes),
            decoding_key: DecodingKey::from_secret(bytes),
            issuer: issuer.into(),
            ttl_minutes,
        }
    }

    fn issue_at(&self, user: &User, now: Timestamp) -> Result<IssuedToken, AuthError> {
        let expires_at = now.plus_minutes(self.ttl_minutes);
        let claims = AccessClaims {
            sub: user.id().to_string(),
            email: user.email().to_string(),
            name: user.full_name().map(str::to_string),
            iss: self.issuer.clone(),
            iat: now.as_unix_secs(),
            exp: expires_at.as_unix_secs(),
        };

        let access_token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to sign access token");
                AuthError::service_unavailable("token signing failed")
            })?;

        Ok(IssuedToken {
            access_token,
            expires_in: (self.ttl_minutes.max(0) as u64) * 60,
        })
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.issuer]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);
        validation.validate_exp = true;
        validation
    }
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("issuer", &self.issuer)
            .field("ttl_minutes", &self.ttl_minutes)
            .finish_non_exhaustive()
    }
}

impl TokenIssuer for JwtService {
    fn issue(&self, user: &User) -> Result<IssuedToken, AuthError> {
        self.issue_at(user, Timestamp::now())
    }
}

#[async_trait]
impl SessionValidator for JwtService {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let data = decode::<AccessClaims>(token, &self.decoding_key, &self.validation())
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => {
                    tracing::debug!("Token expired");
                    AuthError::TokenExpired
                }
                ErrorKind::InvalidIssuer => {
                    tracing::warn!("Invalid issuer in token");
                    AuthError::InvalidToken
                }
                _ => {
                    tracing::debug!(error = %e, "Token validation failed");
                    AuthError::InvalidToken
                }
            })?;
        let claims = data.claims;

        let user_id: UserId = claims.sub.parse().map_err(|_| {
            tracing::warn!(sub = %claims.sub, "Invalid user id in token");
            AuthError::InvalidToken
        })?;

        Ok(AuthenticatedUser::new(user_id, claims.email, claims.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> JwtService {
        JwtService::new(&Secret::new("test-signing-secret".to_string()), "lifeecho", 30)
    }

    fn user() -> User {
        User::new(
            UserId::new(),
            "Ada@Example.com",
            "$argon2id$stub".to_string(),
            Some("Ada Lovelace".to_string()),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn issued_token_validates_back_to_user() {
        let service = service();
        let user = user();

        let issued = service.issue(&user).unwrap();
        assert_eq!(issued.expires_in, 1800);

        let authenticated = service.validate(&issued.access_token).await.unwrap();
        assert_eq!(authenticated.id, *user.id());
        assert_eq!(authenticated.email, "ada@example.com");
        assert_eq!(authenticated.full_name.as_deref(), Some("Ada Lovelace"));
    }

    #[tokio::test]
    async fn expired_token_is_reported_as_expired() {
        let service = service();
        let two_hours_ago = Timestamp::now().plus_minutes(-120);

        let issued = service.issue_at(&user(), two_hours_ago).unwrap();

        assert_eq!(
            service.validate(&issued.access_token).await,
            Err(AuthError::TokenExpired)
        );
    }

    #[tokio::test]
    async fn token_from_other_secret_is_rejected() {
        let other = JwtService::new(&Secret::new("another-secret".to_string()), "lifeecho", 30);
        let issued = other.issue(&user()).unwrap();

        assert_eq!(
            service().validate(&issued.access_token).await,
            Err(AuthError::InvalidToken)
        );
    }

    #[tokio::test]
    async fn token_from_other_issuer_is_rejected() {
        let other = JwtService::new(&Secret::new("test-signing-secret".to_string()), "someone", 30);
        let issued = other.issue(&user()).unwrap();

        assert_eq!(
            service().validate(&issued.access_token).await,
            Err(AuthError::InvalidToken)
        );
    }

    #[tokio::test]
    async fn garbage_is_invalid() {
        assert_eq!(
            service().validate("not.a.jwt").await,
            Err(AuthError::InvalidToken)
        );
    }

    #[test]
    fn debug_hides_keys() {
        let rendered = format!("{:?}", service());
        assert!(!rendered.contains("test-signing-secret"));
    }
}
