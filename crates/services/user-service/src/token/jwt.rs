//! JWT-backed token provider.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use common::{AppError, AppResult, JwtConfig};
use domain::{User, BEARER_TOKEN_PREFIX};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// JWT claims payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub email: String,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

/// Issues bearer tokens and extracts the subject user id from them.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait TokenProvider: Send + Sync {
    /// Issue a signed token whose subject is the user's id
    fn generate_token(&self, user: &User) -> AppResult<String>;

    /// Verify a token and return its subject.
    ///
    /// Fails with [`AppError::InvalidToken`] if the token is missing,
    /// malformed, expired or signed with another key.
    fn user_id_from_token(&self, token: &str) -> AppResult<Uuid>;
}

/// HS256 token provider.
pub struct JwtProvider {
    config: JwtConfig,
}

impl JwtProvider {
    /// Create a provider from signing configuration
    pub fn new(config: JwtConfig) -> Self {
        Self { config }
    }

    /// Verify JWT token and extract claims
    pub fn verify(&self, token: &str) -> AppResult<Claims> {
        let token = token
            .strip_prefix(BEARER_TOKEN_PREFIX)
            .unwrap_or(token)
            .trim();

        if token.is_empty() {
            return Err(AppError::invalid_token("token is missing"));
        }

        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.secret_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }
}

impl TokenProvider for JwtProvider {
    fn generate_token(&self, user: &User) -> AppResult<String> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(self.config.expiration_hours);

        let claims = Claims {
            sub: user.id,
            email: user.email.clone(),
            role: user.role.to_string(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.secret_bytes()),
        )?;

        Ok(token)
    }

    fn user_id_from_token(&self, token: &str) -> AppResult<Uuid> {
        self.verify(token).map(|claims| claims.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::UserRole;

    const SECRET: &str = "test-secret-key-for-testing-only-32chars";

    fn provider(secret: &str) -> JwtProvider {
        JwtProvider::new(JwtConfig {
            secret: secret.to_string(),
            expiration_hours: 48,
        })
    }

    fn test_user() -> User {
        User {
            id: Uuid::new_v4(),
            first_name: "Ana".to_string(),
            last_name: "Lee".to_string(),
            email: "ana@x.com".to_string(),
            password_hash: "hashed".to_string(),
            role: UserRole::Customer,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_generated_token_yields_subject() {
        let provider = provider(SECRET);
        let user = test_user();

        let token = provider.generate_token(&user).unwrap();
        assert_eq!(provider.user_id_from_token(&token).unwrap(), user.id);
    }

    #[test]
    fn test_bearer_prefix_accepted() {
        let provider = provider(SECRET);
        let user = test_user();

        let token = provider.generate_token(&user).unwrap();
        let header = format!("Bearer {}", token);
        assert_eq!(provider.user_id_from_token(&header).unwrap(), user.id);
    }

    #[test]
    fn test_claims_carry_email_and_role() {
        let provider = provider(SECRET);
        let user = test_user();

        let token = provider.generate_token(&user).unwrap();
        let claims = provider.verify(&token).unwrap();

        assert_eq!(claims.email, "ana@x.com");
        assert_eq!(claims.role, "customer");
        assert_eq!(claims.exp - claims.iat, 48 * 3600);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = provider(SECRET).generate_token(&test_user()).unwrap();
        let other = provider("another-secret-key-for-testing-32chars!!");

        assert!(matches!(
            other.user_id_from_token(&token),
            Err(AppError::InvalidToken(_))
        ));
    }

    #[test]
    fn test_expired_token_rejected() {
        let now = Utc::now();
        let claims = Claims {
            sub: Uuid::new_v4(),
            email: "ana@x.com".to_string(),
            role: "customer".to_string(),
            exp: (now - Duration::hours(2)).timestamp(),
            iat: (now - Duration::hours(50)).timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        assert!(matches!(
            provider(SECRET).user_id_from_token(&token),
            Err(AppError::InvalidToken(_))
        ));
    }

    #[test]
    fn test_garbage_and_empty_tokens_rejected() {
        let provider = provider(SECRET);

        assert!(matches!(
            provider.user_id_from_token("not.a.jwt"),
            Err(AppError::InvalidToken(_))
        ));
        assert!(matches!(
            provider.user_id_from_token(""),
            Err(AppError::InvalidToken(_))
        ));
        assert!(matches!(
            provider.user_id_from_token("Bearer "),
            Err(AppError::InvalidToken(_))
        ));
    }
}
