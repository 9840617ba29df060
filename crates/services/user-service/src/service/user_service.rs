//! User service - Handles user-related business logic.
//!
//! SOLID (SRP): Handles user-related use cases only.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use common::{AppError, AppResult, OptionExt};
use domain::{CreateUser, Password, User, UserProfile};

use crate::repository::UserRepository;
use crate::token::TokenProvider;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Create a new user, hashing the supplied plaintext password
    async fn create_user(&self, input: CreateUser) -> AppResult<User>;

    /// Get user by ID (full record, including the password hash)
    async fn find_user_by_id(&self, id: Uuid) -> AppResult<User>;

    /// Get user by email (full record, including the password hash)
    async fn get_user_by_email(&self, email: &str) -> AppResult<User>;

    /// Resolve the caller's profile from a bearer token
    async fn get_user_profile_by_token(&self, token: &str) -> AppResult<UserProfile>;

    /// List every user
    async fn get_all_users(&self) -> AppResult<Vec<User>>;
}

/// Concrete implementation of UserService over a repository and a token provider.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
    tokens: Arc<dyn TokenProvider>,
}

impl UserManager {
    /// Create new user service instance
    pub fn new(repo: Arc<dyn UserRepository>, tokens: Arc<dyn TokenProvider>) -> Self {
        Self { repo, tokens }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn create_user(&self, input: CreateUser) -> AppResult<User> {
        let CreateUser {
            first_name,
            last_name,
            email,
            password,
            role,
        } = input;

        // Early, friendly rejection; the unique index is what guarantees it
        if self.repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::duplicate_user(email));
        }

        let password_hash = Password::new(&password)?.into_string();

        self.repo
            .create(first_name, last_name, email, password_hash, role)
            .await
    }

    async fn find_user_by_id(&self, id: Uuid) -> AppResult<User> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_not_found(|| format!("user with id {}", id))
    }

    async fn get_user_by_email(&self, email: &str) -> AppResult<User> {
        self.repo
            .find_by_email(email)
            .await?
            .ok_or_not_found(|| format!("user with email {}", email))
    }

    async fn get_user_profile_by_token(&self, token: &str) -> AppResult<UserProfile> {
        let id = self.tokens.user_id_from_token(token)?;

        self.repo
            .find_profile(id)
            .await?
            .ok_or_not_found(|| format!("user with id {}", id))
    }

    async fn get_all_users(&self) -> AppResult<Vec<User>> {
        self.repo.list().await
    }
}
