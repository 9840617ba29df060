//! User Service Library
//!
//! User account management: creation with hashed passwords, lookups by id
//! and email, token-based profile resolution and listing. Callers reach it
//! through the [`service::UserService`] trait; the store and the token
//! provider are injected.

pub mod config;
pub mod infra;
pub mod repository;
pub mod service;
pub mod token;

use std::sync::Arc;

use tracing::info;

use common::{AppResult, DatabaseConfig};

use crate::config::UserServiceConfig;
use crate::infra::Database;
use crate::repository::UserStore;
use crate::service::{LoggedUserService, UserManager, UserService};
use crate::token::JwtProvider;

/// Wire the service graph over an open database.
pub fn build_service(db: &Database, config: &UserServiceConfig) -> Arc<dyn UserService> {
    let user_repo = Arc::new(UserStore::new(db.get_connection()));
    let tokens = Arc::new(JwtProvider::new(config.jwt.clone()));

    Arc::new(LoggedUserService::new(UserManager::new(user_repo, tokens)))
}

/// Connect to the database (applying pending migrations), confirm it answers
/// queries, and build the service.
pub async fn connect_service(config: &UserServiceConfig) -> AppResult<Arc<dyn UserService>> {
    let db = Database::connect(&config.database).await?;
    db.ping().await?;
    info!("User service ready");
    Ok(build_service(&db, config))
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(
    config: &DatabaseConfig,
    action: MigrateAction,
) -> Result<Vec<(String, bool)>, Box<dyn std::error::Error>> {
    let db = Database::connect_without_migrations(config).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {}
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(db.migration_status().await?)
}

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}
