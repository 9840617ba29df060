//! User service configuration.

use std::env;

use common::{AppError, AppResult, DatabaseConfig, JwtConfig};
use domain::{DEFAULT_JWT_EXPIRATION_HOURS, MIN_JWT_SECRET_LENGTH};

/// User service configuration.
#[derive(Debug, Clone, Default)]
pub struct UserServiceConfig {
    /// Database connection settings
    pub database: DatabaseConfig,
    /// Token signing settings
    pub jwt: JwtConfig,
}

impl UserServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// `JWT_SECRET` is required and must be at least
    /// [`MIN_JWT_SECRET_LENGTH`] characters.
    pub fn from_env() -> AppResult<Self> {
        let database = Self::database_from_env();

        let secret = env::var("JWT_SECRET")
            .or_else(|_| env::var("USER_SERVICE_JWT_SECRET"))
            .map_err(|_| AppError::config("JWT_SECRET must be set"))?;

        let jwt = JwtConfig {
            secret,
            expiration_hours: parse_var("JWT_EXPIRATION_HOURS")
                .unwrap_or(DEFAULT_JWT_EXPIRATION_HOURS),
        };

        let config = Self { database, jwt };
        config.validate()?;
        Ok(config)
    }

    /// Load only the database settings (migrations need no signing key).
    pub fn database_from_env() -> DatabaseConfig {
        let defaults = DatabaseConfig::default();

        DatabaseConfig {
            url: env::var("USER_SERVICE_DATABASE_URL")
                .or_else(|_| env::var("DATABASE_URL"))
                .unwrap_or(defaults.url),
            max_connections: parse_var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or(defaults.max_connections),
            min_connections: parse_var("DATABASE_MIN_CONNECTIONS")
                .unwrap_or(defaults.min_connections),
        }
    }

    /// Check invariants that environment parsing alone cannot express.
    pub fn validate(&self) -> AppResult<()> {
        if self.jwt.secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(AppError::config(format!(
                "JWT secret must be at least {} characters",
                MIN_JWT_SECRET_LENGTH
            )));
        }
        if self.jwt.expiration_hours <= 0 {
            return Err(AppError::config("JWT_EXPIRATION_HOURS must be positive"));
        }
        if self.database.min_connections > self.database.max_connections {
            return Err(AppError::config(
                "DATABASE_MIN_CONNECTIONS exceeds DATABASE_MAX_CONNECTIONS",
            ));
        }
        Ok(())
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_secret(secret: &str) -> UserServiceConfig {
        UserServiceConfig {
            database: DatabaseConfig::default(),
            jwt: JwtConfig {
                secret: secret.to_string(),
                expiration_hours: DEFAULT_JWT_EXPIRATION_HOURS,
            },
        }
    }

    #[test]
    fn test_short_secret_rejected() {
        let result = config_with_secret("too-short").validate();
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_valid_config_accepted() {
        let config = config_with_secret("test-secret-key-for-testing-only-32chars");
        assert!(config.validate().is_ok());
    }

    // The only test in this crate that touches the process environment
    #[test]
    fn test_from_env_requires_secret() {
        for var in ["JWT_SECRET", "USER_SERVICE_JWT_SECRET", "JWT_EXPIRATION_HOURS"] {
            env::remove_var(var);
        }

        let result = UserServiceConfig::from_env();
        assert!(matches!(result, Err(AppError::Config(msg)) if msg.contains("JWT_SECRET")));

        env::set_var("JWT_SECRET", "too-short");
        assert!(matches!(UserServiceConfig::from_env(), Err(AppError::Config(_))));

        env::set_var("JWT_SECRET", "test-secret-key-for-testing-only-32chars");
        env::set_var("JWT_EXPIRATION_HOURS", "12");
        let config = UserServiceConfig::from_env().unwrap();
        assert_eq!(config.jwt.expiration_hours, 12);

        for var in ["JWT_SECRET", "JWT_EXPIRATION_HOURS"] {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_connection_bounds_checked() {
        let mut config = config_with_secret("test-secret-key-for-testing-only-32chars");
        config.database.min_connections = 20;
        config.database.max_connections = 5;

        assert!(config.validate().is_err());
    }
}
