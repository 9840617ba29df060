//! Logging decorator for [`UserService`].
//!
//! Wraps any implementation and records each failure once, at the service
//! boundary, before handing the error back unchanged.

use async_trait::async_trait;
use uuid::Uuid;

use common::AppResult;
use domain::{CreateUser, User, UserProfile};

use super::UserService;

/// UserService that logs every failed operation of the wrapped service.
pub struct LoggedUserService<S> {
    inner: S,
}

impl<S: UserService> LoggedUserService<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

/// Emit an error event for a failed result and pass it through.
fn observe<T>(operation: &'static str, result: AppResult<T>) -> AppResult<T> {
    match &result {
        Ok(_) => tracing::debug!(operation, "user operation succeeded"),
        Err(e) => tracing::error!(operation, code = e.code(), error = %e, "user operation failed"),
    }
    result
}

#[async_trait]
impl<S: UserService> UserService for LoggedUserService<S> {
    async fn create_user(&self, input: CreateUser) -> AppResult<User> {
        let email = input.email.clone();
        let result = self.inner.create_user(input).await;
        if let Ok(user) = &result {
            tracing::info!(user_id = %user.id, email = %email, "user created");
        }
        observe("create_user", result)
    }

    async fn find_user_by_id(&self, id: Uuid) -> AppResult<User> {
        observe("find_user_by_id", self.inner.find_user_by_id(id).await)
    }

    async fn get_user_by_email(&self, email: &str) -> AppResult<User> {
        observe("get_user_by_email", self.inner.get_user_by_email(email).await)
    }

    async fn get_user_profile_by_token(&self, token: &str) -> AppResult<UserProfile> {
        observe(
            "get_user_profile_by_token",
            self.inner.get_user_profile_by_token(token).await,
        )
    }

    async fn get_all_users(&self) -> AppResult<Vec<User>> {
        observe("get_all_users", self.inner.get_all_users().await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    use common::AppError;
    use tracing::subscriber::DefaultGuard;

    /// Log sink shared with the fmt subscriber
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn lines(&self) -> Vec<String> {
            let buf = self.0.lock().unwrap();
            String::from_utf8_lossy(&buf).lines().map(str::to_string).collect()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, data: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(data);
            Ok(data.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Install a thread-local subscriber writing plain text into `logs`
    fn capture(logs: &CapturedLogs) -> DefaultGuard {
        let sink = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || sink.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Service that fails every call with a fixed error
    struct FailingService;

    #[async_trait]
    impl UserService for FailingService {
        async fn create_user(&self, input: CreateUser) -> AppResult<User> {
            Err(AppError::duplicate_user(input.email))
        }

        async fn find_user_by_id(&self, id: Uuid) -> AppResult<User> {
            Err(AppError::not_found(format!("user with id {}", id)))
        }

        async fn get_user_by_email(&self, email: &str) -> AppResult<User> {
            Err(AppError::not_found(format!("user with email {}", email)))
        }

        async fn get_user_profile_by_token(&self, _token: &str) -> AppResult<UserProfile> {
            Err(AppError::invalid_token("bad signature"))
        }

        async fn get_all_users(&self) -> AppResult<Vec<User>> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn test_errors_pass_through_unchanged() {
        let service = LoggedUserService::new(FailingService);

        let result = service.get_user_profile_by_token("t").await;
        assert!(matches!(result, Err(AppError::InvalidToken(msg)) if msg == "bad signature"));

        let result = service.get_user_by_email("nobody@x.com").await;
        assert!(matches!(result, Err(AppError::NotFound(_))));

        let result = service
            .create_user(CreateUser {
                first_name: "Ana".to_string(),
                last_name: "Lee".to_string(),
                email: "ana@x.com".to_string(),
                password: "secret1".to_string(),
                role: Default::default(),
            })
            .await;
        assert!(matches!(result, Err(AppError::DuplicateUser(_))));
    }

    #[tokio::test]
    async fn test_failure_logged_once_with_operation_and_code() {
        let logs = CapturedLogs::default();
        let _guard = capture(&logs);

        let service = LoggedUserService::new(FailingService);
        let _ = service.get_user_profile_by_token("t").await;

        let errors: Vec<String> = logs
            .lines()
            .into_iter()
            .filter(|line| line.contains("ERROR"))
            .collect();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("get_user_profile_by_token"));
        assert!(errors[0].contains("INVALID_TOKEN"));
        assert!(errors[0].contains("bad signature"));
    }

    #[tokio::test]
    async fn test_success_logs_no_error() {
        let logs = CapturedLogs::default();
        let _guard = capture(&logs);

        let service = LoggedUserService::new(FailingService);
        service.get_all_users().await.unwrap();

        let lines = logs.lines();
        assert!(lines.iter().all(|line| !line.contains("ERROR")));
        assert!(lines.iter().any(|line| line.contains("get_all_users")));
    }

    #[tokio::test]
    async fn test_success_passes_through() {
        let service = LoggedUserService::new(FailingService);
        assert!(service.get_all_users().await.unwrap().is_empty());
    }
}
