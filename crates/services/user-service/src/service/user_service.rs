//! User service - Handles user registration and lookup.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::{CreateUser, NewUser, PasswordHasher, User, UserRepository, UserResponse};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    /// Register a new user.
    ///
    /// Fails with `EmailAlreadyExists` if the email is taken; validation,
    /// hashing and storage failures are returned as `AppError::Domain`.
    async fn create_user(&self, request: CreateUser) -> AppResult<UserResponse>;

    /// Get user by ID
    async fn get_user(&self, id: Uuid) -> AppResult<UserResponse>;

    /// Number of registered users
    async fn user_count(&self) -> AppResult<usize>;
}

/// Concrete implementation of UserService using the repository and
/// hashing ports.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl UserManager {
    /// Create new user service instance
    pub fn new(repo: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { repo, hasher }
    }

    /// Build the domain user off the async workers; argon2 is CPU-bound.
    async fn build_user(&self, params: NewUser) -> AppResult<User> {
        let hasher = self.hasher.clone();
        let user = tokio::task::spawn_blocking(move || User::new(params, hasher.as_ref()))
            .await
            .map_err(|e| AppError::internal(format!("User construction task failed: {}", e)))??;
        Ok(user)
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn create_user(&self, request: CreateUser) -> AppResult<UserResponse> {
        // Check if email already exists
        if self.repo.find_by_email(&request.email).await?.is_some() {
            tracing::warn!(email = %request.email, "Registration rejected: email already exists");
            return Err(AppError::EmailAlreadyExists);
        }

        let user = self.build_user(NewUser::from(request)).await?;
        let response = UserResponse::from(&user);

        self.repo.save(user).await?;
        tracing::info!(user_id = %response.id, "User created");

        Ok(response)
    }

    async fn get_user(&self, id: Uuid) -> AppResult<UserResponse> {
        self.repo
            .find_by_id(id)
            .await?
            .map(UserResponse::from)
            .ok_or(AppError::NotFound)
    }

    async fn user_count(&self) -> AppResult<usize> {
        Ok(self.repo.count().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::{DateTime, TimeZone, Utc};
    use domain::{DomainError, MockPasswordHasher, MockUserRepository};
    use mockall::predicate::eq;

    fn dob() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(1992, 11, 21, 0, 0, 0).unwrap()
    }

    fn create_request() -> CreateUser {
        CreateUser {
            email: "john@example.com".to_string(),
            username: "johndoe".to_string(),
            password: "12345678".to_string(),
            date_of_birth: dob(),
        }
    }

    fn existing_user() -> User {
        let mut hasher = MockPasswordHasher::new();
        hasher
            .expect_hash()
            .returning(|_| Ok("hashed-password".to_string()));
        User::new(
            NewUser {
                email: "john@example.com".to_string(),
                username: "existing-user".to_string(),
                password: "password".to_string(),
                date_of_birth: dob(),
            },
            &hasher,
        )
        .unwrap()
    }

    fn hasher_returning_hash() -> MockPasswordHasher {
        let mut hasher = MockPasswordHasher::new();
        hasher
            .expect_hash()
            .times(1)
            .returning(|_| Ok("hashed-password".to_string()));
        hasher
    }

    fn service(repo: MockUserRepository, hasher: MockPasswordHasher) -> UserManager {
        UserManager::new(Arc::new(repo), Arc::new(hasher))
    }

    #[tokio::test]
    async fn test_create_user_success() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .withf(|email| email == "john@example.com")
            .times(1)
            .returning(|_| Ok(None));
        repo.expect_save()
            .withf(|user| {
                user.email() == "john@example.com" && user.password_hash() == "hashed-password"
            })
            .times(1)
            .returning(|_| Ok(()));

        let result = service(repo, hasher_returning_hash())
            .create_user(create_request())
            .await
            .unwrap();

        assert!(!result.id.is_nil());
        assert_eq!(result.email, "john@example.com");
        assert_eq!(result.username, "johndoe");
        assert_eq!(result.date_of_birth, dob());
    }

    #[tokio::test]
    async fn test_create_user_duplicate_email() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .times(1)
            .returning(|_| Ok(Some(existing_user())));
        repo.expect_save().never();

        let mut hasher = MockPasswordHasher::new();
        hasher.expect_hash().never();

        let err = service(repo, hasher)
            .create_user(create_request())
            .await
            .unwrap_err();

        assert_eq!(err, AppError::EmailAlreadyExists);
        assert_eq!(err.to_string(), "email already exists");
    }

    #[tokio::test]
    async fn test_create_user_lookup_failure() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .times(1)
            .returning(|_| Err(DomainError::storage("error in data repository")));
        repo.expect_save().never();

        let mut hasher = MockPasswordHasher::new();
        hasher.expect_hash().never();

        let err = service(repo, hasher)
            .create_user(create_request())
            .await
            .unwrap_err();

        assert_eq!(
            err,
            AppError::Domain(DomainError::storage("error in data repository"))
        );
    }

    #[tokio::test]
    async fn test_create_user_save_failure() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(|_| Ok(None));
        repo.expect_save()
            .times(1)
            .returning(|_| Err(DomainError::storage("error in data repository")));

        let err = service(repo, hasher_returning_hash())
            .create_user(create_request())
            .await
            .unwrap_err();

        assert_eq!(
            err,
            AppError::Domain(DomainError::storage("error in data repository"))
        );
    }

    #[tokio::test]
    async fn test_create_user_validation_skips_hashing_and_storage() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(|_| Ok(None));
        repo.expect_save().never();

        let mut hasher = MockPasswordHasher::new();
        hasher.expect_hash().never();

        let request = CreateUser {
            email: String::new(),
            ..create_request()
        };
        let err = service(repo, hasher).create_user(request).await.unwrap_err();

        assert_eq!(err, AppError::Domain(DomainError::EmailRequired));
    }

    #[tokio::test]
    async fn test_create_user_short_password() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(|_| Ok(None));
        repo.expect_save().never();

        let mut hasher = MockPasswordHasher::new();
        hasher.expect_hash().never();

        let request = CreateUser {
            password: "1234".to_string(),
            ..create_request()
        };
        let err = service(repo, hasher).create_user(request).await.unwrap_err();

        assert_eq!(err, AppError::Domain(DomainError::PasswordTooShort));
    }

    #[tokio::test]
    async fn test_create_user_hashing_failure() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(|_| Ok(None));
        repo.expect_save().never();

        let mut hasher = MockPasswordHasher::new();
        hasher
            .expect_hash()
            .times(1)
            .returning(|_| Err(DomainError::hashing("out of memory")));

        let err = service(repo, hasher)
            .create_user(create_request())
            .await
            .unwrap_err();

        assert_eq!(err, AppError::Domain(DomainError::hashing("out of memory")));
    }

    #[tokio::test]
    async fn test_get_user_success() {
        let user = existing_user();
        let user_id = user.id();

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .with(eq(user_id))
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let result = service(repo, MockPasswordHasher::new())
            .get_user(user_id)
            .await
            .unwrap();

        assert_eq!(result.id, user_id);
        assert_eq!(result.username, "existing-user");
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let err = service(repo, MockPasswordHasher::new())
            .get_user(Uuid::new_v4())
            .await
            .unwrap_err();

        assert_eq!(err, AppError::NotFound);
    }

    #[tokio::test]
    async fn test_user_count() {
        let mut repo = MockUserRepository::new();
        repo.expect_count().returning(|| Ok(3));

        let count = service(repo, MockPasswordHasher::new())
            .user_count()
            .await
            .unwrap();

        assert_eq!(count, 3);
    }
}
