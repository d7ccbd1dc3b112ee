//! User account creation and lookup service.

use std::sync::Arc;

use crate::domain::entities::{NewUser, User};
use crate::domain::password::PasswordHasher;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use serde_json::json;

/// Service for creating and retrieving users.
///
/// New users are persisted together with an empty cart. Passwords are hashed
/// through the injected [`PasswordHasher`] before they reach the repository.
pub struct UserService {
    user_repository: Arc<dyn UserRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self {
            user_repository,
            password_hasher,
        }
    }

    /// Creates a user with an empty cart.
    ///
    /// Field presence and password length are checked by the request DTO;
    /// this only rejects a confirmation that does not match.
    ///
    /// The returned user carries the hashed password.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `confirm_password` differs from `password`.
    /// Returns [`AppError::Conflict`] if the username is already taken.
    /// Returns [`AppError::Internal`] on hashing or storage errors.
    pub async fn create_user(
        &self,
        username: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<User, AppError> {
        if password != confirm_password {
            tracing::warn!(username, "Password confirmation mismatch");
            return Err(AppError::bad_request(
                "Passwords do not match",
                json!({ "field": "confirmPassword" }),
            ));
        }

        let password_hash = self.password_hasher.hash(password)?;

        let user = self
            .user_repository
            .create(NewUser {
                username: username.to_string(),
                password_hash,
            })
            .await?;

        tracing::info!(user_id = user.id, username = %user.username, "User created");

        Ok(user)
    }

    /// Retrieves a user by ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user has this ID.
    pub async fn find_by_id(&self, id: i64) -> Result<User, AppError> {
        self.user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found", json!({ "id": id })))
    }

    /// Retrieves a user by username.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user has this username.
    pub async fn find_by_username(&self, username: &str) -> Result<User, AppError> {
        self.user_repository
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::not_found("User not found", json!({ "username": username })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Cart;
    use crate::domain::password::MockPasswordHasher;
    use crate::domain::repositories::MockUserRepository;

    const USERNAME: &str = "test";
    const PASSWORD: &str = "testPassword";
    const USER_ID: i64 = 0;

    fn create_test_user() -> User {
        User::new(
            USER_ID,
            USERNAME.to_string(),
            PASSWORD.to_string(),
            Cart::empty(0, USER_ID),
        )
    }

    fn service(repo: MockUserRepository, hasher: MockPasswordHasher) -> UserService {
        UserService::new(Arc::new(repo), Arc::new(hasher))
    }

    #[tokio::test]
    async fn test_create_user_hashes_password() {
        let mut mock_repo = MockUserRepository::new();
        let mut mock_hasher = MockPasswordHasher::new();

        mock_hasher
            .expect_hash()
            .withf(|plain| plain == PASSWORD)
            .times(1)
            .returning(|_| Ok("thisIsHashed".to_string()));

        mock_repo
            .expect_create()
            .withf(|new_user| new_user.username == USERNAME && new_user.password_hash == "thisIsHashed")
            .times(1)
            .returning(|new_user| {
                Ok(User::new(
                    USER_ID,
                    new_user.username,
                    new_user.password_hash,
                    Cart::empty(0, USER_ID),
                ))
            });

        let result = service(mock_repo, mock_hasher)
            .create_user(USERNAME, PASSWORD, PASSWORD)
            .await;

        assert!(result.is_ok());
        let user = result.unwrap();
        assert_eq!(user.id, 0);
        assert_eq!(user.username, USERNAME);
        assert_eq!(user.password, "thisIsHashed");
        assert!(user.cart.is_empty());
    }

    #[tokio::test]
    async fn test_create_user_confirmation_mismatch() {
        let mut mock_repo = MockUserRepository::new();
        let mut mock_hasher = MockPasswordHasher::new();

        mock_hasher.expect_hash().times(0);
        mock_repo.expect_create().times(0);

        let result = service(mock_repo, mock_hasher)
            .create_user(USERNAME, PASSWORD, "somethingElse")
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_create_user_duplicate_username() {
        let mut mock_repo = MockUserRepository::new();
        let mut mock_hasher = MockPasswordHasher::new();

        mock_hasher
            .expect_hash()
            .returning(|_| Ok("thisIsHashed".to_string()));
        mock_repo.expect_create().times(1).returning(|_| {
            Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "users_username_key" }),
            ))
        });

        let result = service(mock_repo, mock_hasher)
            .create_user(USERNAME, PASSWORD, PASSWORD)
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_find_user_by_valid_id() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_find_by_id()
            .withf(|id| *id == USER_ID)
            .times(1)
            .returning(|_| Ok(Some(create_test_user())));

        let user = service(mock_repo, MockPasswordHasher::new())
            .find_by_id(USER_ID)
            .await
            .unwrap();

        assert_eq!(user.id, USER_ID);
        assert_eq!(user.username, USERNAME);
    }

    #[tokio::test]
    async fn test_find_user_by_invalid_id() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let result = service(mock_repo, MockPasswordHasher::new())
            .find_by_id(0)
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_find_user_by_valid_name() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_find_by_username()
            .withf(|name| name == USERNAME)
            .times(1)
            .returning(|_| Ok(Some(create_test_user())));

        let user = service(mock_repo, MockPasswordHasher::new())
            .find_by_username(USERNAME)
            .await
            .unwrap();

        assert_eq!(user.id, USER_ID);
        assert_eq!(user.username, USERNAME);
    }

    #[tokio::test]
    async fn test_find_user_by_invalid_name() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(None));

        let result = service(mock_repo, MockPasswordHasher::new())
            .find_by_username("not found")
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }
}
