use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::auth::application::domain::entities::{NewUser, User, UserRole, UserStatus};
use crate::auth::application::domain::policies::normalize_email;
use crate::auth::application::ports::incoming::PasswordPolicy;
use crate::auth::application::ports::outgoing::{
    PasswordHasher, UserQuery, UserRepository, UserRepositoryError,
};

/// Account created from the admin panel. Every field is required.
#[derive(Debug, Clone)]
pub struct AdminCreateUserInput {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AdminCreateUserError {
    #[error("{0}")]
    Validation(String),

    #[error("User with this email already exists")]
    EmailTaken,

    #[error("Internal error: {0}")]
    Internal(String),
}

#[async_trait]
pub trait IAdminCreateUserUseCase: Send + Sync {
    async fn execute(&self, input: AdminCreateUserInput) -> Result<User, AdminCreateUserError>;
}

#[derive(Clone)]
pub struct AdminCreateUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
    password_policy: Arc<dyn PasswordPolicy>,
}

impl<Q, R> AdminCreateUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: Arc<dyn PasswordHasher>,
        password_policy: Arc<dyn PasswordPolicy>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
            password_policy,
        }
    }
}

#[async_trait]
impl<Q, R> IAdminCreateUserUseCase for AdminCreateUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    async fn execute(&self, input: AdminCreateUserInput) -> Result<User, AdminCreateUserError> {
        let first_name = input.first_name.trim().to_string();
        let last_name = input.last_name.trim().to_string();
        if first_name.is_empty() || last_name.is_empty() {
            return Err(AdminCreateUserError::Validation(
                "Missing required fields".to_string(),
            ));
        }

        let role: UserRole = input
            .role
            .parse()
            .map_err(|_| AdminCreateUserError::Validation("Invalid role".to_string()))?;

        let email = normalize_email(&input.email)
            .map_err(|e| AdminCreateUserError::Validation(e.to_string()))?;

        self.password_policy
            .validate(&input.password)
            .map_err(|e| AdminCreateUserError::Validation(e.to_string()))?;

        if self
            .query
            .find_by_email(&email)
            .await
            .map_err(|e| AdminCreateUserError::Internal(e.to_string()))?
            .is_some()
        {
            return Err(AdminCreateUserError::EmailTaken);
        }

        let password_hash = self
            .password_hasher
            .hash_password(&input.password)
            .await
            .map_err(|e| AdminCreateUserError::Internal(e.to_string()))?;

        let user = self
            .repository
            .create_user(NewUser {
                id: Uuid::new_v4(),
                email,
                password_hash,
                first_name,
                last_name,
                role,
                email_verified: true,
                email_verify_token: None,
                status: UserStatus::Active,
            })
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserAlreadyExists => AdminCreateUserError::EmailTaken,
                other => AdminCreateUserError::Internal(other.to_string()),
            })?;

        info!(user_id = %user.id, email = %user.email, role = %user.role, "Admin created user");
        Ok(user)
    }
}
