use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::auth::application::domain::entities::{NewUser, User, UserRole, UserStatus};
use crate::auth::application::domain::policies::normalize_email;
use crate::auth::application::ports::incoming::PasswordPolicy;
use crate::auth::application::ports::outgoing::{
    PasswordHasher, TokenGenerator, UserQuery, UserRepository, UserRepositoryError,
};

#[derive(Debug, Clone)]
pub struct CreateUserInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct CreateUserOutput {
    pub user: User,
    pub verification_token: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CreateUserError {
    #[error("{0}")]
    Validation(String),

    #[error("User with this email already exists")]
    EmailTaken,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Self-service signup. New accounts start unverified.
#[async_trait]
pub trait ICreateUserUseCase: Send + Sync {
    async fn execute(&self, input: CreateUserInput) -> Result<CreateUserOutput, CreateUserError>;
}

#[derive(Clone)]
pub struct CreateUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
    password_policy: Arc<dyn PasswordPolicy>,
    token_generator: Arc<dyn TokenGenerator>,
}

impl<Q, R> CreateUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: Arc<dyn PasswordHasher>,
        password_policy: Arc<dyn PasswordPolicy>,
        token_generator: Arc<dyn TokenGenerator>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
            password_policy,
            token_generator,
        }
    }
}

fn required_name(value: &str, field: &str) -> Result<String, CreateUserError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CreateUserError::Validation(format!("{} is required", field)));
    }
    Ok(trimmed.to_string())
}

#[async_trait]
impl<Q, R> ICreateUserUseCase for CreateUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    async fn execute(&self, input: CreateUserInput) -> Result<CreateUserOutput, CreateUserError> {
        let first_name = required_name(&input.first_name, "First name")?;
        let last_name = required_name(&input.last_name, "Last name")?;
        let email = normalize_email(&input.email)
            .map_err(|e| CreateUserError::Validation(e.to_string()))?;
        self.password_policy
            .validate(&input.password)
            .map_err(|e| CreateUserError::Validation(e.to_string()))?;

        let existing = self
            .query
            .find_by_email(&email)
            .await
            .map_err(|e| CreateUserError::Internal(e.to_string()))?;
        if existing.is_some() {
            return Err(CreateUserError::EmailTaken);
        }

        let password_hash = self
            .password_hasher
            .hash_password(&input.password)
            .await
            .map_err(|e| CreateUserError::Internal(e.to_string()))?;

        let verification_token = self.token_generator.generate();

        let user = self
            .repository
            .create_user(NewUser {
                id: Uuid::new_v4(),
                email,
                password_hash,
                first_name,
                last_name,
                role: UserRole::EndUser,
                email_verified: false,
                email_verify_token: Some(verification_token.clone()),
                status: UserStatus::PendingVerification,
            })
            .await
            .map_err(|e| match e {
                // Lost a race against a concurrent signup
                UserRepositoryError::UserAlreadyExists => CreateUserError::EmailTaken,
                other => CreateUserError::Internal(other.to_string()),
            })?;

        info!(user_id = %user.id, email = %user.email, "User registered");

        Ok(CreateUserOutput {
            user,
            verification_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::services::BasicPasswordPolicy;
    use crate::tests::support::in_memory::{InMemoryUsers, PlainHasher, SequentialTokens};

    fn use_case(users: InMemoryUsers) -> CreateUserUseCase<InMemoryUsers, InMemoryUsers> {
        CreateUserUseCase::new(
            users.clone(),
            users,
            Arc::new(PlainHasher),
            Arc::new(BasicPasswordPolicy),
            Arc::new(SequentialTokens::default()),
        )
    }

    fn input(email: &str, password: &str) -> CreateUserInput {
        CreateUserInput {
            first_name: " Alex ".to_string(),
            last_name: "Rolls".to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_creates_pending_end_user() {
        let users = InMemoryUsers::default();

        let output = use_case(users.clone())
            .execute(input("Alex@Example.com", "secret1"))
            .await
            .unwrap();

        let user = output.user;
        assert_eq!(user.email, "alex@example.com");
        assert_eq!(user.first_name, "Alex");
        assert_eq!(user.role, "end_user");
        assert_eq!(user.status, UserStatus::PendingVerification);
        assert!(!user.email_verified);
        assert_eq!(user.password_hash, "hashed:secret1");
        assert_eq!(output.verification_token, "token-1");
        assert_eq!(user.email_verify_token.as_deref(), Some("token-1"));
        assert_eq!(users.count(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_email_differing_in_case_is_rejected() {
        let users = InMemoryUsers::default();
        let uc = use_case(users.clone());

        uc.execute(input("alex@example.com", "secret1")).await.unwrap();
        let second = uc.execute(input("ALEX@example.com", "secret2")).await;

        assert_eq!(second.unwrap_err(), CreateUserError::EmailTaken);
        assert_eq!(users.count(), 1);
    }

    #[tokio::test]
    async fn test_short_password_is_rejected() {
        let result = use_case(InMemoryUsers::default())
            .execute(input("alex@example.com", "12345"))
            .await;

        assert!(matches!(result, Err(CreateUserError::Validation(_))));
    }

    #[tokio::test]
    async fn test_blank_name_and_bad_email_are_rejected() {
        let uc = use_case(InMemoryUsers::default());

        let mut blank = input("alex@example.com", "secret1");
        blank.last_name = "   ".to_string();
        assert_eq!(
            uc.execute(blank).await.unwrap_err(),
            CreateUserError::Validation("Last name is required".to_string())
        );

        let result = uc.execute(input("not-an-email", "secret1")).await;
        assert!(matches!(result, Err(CreateUserError::Validation(_))));
    }

    #[tokio::test]
    async fn test_repository_failure_is_internal() {
        let result = use_case(InMemoryUsers::failing())
            .execute(input("alex@example.com", "secret1"))
            .await;

        assert!(matches!(result, Err(CreateUserError::Internal(_))));
    }
}
