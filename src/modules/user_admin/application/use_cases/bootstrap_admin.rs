use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::application::domain::entities::{NewUser, User, UserRole, UserStatus};
use crate::auth::application::ports::outgoing::{PasswordHasher, UserQuery, UserRepository};

#[derive(Debug, Clone)]
pub enum BootstrapOutcome {
    AlreadyExists(User),
    Created(User),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BootstrapAdminError {
    #[error("ADMIN_PASSWORD is not configured")]
    PasswordNotConfigured,

    #[error("Internal error: {0}")]
    Internal(String),
}

#[async_trait]
pub trait IBootstrapAdminUseCase: Send + Sync {
    async fn execute(&self) -> Result<BootstrapOutcome, BootstrapAdminError>;
}

/// Creates the configured `super_admin` account once.
#[derive(Clone)]
pub struct BootstrapAdminUseCase<Q: UserQuery, R: UserRepository> {
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
    email: String,
    password: Option<String>,
}

impl<Q: UserQuery, R: UserRepository> BootstrapAdminUseCase<Q, R> {
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: Arc<dyn PasswordHasher>,
        email: String,
        password: Option<String>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
            email: email.trim().to_lowercase(),
            password,
        }
    }
}

#[async_trait]
impl<Q: UserQuery, R: UserRepository> IBootstrapAdminUseCase for BootstrapAdminUseCase<Q, R> {
    async fn execute(&self) -> Result<BootstrapOutcome, BootstrapAdminError> {
        if let Some(existing) = self
            .query
            .find_by_email(&self.email)
            .await
            .map_err(|e| BootstrapAdminError::Internal(e.to_string()))?
        {
            return Ok(BootstrapOutcome::AlreadyExists(existing));
        }

        let Some(password) = self.password.as_deref() else {
            warn!(email = %self.email, "Admin bootstrap requested without ADMIN_PASSWORD");
            return Err(BootstrapAdminError::PasswordNotConfigured);
        };

        let password_hash = self
            .password_hasher
            .hash_password(password)
            .await
            .map_err(|e| BootstrapAdminError::Internal(e.to_string()))?;

        let admin = self
            .repository
            .create_user(NewUser {
                id: Uuid::new_v4(),
                email: self.email.clone(),
                password_hash,
                first_name: "Admin".to_string(),
                last_name: "User".to_string(),
                role: UserRole::SuperAdmin,
                email_verified: true,
                email_verify_token: None,
                status: UserStatus::Active,
            })
            .await
            .map_err(|e| BootstrapAdminError::Internal(e.to_string()))?;

        info!(user_id = %admin.id, email = %admin.email, "Bootstrap admin created");
        Ok(BootstrapOutcome::Created(admin))
    }
}
