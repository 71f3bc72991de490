use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Deserializer};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::application::domain::entities::{Session, User};
use crate::auth::application::domain::policies::{is_admin, normalize_email, EmailPolicyError};
use crate::auth::application::ports::outgoing::{
    PasswordHasher, SessionRepository, TokenGenerator, UserQuery, UserRepository,
};
use crate::auth::application::services::hash_token;

// ========================= Login Request =========================
/// Validated credentials. The email is normalized on construction.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LoginRequestError {
    #[error("Email cannot be empty")]
    EmptyEmail,
    #[error("Invalid email format")]
    InvalidEmailFormat,
    #[error("Password cannot be empty")]
    EmptyPassword,
}

impl LoginRequest {
    pub fn new(email: String, password: String) -> Result<Self, LoginRequestError> {
        let email = normalize_email(&email).map_err(|e| match e {
            EmailPolicyError::Empty => LoginRequestError::EmptyEmail,
            EmailPolicyError::InvalidFormat => LoginRequestError::InvalidEmailFormat,
        })?;

        if password.is_empty() {
            return Err(LoginRequestError::EmptyPassword);
        }

        Ok(Self { email, password })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl<'de> Deserialize<'de> for LoginRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct LoginRequestHelper {
            #[serde(default)]
            email: String,
            #[serde(default)]
            password: String,
        }

        let helper = LoginRequestHelper::deserialize(deserializer)?;
        LoginRequest::new(helper.email, helper.password).map_err(serde::de::Error::custom)
    }
}

/// Which front end the login comes from. The admin panel only admits admin roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginAudience {
    Web,
    Admin,
}

// ====================== Login Error =============================
#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Please verify your email before logging in")]
    EmailNotVerified,

    #[error("Account is inactive")]
    AccountInactive,

    #[error("Access denied. Admin privileges required.")]
    AdminAccessRequired,

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Clone)]
pub struct LoginOutput {
    pub user: User,
    /// Raw bearer token. Only its digest is stored.
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

// ============================ Login User Use Case =============================
#[async_trait]
pub trait ILoginUserUseCase: Send + Sync {
    async fn execute(
        &self,
        request: LoginRequest,
        audience: LoginAudience,
    ) -> Result<LoginOutput, LoginError>;
}

#[derive(Clone)]
pub struct LoginUserUseCase<Q, R, S>
where
    Q: UserQuery,
    R: UserRepository,
    S: SessionRepository,
{
    query: Q,
    repository: R,
    sessions: S,
    password_hasher: Arc<dyn PasswordHasher>,
    token_generator: Arc<dyn TokenGenerator>,
    session_duration: Duration,
    decoy_hash: Arc<OnceCell<String>>,
}

const DECOY_PASSWORD: &str = "sbr-login-decoy-password";

impl<Q, R, S> LoginUserUseCase<Q, R, S>
where
    Q: UserQuery,
    R: UserRepository,
    S: SessionRepository,
{
    pub fn new(
        query: Q,
        repository: R,
        sessions: S,
        password_hasher: Arc<dyn PasswordHasher>,
        token_generator: Arc<dyn TokenGenerator>,
        session_duration: Duration,
    ) -> Self {
        Self {
            query,
            repository,
            sessions,
            password_hasher,
            token_generator,
            session_duration,
            decoy_hash: Arc::new(OnceCell::new()),
        }
    }

    /// Runs one throwaway verification for logins with an unknown email.
    async fn verify_decoy(&self, password: &str) {
        let decoy = self
            .decoy_hash
            .get_or_try_init(|| self.password_hasher.hash_password(DECOY_PASSWORD))
            .await;

        match decoy {
            Ok(hash) => {
                let _ = self.password_hasher.verify_password(password, hash).await;
            }
            Err(e) => warn!(error = %e, "Failed to prepare decoy password hash"),
        }
    }

    async fn open_session(&self, user_id: Uuid) -> Result<(String, Session), LoginError> {
        let token = self.token_generator.generate();
        let now = Utc::now();
        let session = Session {
            id: Uuid::new_v4(),
            user_id,
            token_hash: hash_token(&token),
            expires_at: now + self.session_duration,
            created_at: now,
        };

        let stored = self
            .sessions
            .create(session)
            .await
            .map_err(|e| LoginError::Internal(e.to_string()))?;

        Ok((token, stored))
    }
}

#[async_trait]
impl<Q, R, S> ILoginUserUseCase for LoginUserUseCase<Q, R, S>
where
    Q: UserQuery,
    R: UserRepository,
    S: SessionRepository,
{
    async fn execute(
        &self,
        request: LoginRequest,
        audience: LoginAudience,
    ) -> Result<LoginOutput, LoginError> {
        let user = self
            .query
            .find_by_email(request.email())
            .await
            .map_err(|e| LoginError::Internal(e.to_string()))?;

        // Unknown email and wrong password are indistinguishable to the caller
        let Some(user) = user else {
            self.verify_decoy(request.password()).await;
            warn!(email = %request.email(), "Login attempt for unknown email");
            return Err(LoginError::InvalidCredentials);
        };

        let is_valid = self
            .password_hasher
            .verify_password(request.password(), &user.password_hash)
            .await
            .map_err(|e| LoginError::Internal(e.to_string()))?;

        if !is_valid {
            warn!(user_id = %user.id, "Login attempt with wrong password");
            return Err(LoginError::InvalidCredentials);
        }

        if !user.email_verified {
            return Err(LoginError::EmailNotVerified);
        }

        if user.is_blocked() {
            return Err(LoginError::AccountInactive);
        }

        if audience == LoginAudience::Admin && !is_admin(&user.role) {
            warn!(user_id = %user.id, role = %user.role, "Non-admin tried to sign in to admin panel");
            return Err(LoginError::AdminAccessRequired);
        }

        let (token, session) = self.open_session(user.id).await?;

        let now = Utc::now();
        if let Err(e) = self.repository.record_login(user.id, now).await {
            warn!(user_id = %user.id, error = %e, "Failed to record last login");
        }

        info!(user_id = %user.id, ?audience, "User logged in");

        let mut user = user;
        user.last_login_at = Some(now);

        Ok(LoginOutput {
            user,
            token,
            expires_at: session.expires_at,
        })
    }
}
