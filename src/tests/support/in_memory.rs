//! In-memory port implementations shared by use-case tests. Clones share
//! state so a test can keep a handle and inspect what the use case wrote.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::auth::application::domain::entities::{
    NewUser, Session, StatusLog, StatusTransition, User,
};
use crate::auth::application::ports::outgoing::{
    HashError, PasswordHasher, SessionRepository, SessionRepositoryError, StatusLogRepository,
    StatusLogRepositoryError, TokenGenerator, UserProfileUpdate, UserQuery, UserQueryError,
    UserRepository, UserRepositoryError,
};
use crate::email::application::ports::outgoing::{
    EmailRecipient, UserEmailNotificationError, UserEmailNotifier,
};

#[derive(Clone, Default)]
pub struct InMemoryUsers {
    users: Arc<Mutex<Vec<User>>>,
    fail: Arc<Mutex<bool>>,
}

impl InMemoryUsers {
    pub fn with(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(Mutex::new(users)),
            fail: Arc::default(),
        }
    }

    /// Every subsequent call returns a database error.
    pub fn failing() -> Self {
        let store = Self::default();
        *store.fail.lock().unwrap() = true;
        store
    }

    pub fn get(&self, id: Uuid) -> Option<User> {
        self.users.lock().unwrap().iter().find(|u| u.id == id).cloned()
    }

    pub fn count(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    fn check(&self) -> Result<(), String> {
        if *self.fail.lock().unwrap() {
            Err("database unavailable".to_string())
        } else {
            Ok(())
        }
    }

    fn find_where(&self, pred: impl Fn(&User) -> bool) -> Result<Option<User>, UserQueryError> {
        self.check().map_err(UserQueryError::DatabaseError)?;
        Ok(self.users.lock().unwrap().iter().find(|u| pred(u)).cloned())
    }

    fn modify(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut User),
    ) -> Result<User, UserRepositoryError> {
        self.check().map_err(UserRepositoryError::DatabaseError)?;
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(UserRepositoryError::UserNotFound)?;
        f(user);
        user.updated_at = Utc::now();
        Ok(user.clone())
    }
}

#[async_trait]
impl UserQuery for InMemoryUsers {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserQueryError> {
        self.find_where(|u| u.id == user_id)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError> {
        self.find_where(|u| u.email == email)
    }

    async fn find_by_verification_token(
        &self,
        token: &str,
    ) -> Result<Option<User>, UserQueryError> {
        self.find_where(|u| u.email_verify_token.as_deref() == Some(token))
    }

    async fn find_by_password_reset_token(
        &self,
        token_hash: &str,
    ) -> Result<Option<User>, UserQueryError> {
        self.find_where(|u| u.password_reset_token.as_deref() == Some(token_hash))
    }

    async fn list_all(&self) -> Result<Vec<User>, UserQueryError> {
        self.check().map_err(UserQueryError::DatabaseError)?;
        let mut users = self.users.lock().unwrap().clone();
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(users)
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError> {
        self.check().map_err(UserRepositoryError::DatabaseError)?;
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(UserRepositoryError::UserAlreadyExists);
        }

        let now = Utc::now();
        let created = User {
            id: user.id,
            email: user.email,
            password_hash: user.password_hash,
            first_name: user.first_name,
            last_name: user.last_name,
            role: user.role.as_str().to_string(),
            email_verified: user.email_verified,
            email_verify_token: user.email_verify_token,
            password_reset_token: None,
            password_reset_expires: None,
            organization_id: None,
            avatar: None,
            bio: None,
            location: None,
            is_active: true,
            status: user.status,
            deactivated_at: None,
            deactivated_by: None,
            reactivated_at: None,
            last_login_at: None,
            created_at: now,
            updated_at: now,
        };
        users.push(created.clone());
        Ok(created)
    }

    async fn mark_email_verified(&self, user_id: Uuid) -> Result<User, UserRepositoryError> {
        use crate::auth::application::domain::entities::UserStatus;
        self.modify(user_id, |u| {
            u.email_verified = true;
            u.email_verify_token = None;
            if u.status == UserStatus::PendingVerification {
                u.status = UserStatus::Active;
            }
        })
    }

    async fn record_login(
        &self,
        user_id: Uuid,
        at: DateTime<Utc>,
    ) -> Result<(), UserRepositoryError> {
        self.modify(user_id, |u| u.last_login_at = Some(at))
            .map(|_| ())
    }

    async fn update_profile(
        &self,
        user_id: Uuid,
        update: UserProfileUpdate,
    ) -> Result<User, UserRepositoryError> {
        if let Some(email) = &update.email {
            let taken = self
                .users
                .lock()
                .unwrap()
                .iter()
                .any(|u| &u.email == email && u.id != user_id);
            if taken {
                return Err(UserRepositoryError::UserAlreadyExists);
            }
        }

        self.modify(user_id, |u| {
            if let Some(v) = update.first_name {
                u.first_name = v;
            }
            if let Some(v) = update.last_name {
                u.last_name = v;
            }
            if let Some(v) = update.email {
                u.email = v;
            }
            if let Some(v) = update.role {
                u.role = v;
            }
        })
    }

    async fn update_password(
        &self,
        user_id: Uuid,
        new_password_hash: String,
    ) -> Result<(), UserRepositoryError> {
        self.modify(user_id, |u| {
            u.password_hash = new_password_hash;
            u.password_reset_token = None;
            u.password_reset_expires = None;
        })
        .map(|_| ())
    }

    async fn set_password_reset(
        &self,
        user_id: Uuid,
        token_hash: String,
        expires_at: DateTime<Utc>,
    ) -> Result<(), UserRepositoryError> {
        self.modify(user_id, |u| {
            u.password_reset_token = Some(token_hash);
            u.password_reset_expires = Some(expires_at);
        })
        .map(|_| ())
    }

    async fn apply_status_transition(
        &self,
        user_id: Uuid,
        transition: &StatusTransition,
    ) -> Result<User, UserRepositoryError> {
        let t = transition.clone();
        self.modify(user_id, move |u| {
            u.status = t.new_status;
            u.is_active = t.is_active;
            u.deactivated_at = t.deactivated_at;
            u.deactivated_by = t.deactivated_by;
            u.reactivated_at = t.reactivated_at;
        })
    }

    async fn delete_user(&self, user_id: Uuid) -> Result<(), UserRepositoryError> {
        self.check().map_err(UserRepositoryError::DatabaseError)?;
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| u.id != user_id);
        if users.len() == before {
            return Err(UserRepositoryError::UserNotFound);
        }
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct InMemorySessions {
    sessions: Arc<Mutex<Vec<Session>>>,
    fail_deletes: Arc<Mutex<bool>>,
}

impl InMemorySessions {
    pub fn with(sessions: Vec<Session>) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(sessions)),
            fail_deletes: Arc::default(),
        }
    }

    pub fn failing_deletes(self) -> Self {
        *self.fail_deletes.lock().unwrap() = true;
        self
    }

    pub fn insert(&self, session: Session) {
        self.sessions.lock().unwrap().push(session);
    }

    pub fn all(&self) -> Vec<Session> {
        self.sessions.lock().unwrap().clone()
    }

    pub fn count_for(&self, user_id: Uuid) -> usize {
        self.all().iter().filter(|s| s.user_id == user_id).count()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessions {
    async fn create(&self, session: Session) -> Result<Session, SessionRepositoryError> {
        self.sessions.lock().unwrap().push(session.clone());
        Ok(session)
    }

    async fn find_by_token_hash(
        &self,
        token_hash: &str,
    ) -> Result<Option<Session>, SessionRepositoryError> {
        Ok(self
            .sessions
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.token_hash == token_hash)
            .cloned())
    }

    async fn delete_by_token_hash(&self, token_hash: &str) -> Result<bool, SessionRepositoryError> {
        if *self.fail_deletes.lock().unwrap() {
            return Err(SessionRepositoryError::DatabaseError("delete failed".into()));
        }
        let mut sessions = self.sessions.lock().unwrap();
        let before = sessions.len();
        sessions.retain(|s| s.token_hash != token_hash);
        Ok(sessions.len() < before)
    }

    async fn delete_all_for_user(&self, user_id: Uuid) -> Result<u64, SessionRepositoryError> {
        if *self.fail_deletes.lock().unwrap() {
            return Err(SessionRepositoryError::DatabaseError("delete failed".into()));
        }
        let mut sessions = self.sessions.lock().unwrap();
        let before = sessions.len();
        sessions.retain(|s| s.user_id != user_id);
        Ok((before - sessions.len()) as u64)
    }
}

#[derive(Clone, Default)]
pub struct InMemoryStatusLogs {
    entries: Arc<Mutex<Vec<StatusLog>>>,
}

impl InMemoryStatusLogs {
    pub fn all(&self) -> Vec<StatusLog> {
        self.entries.lock().unwrap().clone()
    }
}

#[async_trait]
impl StatusLogRepository for InMemoryStatusLogs {
    async fn append(&self, entry: StatusLog) -> Result<StatusLog, StatusLogRepositoryError> {
        self.entries.lock().unwrap().push(entry.clone());
        Ok(entry)
    }

    async fn list_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<StatusLog>, StatusLogRepositoryError> {
        let mut entries: Vec<StatusLog> = self
            .all()
            .into_iter()
            .filter(|e| e.user_id == user_id)
            .collect();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(entries)
    }
}

/// Stores `hashed:{password}` so tests can assert what was hashed.
#[derive(Clone, Copy, Default)]
pub struct PlainHasher;

#[async_trait]
impl PasswordHasher for PlainHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        Ok(format!("hashed:{}", password))
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        Ok(hash == format!("hashed:{}", password))
    }
}

/// Yields `token-1`, `token-2`, ...
#[derive(Clone, Default)]
pub struct SequentialTokens {
    next: Arc<AtomicUsize>,
}

impl TokenGenerator for SequentialTokens {
    fn generate(&self) -> String {
        format!("token-{}", self.next.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SentEmail {
    Verification { to: String, token: String },
    Welcome { to: String },
    PasswordReset { to: String, token: String },
}

#[derive(Clone, Default)]
pub struct RecordingNotifier {
    sent: Arc<Mutex<Vec<SentEmail>>>,
}

impl RecordingNotifier {
    pub fn sent(&self) -> Vec<SentEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserEmailNotifier for RecordingNotifier {
    async fn send_verification_email(
        &self,
        recipient: &EmailRecipient,
        token: &str,
    ) -> Result<(), UserEmailNotificationError> {
        self.sent.lock().unwrap().push(SentEmail::Verification {
            to: recipient.email.clone(),
            token: token.to_string(),
        });
        Ok(())
    }

    async fn send_welcome_email(
        &self,
        recipient: &EmailRecipient,
    ) -> Result<(), UserEmailNotificationError> {
        self.sent.lock().unwrap().push(SentEmail::Welcome {
            to: recipient.email.clone(),
        });
        Ok(())
    }

    async fn send_password_reset_email(
        &self,
        recipient: &EmailRecipient,
        token: &str,
    ) -> Result<(), UserEmailNotificationError> {
        self.sent.lock().unwrap().push(SentEmail::PasswordReset {
            to: recipient.email.clone(),
            token: token.to_string(),
        });
        Ok(())
    }
}
