pub mod app_state_builder;
pub mod in_memory;
pub mod in_memory_events;
pub mod in_memory_games;
pub mod in_memory_organizations;
pub mod in_memory_stats;

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::auth::application::domain::entities::test_fixtures::sample_user;
use crate::auth::application::domain::entities::{Session, User};
use crate::auth::application::services::hash_token;
use in_memory::InMemorySessions;

/// Stores a live session for `user_id` and returns the raw cookie value.
pub fn sign_in(sessions: &InMemorySessions, user_id: Uuid) -> String {
    let token = format!("session-{}", Uuid::new_v4());
    let now = Utc::now();
    sessions.insert(Session {
        id: Uuid::new_v4(),
        user_id,
        token_hash: hash_token(&token),
        expires_at: now + Duration::days(7),
        created_at: now,
    });
    token
}

pub fn admin_user() -> User {
    let mut admin = sample_user();
    admin.email = "admin@example.com".to_string();
    admin.first_name = "Ada".to_string();
    admin.last_name = "Admin".to_string();
    admin.role = "super_admin".to_string();
    admin
}
