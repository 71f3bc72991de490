use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Roles known to the platform. Stored on the user as a plain string so that
/// unrecognized values survive a round-trip without granting anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    SuperAdmin,
    VenueAdmin,
    EndUser,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::SuperAdmin => "super_admin",
            UserRole::VenueAdmin => "venue_admin",
            UserRole::EndUser => "end_user",
        }
    }
}

impl FromStr for UserRole {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "super_admin" => Ok(UserRole::SuperAdmin),
            "venue_admin" => Ok(UserRole::VenueAdmin),
            "end_user" => Ok(UserRole::EndUser),
            _ => Err(()),
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    Active,
    Inactive,
    Suspended,
    PendingVerification,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "ACTIVE",
            UserStatus::Inactive => "INACTIVE",
            UserStatus::Suspended => "SUSPENDED",
            UserStatus::PendingVerification => "PENDING_VERIFICATION",
        }
    }

    /// Statuses that must not keep live sessions around.
    pub fn revokes_sessions(&self) -> bool {
        matches!(self, UserStatus::Inactive | UserStatus::Suspended)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid user status: {0}")]
pub struct InvalidUserStatus(pub String);

impl FromStr for UserStatus {
    type Err = InvalidUserStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACTIVE" => Ok(UserStatus::Active),
            "INACTIVE" => Ok(UserStatus::Inactive),
            "SUSPENDED" => Ok(UserStatus::Suspended),
            "PENDING_VERIFICATION" => Ok(UserStatus::PendingVerification),
            other => Err(InvalidUserStatus(other.to_string())),
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub email_verified: bool,
    #[serde(skip_serializing)]
    pub email_verify_token: Option<String>,
    #[serde(skip_serializing)]
    pub password_reset_token: Option<String>,
    #[serde(skip_serializing)]
    pub password_reset_expires: Option<DateTime<Utc>>,
    pub organization_id: Option<Uuid>,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub is_active: bool,
    pub status: UserStatus,
    pub deactivated_at: Option<DateTime<Utc>>,
    pub deactivated_by: Option<Uuid>,
    pub reactivated_at: Option<DateTime<Utc>>,
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Accounts that were switched off by an admin cannot hold a session.
    pub fn is_blocked(&self) -> bool {
        !self.is_active || self.status.revokes_sessions()
    }

    /// Field changes required to move this user into `target`.
    pub fn transition_to(
        &self,
        target: UserStatus,
        actor_id: Uuid,
        now: DateTime<Utc>,
    ) -> StatusTransition {
        let (deactivated_at, deactivated_by, reactivated_at) = match target {
            UserStatus::Inactive => (Some(now), Some(actor_id), None),
            UserStatus::Active => (None, None, Some(now)),
            _ => (self.deactivated_at, self.deactivated_by, self.reactivated_at),
        };

        StatusTransition {
            old_status: self.status,
            new_status: target,
            is_active: target == UserStatus::Active,
            deactivated_at,
            deactivated_by,
            reactivated_at,
        }
    }
}

/// Column values written by a status change.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusTransition {
    pub old_status: UserStatus,
    pub new_status: UserStatus,
    pub is_active: bool,
    pub deactivated_at: Option<DateTime<Utc>>,
    pub deactivated_by: Option<Uuid>,
    pub reactivated_at: Option<DateTime<Utc>>,
}

/// Input for inserting a user row. The password is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    pub email_verified: bool,
    pub email_verify_token: Option<String>,
    pub status: UserStatus,
}

#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub user_id: Uuid,
    pub token_hash: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusLog {
    pub id: Uuid,
    pub user_id: Uuid,
    pub old_status: String,
    pub new_status: String,
    pub changed_by: Uuid,
    pub reason: Option<String>,
    pub created_at: DateTime<Utc>,
}


#[cfg(test)]
mod tests {
    use super::test_fixtures::sample_user;
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_status_round_trips_through_strings() {
        for status in [
            UserStatus::Active,
            UserStatus::Inactive,
            UserStatus::Suspended,
            UserStatus::PendingVerification,
        ] {
            assert_eq!(status.as_str().parse::<UserStatus>(), Ok(status));
        }
        assert!("active".parse::<UserStatus>().is_err());
    }

    #[test]
    fn test_deactivation_records_actor_and_clears_reactivation() {
        let mut user = sample_user();
        user.reactivated_at = Some(Utc::now() - Duration::days(3));
        let admin = Uuid::new_v4();
        let now = Utc::now();

        let change = user.transition_to(UserStatus::Inactive, admin, now);

        assert_eq!(change.old_status, UserStatus::Active);
        assert!(!change.is_active);
        assert_eq!(change.deactivated_at, Some(now));
        assert_eq!(change.deactivated_by, Some(admin));
        assert_eq!(change.reactivated_at, None);
    }

    #[test]
    fn test_reactivation_clears_deactivation_fields() {
        let mut user = sample_user();
        user.status = UserStatus::Inactive;
        user.is_active = false;
        user.deactivated_at = Some(Utc::now() - Duration::days(1));
        user.deactivated_by = Some(Uuid::new_v4());
        let now = Utc::now();

        let change = user.transition_to(UserStatus::Active, Uuid::new_v4(), now);

        assert!(change.is_active);
        assert_eq!(change.deactivated_at, None);
        assert_eq!(change.deactivated_by, None);
        assert_eq!(change.reactivated_at, Some(now));
    }

    #[test]
    fn test_suspension_keeps_audit_fields_and_blocks_user() {
        let user = sample_user();
        let change = user.transition_to(UserStatus::Suspended, Uuid::new_v4(), Utc::now());

        assert!(!change.is_active);
        assert_eq!(change.deactivated_at, user.deactivated_at);
        assert!(change.new_status.revokes_sessions());
    }

    #[test]
    fn test_session_expiry_boundary() {
        let now = Utc::now();
        let session = Session {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            token_hash: "h".repeat(64),
            expires_at: now,
            created_at: now - Duration::days(7),
        };

        assert!(session.is_expired_at(now));
        assert!(!session.is_expired_at(now - Duration::seconds(1)));
    }
}
