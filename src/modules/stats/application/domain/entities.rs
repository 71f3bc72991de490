use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecentUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Headline numbers for the admin landing page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_users: i64,
    pub total_games: i64,
    pub total_sessions: i64,
    pub total_organizations: i64,
    pub recent_users: Vec<RecentUser>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub total_users: i64,
    pub active_users: i64,
    pub verified_users: i64,
    pub super_admins: i64,
    pub venue_admins: i64,
    pub end_users: i64,
    pub recent_registrations: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GameStats {
    pub total_games: i64,
    pub average_rating: f64,
    pub average_complexity: f64,
    pub games_with_bgg_id: i64,
    pub recent_additions: i64,
    pub top_rated_games: i64,
    pub complex_games: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionStats {
    pub total_sessions: i64,
    pub upcoming_sessions: i64,
    pub past_sessions: i64,
    pub public_sessions: i64,
    pub private_sessions: i64,
    pub competition_sessions: i64,
    pub average_attendees: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationStats {
    pub total_organizations: i64,
    pub organizations_with_venues: i64,
    pub organizations_with_events: i64,
    pub average_followers: f64,
    pub recent_organizations: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecentActivity {
    pub event_id: Uuid,
    pub title: String,
    pub status: String,
    pub start_time: DateTime<Utc>,
    pub registered_at: DateTime<Utc>,
}

/// Per-user numbers for the community web dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WebDashboardStats {
    pub total_games: i64,
    pub total_sessions: i64,
    pub total_players: i64,
    pub recent_activity: Vec<RecentActivity>,
}
