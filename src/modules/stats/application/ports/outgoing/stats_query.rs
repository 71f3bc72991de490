use async_trait::async_trait;
use uuid::Uuid;

use crate::stats::application::domain::entities::{
    DashboardStats, GameStats, OrganizationStats, SessionStats, UserStats, WebDashboardStats,
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StatsQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Aggregates computed in the database.
#[async_trait]
pub trait StatsQuery: Send + Sync {
    async fn dashboard(&self) -> Result<DashboardStats, StatsQueryError>;
    async fn users(&self) -> Result<UserStats, StatsQueryError>;
    async fn games(&self) -> Result<GameStats, StatsQueryError>;
    async fn sessions(&self) -> Result<SessionStats, StatsQueryError>;
    async fn organizations(&self) -> Result<OrganizationStats, StatsQueryError>;
    async fn web_dashboard(&self, user_id: Uuid) -> Result<WebDashboardStats, StatsQueryError>;
}
