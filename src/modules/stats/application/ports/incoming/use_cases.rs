use async_trait::async_trait;
use uuid::Uuid;

use crate::stats::application::domain::entities::{
    DashboardStats, GameStats, OrganizationStats, SessionStats, UserStats, WebDashboardStats,
};
use crate::stats::application::ports::outgoing::StatsQueryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum StatsError {
    #[error("Failed to compute statistics: {0}")]
    QueryFailed(String),
}

impl From<StatsQueryError> for StatsError {
    fn from(err: StatsQueryError) -> Self {
        match err {
            StatsQueryError::DatabaseError(msg) => StatsError::QueryFailed(msg),
        }
    }
}

#[async_trait]
pub trait GetAdminStatsUseCase: Send + Sync {
    async fn dashboard(&self) -> Result<DashboardStats, StatsError>;
    async fn users(&self) -> Result<UserStats, StatsError>;
    async fn games(&self) -> Result<GameStats, StatsError>;
    async fn sessions(&self) -> Result<SessionStats, StatsError>;
    async fn organizations(&self) -> Result<OrganizationStats, StatsError>;
}

#[async_trait]
pub trait GetDashboardStatsUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<WebDashboardStats, StatsError>;
}
