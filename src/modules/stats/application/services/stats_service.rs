use async_trait::async_trait;
use uuid::Uuid;

use crate::stats::application::domain::entities::{
    DashboardStats, GameStats, OrganizationStats, SessionStats, UserStats, WebDashboardStats,
};
use crate::stats::application::ports::incoming::use_cases::{
    GetAdminStatsUseCase, GetDashboardStatsUseCase, StatsError,
};
use crate::stats::application::ports::outgoing::StatsQuery;

fn two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub struct AdminStatsService<Q>
where
    Q: StatsQuery,
{
    query: Q,
}

impl<Q> AdminStatsService<Q>
where
    Q: StatsQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetAdminStatsUseCase for AdminStatsService<Q>
where
    Q: StatsQuery + Send + Sync,
{
    async fn dashboard(&self) -> Result<DashboardStats, StatsError> {
        Ok(self.query.dashboard().await?)
    }

    async fn users(&self) -> Result<UserStats, StatsError> {
        Ok(self.query.users().await?)
    }

    async fn games(&self) -> Result<GameStats, StatsError> {
        let mut stats = self.query.games().await?;
        stats.average_rating = two_decimals(stats.average_rating);
        stats.average_complexity = two_decimals(stats.average_complexity);
        Ok(stats)
    }

    async fn sessions(&self) -> Result<SessionStats, StatsError> {
        let mut stats = self.query.sessions().await?;
        stats.average_attendees = two_decimals(stats.average_attendees);
        Ok(stats)
    }

    async fn organizations(&self) -> Result<OrganizationStats, StatsError> {
        let mut stats = self.query.organizations().await?;
        stats.average_followers = two_decimals(stats.average_followers);
        Ok(stats)
    }
}

pub struct DashboardStatsService<Q>
where
    Q: StatsQuery,
{
    query: Q,
}

impl<Q> DashboardStatsService<Q>
where
    Q: StatsQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetDashboardStatsUseCase for DashboardStatsService<Q>
where
    Q: StatsQuery + Send + Sync,
{
    async fn execute(&self, user_id: Uuid) -> Result<WebDashboardStats, StatsError> {
        Ok(self.query.web_dashboard(user_id).await?)
    }
}
