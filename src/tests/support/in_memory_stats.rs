use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::stats::application::domain::entities::{
    DashboardStats, GameStats, OrganizationStats, SessionStats, UserStats, WebDashboardStats,
};
use crate::stats::application::ports::outgoing::{StatsQuery, StatsQueryError};

#[derive(Default)]
struct Snapshot {
    dashboard: DashboardStats,
    users: UserStats,
    games: GameStats,
    sessions: SessionStats,
    organizations: OrganizationStats,
    web: WebDashboardStats,
    web_requests: Vec<Uuid>,
}

/// Returns whatever the test stored; records which user asked for the web dashboard.
#[derive(Clone, Default)]
pub struct FixedStats {
    snapshot: Arc<Mutex<Snapshot>>,
    fail: bool,
}

impl FixedStats {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn set_dashboard(&self, stats: DashboardStats) {
        self.snapshot.lock().unwrap().dashboard = stats;
    }

    pub fn set_users(&self, stats: UserStats) {
        self.snapshot.lock().unwrap().users = stats;
    }

    pub fn set_games(&self, stats: GameStats) {
        self.snapshot.lock().unwrap().games = stats;
    }

    pub fn set_sessions(&self, stats: SessionStats) {
        self.snapshot.lock().unwrap().sessions = stats;
    }

    pub fn set_web(&self, stats: WebDashboardStats) {
        self.snapshot.lock().unwrap().web = stats;
    }

    pub fn web_requests(&self) -> Vec<Uuid> {
        self.snapshot.lock().unwrap().web_requests.clone()
    }

    fn read<T>(&self, pick: impl FnOnce(&Snapshot) -> T) -> Result<T, StatsQueryError> {
        if self.fail {
            return Err(StatsQueryError::DatabaseError(
                "database unavailable".to_string(),
            ));
        }
        Ok(pick(&self.snapshot.lock().unwrap()))
    }
}

#[async_trait]
impl StatsQuery for FixedStats {
    async fn dashboard(&self) -> Result<DashboardStats, StatsQueryError> {
        self.read(|s| s.dashboard.clone())
    }

    async fn users(&self) -> Result<UserStats, StatsQueryError> {
        self.read(|s| s.users.clone())
    }

    async fn games(&self) -> Result<GameStats, StatsQueryError> {
        self.read(|s| s.games.clone())
    }

    async fn sessions(&self) -> Result<SessionStats, StatsQueryError> {
        self.read(|s| s.sessions.clone())
    }

    async fn organizations(&self) -> Result<OrganizationStats, StatsQueryError> {
        self.read(|s| s.organizations.clone())
    }

    async fn web_dashboard(&self, user_id: Uuid) -> Result<WebDashboardStats, StatsQueryError> {
        let stats = self.read(|s| s.web.clone())?;
        self.snapshot.lock().unwrap().web_requests.push(user_id);
        Ok(stats)
    }
}
