use std::sync::Arc;

use crate::stats::application::ports::incoming::use_cases::{
    GetAdminStatsUseCase, GetDashboardStatsUseCase,
};

#[derive(Clone)]
pub struct StatsUseCases {
    pub admin: Arc<dyn GetAdminStatsUseCase + Send + Sync>,
    pub dashboard: Arc<dyn GetDashboardStatsUseCase + Send + Sync>,
}
