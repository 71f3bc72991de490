use async_trait::async_trait;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{
    DatabaseBackend, DatabaseConnection, DbErr, FromQueryResult, Statement, Value,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::stats::application::domain::entities::{
    DashboardStats, GameStats, OrganizationStats, RecentActivity, RecentUser, SessionStats,
    UserStats, WebDashboardStats,
};
use crate::stats::application::ports::outgoing::{StatsQuery, StatsQueryError};

const DASHBOARD_SQL: &str = r#"
    SELECT (SELECT COUNT(*) FROM users) AS total_users,
           (SELECT COUNT(*) FROM board_games) AS total_games,
           (SELECT COUNT(*) FROM events) AS total_sessions,
           (SELECT COUNT(*) FROM organizations) AS total_organizations
"#;

const RECENT_USERS_SQL: &str = r#"
    SELECT id, first_name, last_name, email, created_at
    FROM users
    ORDER BY created_at DESC
    LIMIT 5
"#;

const USER_STATS_SQL: &str = r#"
    SELECT COUNT(*) AS total_users,
           COUNT(*) FILTER (WHERE status = 'ACTIVE') AS active_users,
           COUNT(*) FILTER (WHERE email_verified) AS verified_users,
           COUNT(*) FILTER (WHERE role = 'super_admin') AS super_admins,
           COUNT(*) FILTER (WHERE role = 'venue_admin') AS venue_admins,
           COUNT(*) FILTER (WHERE role = 'end_user') AS end_users,
           COUNT(*) FILTER (WHERE created_at > NOW() - INTERVAL '30 days') AS recent_registrations
    FROM users
"#;

// Unrated games count as 0 in the averages.
const GAME_STATS_SQL: &str = r#"
    SELECT COUNT(*) AS total_games,
           COALESCE(AVG(COALESCE(rating, 0)), 0)::float8 AS average_rating,
           COALESCE(AVG(COALESCE(complexity, 0)), 0)::float8 AS average_complexity,
           COUNT(*) FILTER (WHERE bgg_id IS NOT NULL) AS games_with_bgg_id,
           COUNT(*) FILTER (WHERE created_at > NOW() - INTERVAL '30 days') AS recent_additions,
           COUNT(*) FILTER (WHERE rating > 7) AS top_rated_games,
           COUNT(*) FILTER (WHERE complexity > 3) AS complex_games
    FROM board_games
"#;

const SESSION_STATS_SQL: &str = r#"
    SELECT COUNT(*) AS total_sessions,
           COUNT(*) FILTER (WHERE e.start_time > NOW()) AS upcoming_sessions,
           COUNT(*) FILTER (WHERE e.start_time < NOW()) AS past_sessions,
           COUNT(*) FILTER (WHERE e.type = 'PUBLIC') AS public_sessions,
           COUNT(*) FILTER (WHERE e.type = 'PRIVATE') AS private_sessions,
           COUNT(*) FILTER (WHERE e.type = 'COMPETITION') AS competition_sessions,
           COALESCE(AVG(COALESCE(a.attending, 0)), 0)::float8 AS average_attendees
    FROM events e
    LEFT JOIN (
        SELECT event_id, COUNT(*) AS attending
        FROM event_attendees
        WHERE status = 'ATTENDING'
        GROUP BY event_id
    ) a ON a.event_id = e.id
"#;

const ORGANIZATION_STATS_SQL: &str = r#"
    SELECT COUNT(*) AS total_organizations,
           COUNT(v.organization_id) AS organizations_with_venues,
           COUNT(e.organization_id) AS organizations_with_events,
           COALESCE(AVG(COALESCE(f.followers, 0)), 0)::float8 AS average_followers,
           COUNT(*) FILTER (WHERE o.created_at > NOW() - INTERVAL '30 days') AS recent_organizations
    FROM organizations o
    LEFT JOIN (SELECT DISTINCT organization_id FROM venues) v ON v.organization_id = o.id
    LEFT JOIN (SELECT DISTINCT organization_id FROM events) e ON e.organization_id = o.id
    LEFT JOIN (
        SELECT organization_id, COUNT(*) AS followers
        FROM followers
        GROUP BY organization_id
    ) f ON f.organization_id = o.id
"#;

// Co-players are other users attending the same events; the caller is excluded.
const WEB_DASHBOARD_SQL: &str = r#"
    SELECT (SELECT COUNT(*) FROM board_games) AS total_games,
           (SELECT COUNT(*) FROM event_attendees
             WHERE user_id = $1 AND status = 'ATTENDING') AS total_sessions,
           (SELECT COUNT(DISTINCT other.user_id)
              FROM event_attendees mine
              JOIN event_attendees other ON other.event_id = mine.event_id
             WHERE mine.user_id = $1
               AND mine.status = 'ATTENDING'
               AND other.status = 'ATTENDING'
               AND other.user_id <> $1) AS total_players
"#;

const RECENT_ACTIVITY_SQL: &str = r#"
    SELECT e.id AS event_id, e.title, a.status, e.start_time, a.created_at AS registered_at
    FROM event_attendees a
    JOIN events e ON e.id = a.event_id
    WHERE a.user_id = $1
    ORDER BY a.created_at DESC
    LIMIT 5
"#;

#[derive(Debug, FromQueryResult)]
struct DashboardCounts {
    total_users: i64,
    total_games: i64,
    total_sessions: i64,
    total_organizations: i64,
}

#[derive(Debug, FromQueryResult)]
struct RecentUserRow {
    id: Uuid,
    first_name: String,
    last_name: String,
    email: String,
    created_at: DateTimeWithTimeZone,
}

#[derive(Debug, FromQueryResult)]
struct UserStatsRow {
    total_users: i64,
    active_users: i64,
    verified_users: i64,
    super_admins: i64,
    venue_admins: i64,
    end_users: i64,
    recent_registrations: i64,
}

#[derive(Debug, FromQueryResult)]
struct GameStatsRow {
    total_games: i64,
    average_rating: f64,
    average_complexity: f64,
    games_with_bgg_id: i64,
    recent_additions: i64,
    top_rated_games: i64,
    complex_games: i64,
}

#[derive(Debug, FromQueryResult)]
struct SessionStatsRow {
    total_sessions: i64,
    upcoming_sessions: i64,
    past_sessions: i64,
    public_sessions: i64,
    private_sessions: i64,
    competition_sessions: i64,
    average_attendees: f64,
}

#[derive(Debug, FromQueryResult)]
struct OrganizationStatsRow {
    total_organizations: i64,
    organizations_with_venues: i64,
    organizations_with_events: i64,
    average_followers: f64,
    recent_organizations: i64,
}

#[derive(Debug, FromQueryResult)]
struct WebCounts {
    total_games: i64,
    total_sessions: i64,
    total_players: i64,
}

#[derive(Debug, FromQueryResult)]
struct ActivityRow {
    event_id: Uuid,
    title: String,
    status: String,
    start_time: DateTimeWithTimeZone,
    registered_at: DateTimeWithTimeZone,
}

fn map_db_err(e: DbErr) -> StatsQueryError {
    StatsQueryError::DatabaseError(e.to_string())
}

fn statement(sql: &str, values: Vec<Value>) -> Statement {
    Statement::from_sql_and_values(DatabaseBackend::Postgres, sql, values)
}

#[derive(Clone)]
pub struct StatsQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl StatsQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Runs an aggregate statement that always yields exactly one row.
    async fn single<T: FromQueryResult>(
        &self,
        sql: &str,
        values: Vec<Value>,
    ) -> Result<T, StatsQueryError> {
        T::find_by_statement(statement(sql, values))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or_else(|| StatsQueryError::DatabaseError("aggregate returned no row".to_string()))
    }
}

#[async_trait]
impl StatsQuery for StatsQueryPostgres {
    async fn dashboard(&self) -> Result<DashboardStats, StatsQueryError> {
        let counts: DashboardCounts = self.single(DASHBOARD_SQL, vec![]).await?;
        let recent = RecentUserRow::find_by_statement(statement(RECENT_USERS_SQL, vec![]))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(DashboardStats {
            total_users: counts.total_users,
            total_games: counts.total_games,
            total_sessions: counts.total_sessions,
            total_organizations: counts.total_organizations,
            recent_users: recent
                .into_iter()
                .map(|u| RecentUser {
                    id: u.id,
                    name: format!("{} {}", u.first_name, u.last_name),
                    email: u.email,
                    created_at: u.created_at.with_timezone(&chrono::Utc),
                })
                .collect(),
        })
    }

    async fn users(&self) -> Result<UserStats, StatsQueryError> {
        let row: UserStatsRow = self.single(USER_STATS_SQL, vec![]).await?;
        Ok(UserStats {
            total_users: row.total_users,
            active_users: row.active_users,
            verified_users: row.verified_users,
            super_admins: row.super_admins,
            venue_admins: row.venue_admins,
            end_users: row.end_users,
            recent_registrations: row.recent_registrations,
        })
    }

    async fn games(&self) -> Result<GameStats, StatsQueryError> {
        let row: GameStatsRow = self.single(GAME_STATS_SQL, vec![]).await?;
        Ok(GameStats {
            total_games: row.total_games,
            average_rating: row.average_rating,
            average_complexity: row.average_complexity,
            games_with_bgg_id: row.games_with_bgg_id,
            recent_additions: row.recent_additions,
            top_rated_games: row.top_rated_games,
            complex_games: row.complex_games,
        })
    }

    async fn sessions(&self) -> Result<SessionStats, StatsQueryError> {
        let row: SessionStatsRow = self.single(SESSION_STATS_SQL, vec![]).await?;
        Ok(SessionStats {
            total_sessions: row.total_sessions,
            upcoming_sessions: row.upcoming_sessions,
            past_sessions: row.past_sessions,
            public_sessions: row.public_sessions,
            private_sessions: row.private_sessions,
            competition_sessions: row.competition_sessions,
            average_attendees: row.average_attendees,
        })
    }

    async fn organizations(&self) -> Result<OrganizationStats, StatsQueryError> {
        let row: OrganizationStatsRow = self.single(ORGANIZATION_STATS_SQL, vec![]).await?;
        Ok(OrganizationStats {
            total_organizations: row.total_organizations,
            organizations_with_venues: row.organizations_with_venues,
            organizations_with_events: row.organizations_with_events,
            average_followers: row.average_followers,
            recent_organizations: row.recent_organizations,
        })
    }

    async fn web_dashboard(&self, user_id: Uuid) -> Result<WebDashboardStats, StatsQueryError> {
        let counts: WebCounts = self.single(WEB_DASHBOARD_SQL, vec![user_id.into()]).await?;
        let activity =
            ActivityRow::find_by_statement(statement(RECENT_ACTIVITY_SQL, vec![user_id.into()]))
                .all(&*self.db)
                .await
                .map_err(map_db_err)?;

        Ok(WebDashboardStats {
            total_games: counts.total_games,
            total_sessions: counts.total_sessions,
            total_players: counts.total_players,
            recent_activity: activity
                .into_iter()
                .map(|a| RecentActivity {
                    event_id: a.event_id,
                    title: a.title,
                    status: a.status,
                    start_time: a.start_time.with_timezone(&chrono::Utc),
                    registered_at: a.registered_at.with_timezone(&chrono::Utc),
                })
                .collect(),
        })
    }
}
