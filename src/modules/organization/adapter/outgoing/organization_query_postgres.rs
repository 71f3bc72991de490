use async_trait::async_trait;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{
    ColumnTrait, DatabaseBackend, DatabaseConnection, DbErr, EntityTrait, FromQueryResult,
    QueryFilter, QueryOrder, Statement,
};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::{organizations, venues};
use crate::event::adapter::outgoing::sea_orm_entity::events;
use crate::organization::application::domain::entities::{
    Organization, OrganizationEvent, OrganizationFollower, OrganizationSummary, Venue,
};
use crate::organization::application::ports::outgoing::{
    OrganizationQuery, OrganizationQueryError,
};

#[derive(Debug, FromQueryResult)]
struct CountsRow {
    id: Uuid,
    follower_count: i64,
    event_count: i64,
    venue_count: i64,
}

#[derive(Debug, FromQueryResult)]
struct FollowerRow {
    user_id: Uuid,
    first_name: String,
    last_name: String,
    followed_at: DateTimeWithTimeZone,
}

const COUNTS_SQL: &str = r#"
    SELECT o.id,
           (SELECT COUNT(*) FROM followers f WHERE f.organization_id = o.id) AS follower_count,
           (SELECT COUNT(*) FROM events e WHERE e.organization_id = o.id) AS event_count,
           (SELECT COUNT(*) FROM venues v WHERE v.organization_id = o.id) AS venue_count
    FROM organizations o
"#;

const FOLLOWERS_SQL: &str = r#"
    SELECT f.user_id, u.first_name, u.last_name, f.created_at AS followed_at
    FROM followers f
    JOIN users u ON u.id = f.user_id
    WHERE f.organization_id = $1
    ORDER BY f.created_at DESC
"#;

fn map_db_err(e: DbErr) -> OrganizationQueryError {
    OrganizationQueryError::DatabaseError(e.to_string())
}

#[derive(Clone)]
pub struct OrganizationQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl OrganizationQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrganizationQuery for OrganizationQueryPostgres {
    async fn list_with_counts(&self) -> Result<Vec<OrganizationSummary>, OrganizationQueryError> {
        let models = organizations::Entity::find()
            .order_by_asc(organizations::Column::Name)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let counts: HashMap<Uuid, CountsRow> = CountsRow::find_by_statement(
            Statement::from_string(DatabaseBackend::Postgres, COUNTS_SQL),
        )
        .all(&*self.db)
        .await
        .map_err(map_db_err)?
        .into_iter()
        .map(|row| (row.id, row))
        .collect();

        Ok(models
            .into_iter()
            .map(|model| {
                let (follower_count, event_count, venue_count) = counts
                    .get(&model.id)
                    .map(|c| (c.follower_count, c.event_count, c.venue_count))
                    .unwrap_or_default();
                OrganizationSummary {
                    organization: Organization::from(model),
                    follower_count,
                    event_count,
                    venue_count,
                }
            })
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Organization>, OrganizationQueryError> {
        Ok(organizations::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(Organization::from))
    }

    async fn venues_of(&self, id: Uuid) -> Result<Vec<Venue>, OrganizationQueryError> {
        Ok(venues::Entity::find()
            .filter(venues::Column::OrganizationId.eq(id))
            .order_by_asc(venues::Column::Name)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(Venue::from)
            .collect())
    }

    async fn events_of(&self, id: Uuid) -> Result<Vec<OrganizationEvent>, OrganizationQueryError> {
        Ok(events::Entity::find()
            .filter(events::Column::OrganizationId.eq(id))
            .order_by_asc(events::Column::StartTime)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(|e| OrganizationEvent {
                id: e.id,
                title: e.title,
                description: e.description,
                event_type: e.event_type,
                status: e.status,
                venue_id: e.venue_id,
                start_time: e.start_time.with_timezone(&chrono::Utc),
                end_time: e.end_time.map(|t| t.with_timezone(&chrono::Utc)),
                max_capacity: e.max_capacity,
            })
            .collect())
    }

    async fn followers_of(
        &self,
        id: Uuid,
    ) -> Result<Vec<OrganizationFollower>, OrganizationQueryError> {
        let rows = FollowerRow::find_by_statement(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            FOLLOWERS_SQL,
            vec![id.into()],
        ))
        .all(&*self.db)
        .await
        .map_err(map_db_err)?;

        Ok(rows
            .into_iter()
            .map(|row| OrganizationFollower {
                user_id: row.user_id,
                first_name: row.first_name,
                last_name: row.last_name,
                followed_at: row.followed_at.with_timezone(&chrono::Utc),
            })
            .collect())
    }
}
