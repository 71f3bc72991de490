use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, FromQueryResult, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::{event_attendees, events};
use crate::auth::adapter::outgoing::sea_orm_entity::users;
use crate::event::application::domain::entities::{
    Attendee, AttendeeStatus, EventListing, EventSlot, OrganizationRef, VenueRef,
    EVENT_STATUS_ACTIVE, EVENT_TYPE_PUBLIC,
};
use crate::event::application::ports::outgoing::{EventQuery, EventQueryError};
use crate::organization::adapter::outgoing::sea_orm_entity::{organizations, venues};

#[derive(Debug, FromQueryResult)]
struct AttendeeRow {
    event_id: Uuid,
    user_id: Uuid,
    status: String,
    first_name: String,
    last_name: String,
}

fn map_db_err(e: DbErr) -> EventQueryError {
    EventQueryError::DatabaseError(e.to_string())
}

#[derive(Clone)]
pub struct EventQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl EventQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Loads matching events and hydrates organization, venue and attendees
    /// with one query per relation.
    async fn load(&self, filter: Condition) -> Result<Vec<EventListing>, EventQueryError> {
        let models = events::Entity::find()
            .filter(filter)
            .order_by_asc(events::Column::StartTime)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let event_ids: Vec<Uuid> = models.iter().map(|e| e.id).collect();
        let org_ids: Vec<Uuid> = models.iter().map(|e| e.organization_id).collect();
        let venue_ids: Vec<Uuid> = models.iter().filter_map(|e| e.venue_id).collect();

        let orgs: HashMap<Uuid, OrganizationRef> = organizations::Entity::find()
            .filter(organizations::Column::Id.is_in(org_ids))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(|o| {
                (
                    o.id,
                    OrganizationRef {
                        id: o.id,
                        name: o.name,
                        logo: o.logo,
                    },
                )
            })
            .collect();

        let venues: HashMap<Uuid, VenueRef> = venues::Entity::find()
            .filter(venues::Column::Id.is_in(venue_ids))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(|v| {
                (
                    v.id,
                    VenueRef {
                        id: v.id,
                        name: v.name,
                        address: v.address,
                        city: v.city,
                        state: v.state,
                    },
                )
            })
            .collect();

        let mut attendees: HashMap<Uuid, Vec<Attendee>> = HashMap::new();
        let rows = event_attendees::Entity::find()
            .select_only()
            .column(event_attendees::Column::EventId)
            .column(event_attendees::Column::UserId)
            .column(event_attendees::Column::Status)
            .column(users::Column::FirstName)
            .column(users::Column::LastName)
            .join(JoinType::InnerJoin, event_attendees::Relation::User.def())
            .filter(event_attendees::Column::EventId.is_in(event_ids))
            .order_by_asc(event_attendees::Column::CreatedAt)
            .into_model::<AttendeeRow>()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;
        for row in rows {
            let status = row
                .status
                .parse::<AttendeeStatus>()
                .map_err(EventQueryError::DatabaseError)?;
            attendees.entry(row.event_id).or_default().push(Attendee {
                user_id: row.user_id,
                first_name: row.first_name,
                last_name: row.last_name,
                status,
            });
        }

        Ok(models
            .into_iter()
            .map(|e| EventListing {
                organization: orgs.get(&e.organization_id).cloned(),
                venue: e.venue_id.and_then(|id| venues.get(&id).cloned()),
                attendees: attendees.remove(&e.id).unwrap_or_default(),
                game_ids: serde_json::from_value(e.game_ids).unwrap_or_default(),
                id: e.id,
                title: e.title,
                description: e.description,
                event_type: e.event_type,
                status: e.status,
                start_time: e.start_time.with_timezone(&chrono::Utc),
                end_time: e.end_time.map(|t| t.with_timezone(&chrono::Utc)),
                max_capacity: e.max_capacity,
                is_recurring: e.is_recurring,
                recurrence_rule: e.recurrence_rule,
                created_at: e.created_at.with_timezone(&chrono::Utc),
                updated_at: e.updated_at.with_timezone(&chrono::Utc),
            })
            .collect())
    }
}

#[async_trait]
impl EventQuery for EventQueryPostgres {
    async fn list_public(&self) -> Result<Vec<EventListing>, EventQueryError> {
        self.load(
            Condition::all()
                .add(events::Column::Status.eq(EVENT_STATUS_ACTIVE))
                .add(events::Column::EventType.eq(EVENT_TYPE_PUBLIC)),
        )
        .await
    }

    async fn list_active(&self) -> Result<Vec<EventListing>, EventQueryError> {
        self.load(Condition::all().add(events::Column::Status.eq(EVENT_STATUS_ACTIVE)))
            .await
    }

    async fn find_slot(&self, event_id: Uuid) -> Result<Option<EventSlot>, EventQueryError> {
        Ok(events::Entity::find_by_id(event_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(|e| EventSlot {
                id: e.id,
                status: e.status,
                max_capacity: e.max_capacity,
            }))
    }
}
