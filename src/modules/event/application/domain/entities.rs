use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

pub const EVENT_STATUS_ACTIVE: &str = "ACTIVE";
pub const EVENT_TYPE_PUBLIC: &str = "PUBLIC";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttendeeStatus {
    Attending,
    Waitlist,
    Cancelled,
}

impl AttendeeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendeeStatus::Attending => "ATTENDING",
            AttendeeStatus::Waitlist => "WAITLIST",
            AttendeeStatus::Cancelled => "CANCELLED",
        }
    }

    /// Seat for a new registration given how many are already attending.
    pub fn for_capacity(attending: u64, max_capacity: i32) -> Self {
        if attending >= max_capacity.max(0) as u64 {
            AttendeeStatus::Waitlist
        } else {
            AttendeeStatus::Attending
        }
    }
}

impl FromStr for AttendeeStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ATTENDING" => Ok(AttendeeStatus::Attending),
            "WAITLIST" => Ok(AttendeeStatus::Waitlist),
            "CANCELLED" => Ok(AttendeeStatus::Cancelled),
            other => Err(format!("Invalid attendee status: {other}")),
        }
    }
}

impl fmt::Display for AttendeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct OrganizationRef {
    pub id: Uuid,
    pub name: String,
    pub logo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct VenueRef {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub city: Option<String>,
    pub state: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Attendee {
    pub user_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub status: AttendeeStatus,
}

/// An event joined with its organization, venue and attendees.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventListing {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub event_type: String,
    pub status: String,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub max_capacity: i32,
    pub is_recurring: bool,
    pub recurrence_rule: Option<String>,
    pub game_ids: Vec<Uuid>,
    pub organization: Option<OrganizationRef>,
    pub venue: Option<VenueRef>,
    pub attendees: Vec<Attendee>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl EventListing {
    pub fn attending_count(&self) -> usize {
        self.attendees
            .iter()
            .filter(|a| a.status == AttendeeStatus::Attending)
            .count()
    }
}

/// Admin-panel view of an event ("game session").
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GameSession {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub event_type: String,
    pub status: String,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub max_capacity: i32,
    pub current_attendees: usize,
    pub organization: Option<OrganizationRef>,
    pub venue: Option<VenueRef>,
    pub created_at: DateTime<Utc>,
}

impl From<EventListing> for GameSession {
    fn from(event: EventListing) -> Self {
        GameSession {
            current_attendees: event.attending_count(),
            id: event.id,
            title: event.title,
            description: event.description,
            event_type: event.event_type,
            status: event.status,
            start_time: event.start_time,
            end_time: event.end_time,
            max_capacity: event.max_capacity,
            organization: event.organization,
            venue: event.venue,
            created_at: event.created_at,
        }
    }
}

/// What registration needs to know about an event.
#[derive(Debug, Clone, PartialEq)]
pub struct EventSlot {
    pub id: Uuid,
    pub status: String,
    pub max_capacity: i32,
}

impl EventSlot {
    pub fn is_open(&self) -> bool {
        self.status == EVENT_STATUS_ACTIVE
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub id: Uuid,
    pub event_id: Uuid,
    pub user_id: Uuid,
    pub status: AttendeeStatus,
    pub created_at: DateTime<Utc>,
}
