use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::organization::application::domain::entities::{
    NewOrganization, Organization, OrganizationChanges, OrganizationEvent, OrganizationFollower,
    OrganizationSummary, Venue,
};
use crate::organization::application::ports::outgoing::{
    FollowerRepository, FollowerRepositoryError, OrganizationQuery, OrganizationQueryError,
    OrganizationRepository, OrganizationRepositoryError,
};

#[derive(Default)]
struct State {
    organizations: Vec<Organization>,
    venues: Vec<Venue>,
    events: Vec<(Uuid, OrganizationEvent)>,
    followers: Vec<(Uuid, Uuid, DateTime<Utc>)>,
}

/// Backs every organization port with one shared store.
#[derive(Clone, Default)]
pub struct InMemoryOrganizations {
    state: Arc<Mutex<State>>,
    fail: bool,
}

impl InMemoryOrganizations {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn add(&self, organization: Organization) -> Organization {
        self.state
            .lock()
            .unwrap()
            .organizations
            .push(organization.clone());
        organization
    }

    pub fn get(&self, id: Uuid) -> Option<Organization> {
        self.state
            .lock()
            .unwrap()
            .organizations
            .iter()
            .find(|o| o.id == id)
            .cloned()
    }

    pub fn add_event(&self, organization_id: Uuid, title: &str, start: DateTime<Utc>) -> Uuid {
        let id = Uuid::new_v4();
        self.state.lock().unwrap().events.push((
            organization_id,
            OrganizationEvent {
                id,
                title: title.to_string(),
                description: None,
                event_type: "PUBLIC".to_string(),
                status: "ACTIVE".to_string(),
                venue_id: None,
                start_time: start,
                end_time: None,
                max_capacity: 8,
            },
        ));
        id
    }

    pub fn add_follower(&self, organization_id: Uuid, user_id: Uuid) {
        self.state
            .lock()
            .unwrap()
            .followers
            .push((organization_id, user_id, Utc::now()));
    }

    fn check(&self) -> Result<(), String> {
        if self.fail {
            Err("database unavailable".to_string())
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl OrganizationQuery for InMemoryOrganizations {
    async fn list_with_counts(&self) -> Result<Vec<OrganizationSummary>, OrganizationQueryError> {
        self.check().map_err(OrganizationQueryError::DatabaseError)?;
        let state = self.state.lock().unwrap();
        let mut list: Vec<OrganizationSummary> = state
            .organizations
            .iter()
            .map(|o| OrganizationSummary {
                organization: o.clone(),
                follower_count: state.followers.iter().filter(|f| f.0 == o.id).count() as i64,
                event_count: state.events.iter().filter(|e| e.0 == o.id).count() as i64,
                venue_count: state
                    .venues
                    .iter()
                    .filter(|v| v.organization_id == o.id)
                    .count() as i64,
            })
            .collect();
        list.sort_by(|a, b| a.organization.name.cmp(&b.organization.name));
        Ok(list)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Organization>, OrganizationQueryError> {
        self.check().map_err(OrganizationQueryError::DatabaseError)?;
        Ok(self.get(id))
    }

    async fn venues_of(&self, id: Uuid) -> Result<Vec<Venue>, OrganizationQueryError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .venues
            .iter()
            .filter(|v| v.organization_id == id)
            .cloned()
            .collect())
    }

    async fn events_of(&self, id: Uuid) -> Result<Vec<OrganizationEvent>, OrganizationQueryError> {
        let state = self.state.lock().unwrap();
        let mut events: Vec<OrganizationEvent> = state
            .events
            .iter()
            .filter(|(org, _)| *org == id)
            .map(|(_, e)| e.clone())
            .collect();
        events.sort_by_key(|e| e.start_time);
        Ok(events)
    }

    async fn followers_of(
        &self,
        id: Uuid,
    ) -> Result<Vec<OrganizationFollower>, OrganizationQueryError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .followers
            .iter()
            .filter(|(org, _, _)| *org == id)
            .map(|(_, user_id, at)| OrganizationFollower {
                user_id: *user_id,
                first_name: "Test".to_string(),
                last_name: "Follower".to_string(),
                followed_at: *at,
            })
            .collect())
    }
}

#[async_trait]
impl OrganizationRepository for InMemoryOrganizations {
    async fn create(
        &self,
        input: NewOrganization,
    ) -> Result<Organization, OrganizationRepositoryError> {
        self.check()
            .map_err(OrganizationRepositoryError::DatabaseError)?;
        let now = Utc::now();
        let organization = Organization {
            id: Uuid::new_v4(),
            name: input.name,
            description: input.description,
            address: input.address,
            city: input.city,
            state: input.state,
            zip_code: input.zip_code,
            phone: input.phone,
            email: input.email,
            website: input.website,
            logo: input.logo,
            banner_image: None,
            latitude: None,
            longitude: None,
            allow_multi_venue: input.allow_multi_venue.unwrap_or(false),
            enable_followers: input.enable_followers.unwrap_or(true),
            enable_public_events: input.enable_public_events.unwrap_or(true),
            enable_messaging: input.enable_messaging.unwrap_or(false),
            created_at: now,
            updated_at: now,
        };
        Ok(self.add(organization))
    }

    async fn update(
        &self,
        id: Uuid,
        changes: OrganizationChanges,
    ) -> Result<Organization, OrganizationRepositoryError> {
        self.check()
            .map_err(OrganizationRepositoryError::DatabaseError)?;
        let mut state = self.state.lock().unwrap();
        let org = state
            .organizations
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or(OrganizationRepositoryError::NotFound)?;

        if let Some(name) = changes.name {
            org.name = name;
        }
        if let Some(description) = changes.description {
            org.description = Some(description);
        }
        if let Some(city) = changes.city {
            org.city = Some(city);
        }
        if let Some(flag) = changes.enable_followers {
            org.enable_followers = flag;
        }
        org.updated_at = Utc::now();
        Ok(org.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), OrganizationRepositoryError> {
        self.check()
            .map_err(OrganizationRepositoryError::DatabaseError)?;
        let mut state = self.state.lock().unwrap();
        let before = state.organizations.len();
        state.organizations.retain(|o| o.id != id);
        if state.organizations.len() == before {
            return Err(OrganizationRepositoryError::NotFound);
        }
        state.followers.retain(|f| f.0 != id);
        Ok(())
    }
}

#[async_trait]
impl FollowerRepository for InMemoryOrganizations {
    async fn is_following(
        &self,
        user_id: Uuid,
        organization_id: Uuid,
    ) -> Result<bool, FollowerRepositoryError> {
        self.check().map_err(FollowerRepositoryError::DatabaseError)?;
        Ok(self
            .state
            .lock()
            .unwrap()
            .followers
            .iter()
            .any(|f| f.0 == organization_id && f.1 == user_id))
    }

    async fn follow(
        &self,
        user_id: Uuid,
        organization_id: Uuid,
    ) -> Result<(), FollowerRepositoryError> {
        if self.is_following(user_id, organization_id).await? {
            return Err(FollowerRepositoryError::AlreadyFollowing);
        }
        self.add_follower(organization_id, user_id);
        Ok(())
    }

    async fn unfollow(
        &self,
        user_id: Uuid,
        organization_id: Uuid,
    ) -> Result<bool, FollowerRepositoryError> {
        self.check().map_err(FollowerRepositoryError::DatabaseError)?;
        let mut state = self.state.lock().unwrap();
        let before = state.followers.len();
        state
            .followers
            .retain(|f| !(f.0 == organization_id && f.1 == user_id));
        Ok(state.followers.len() != before)
    }
}
