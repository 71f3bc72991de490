use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::organizations::{ActiveModel, Entity};
use crate::organization::application::domain::entities::{
    NewOrganization, Organization, OrganizationChanges,
};
use crate::organization::application::ports::outgoing::{
    OrganizationRepository, OrganizationRepositoryError,
};

fn map_db_err(e: DbErr) -> OrganizationRepositoryError {
    OrganizationRepositoryError::DatabaseError(e.to_string())
}

#[derive(Clone)]
pub struct OrganizationRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl OrganizationRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrganizationRepository for OrganizationRepositoryPostgres {
    async fn create(
        &self,
        input: NewOrganization,
    ) -> Result<Organization, OrganizationRepositoryError> {
        let now = chrono::Utc::now().fixed_offset();
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name),
            description: Set(input.description),
            address: Set(input.address),
            city: Set(input.city),
            state: Set(input.state),
            zip_code: Set(input.zip_code),
            phone: Set(input.phone),
            email: Set(input.email),
            website: Set(input.website),
            logo: Set(input.logo),
            banner_image: Set(None),
            latitude: Set(None),
            longitude: Set(None),
            allow_multi_venue: Set(input.allow_multi_venue.unwrap_or(false)),
            enable_followers: Set(input.enable_followers.unwrap_or(true)),
            enable_public_events: Set(input.enable_public_events.unwrap_or(true)),
            enable_messaging: Set(input.enable_messaging.unwrap_or(false)),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let saved = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(Organization::from(saved))
    }

    async fn update(
        &self,
        id: Uuid,
        changes: OrganizationChanges,
    ) -> Result<Organization, OrganizationRepositoryError> {
        let existing = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(OrganizationRepositoryError::NotFound)?;

        if changes.is_empty() {
            return Ok(Organization::from(existing));
        }

        let mut model: ActiveModel = existing.into();
        if let Some(v) = changes.name {
            model.name = Set(v);
        }
        if let Some(v) = changes.description {
            model.description = Set(Some(v));
        }
        if let Some(v) = changes.address {
            model.address = Set(Some(v));
        }
        if let Some(v) = changes.city {
            model.city = Set(Some(v));
        }
        if let Some(v) = changes.state {
            model.state = Set(Some(v));
        }
        if let Some(v) = changes.zip_code {
            model.zip_code = Set(Some(v));
        }
        if let Some(v) = changes.phone {
            model.phone = Set(Some(v));
        }
        if let Some(v) = changes.email {
            model.email = Set(Some(v));
        }
        if let Some(v) = changes.website {
            model.website = Set(Some(v));
        }
        if let Some(v) = changes.logo {
            model.logo = Set(Some(v));
        }
        if let Some(v) = changes.banner_image {
            model.banner_image = Set(Some(v));
        }
        if let Some(v) = changes.allow_multi_venue {
            model.allow_multi_venue = Set(v);
        }
        if let Some(v) = changes.enable_followers {
            model.enable_followers = Set(v);
        }
        if let Some(v) = changes.enable_public_events {
            model.enable_public_events = Set(v);
        }
        if let Some(v) = changes.enable_messaging {
            model.enable_messaging = Set(v);
        }
        model.updated_at = Set(chrono::Utc::now().fixed_offset());

        let saved = model.update(&*self.db).await.map_err(map_db_err)?;
        Ok(Organization::from(saved))
    }

    async fn delete(&self, id: Uuid) -> Result<(), OrganizationRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(OrganizationRepositoryError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::organization::adapter::outgoing::sea_orm_entity::organizations::{
        fixtures::organization_model, Model,
    };
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    #[tokio::test]
    async fn test_create_returns_inserted_row() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![organization_model(id, "Game Guild")]])
            .into_connection();
        let repo = OrganizationRepositoryPostgres::new(Arc::new(db));

        let org = repo
            .create(NewOrganization {
                name: "Game Guild".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(org.id, id);
        assert_eq!(org.name, "Game Guild");
    }

    #[tokio::test]
    async fn test_update_missing_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<Model>::new()])
            .into_connection();
        let repo = OrganizationRepositoryPostgres::new(Arc::new(db));

        let result = repo
            .update(Uuid::new_v4(), OrganizationChanges::default())
            .await;

        assert!(matches!(result, Err(OrganizationRepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn test_update_applies_changes() {
        let id = Uuid::new_v4();
        let mut renamed = organization_model(id, "Renamed");
        renamed.enable_messaging = true;
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![organization_model(id, "Original")]])
            .append_query_results(vec![vec![renamed]])
            .into_connection();
        let repo = OrganizationRepositoryPostgres::new(Arc::new(db));

        let org = repo
            .update(
                id,
                OrganizationChanges {
                    name: Some("Renamed".to_string()),
                    enable_messaging: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(org.name, "Renamed");
        assert!(org.enable_messaging);
    }

    #[tokio::test]
    async fn test_delete_without_rows_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();
        let repo = OrganizationRepositoryPostgres::new(Arc::new(db));

        let result = repo.delete(Uuid::new_v4()).await;

        assert!(matches!(result, Err(OrganizationRepositoryError::NotFound)));
    }
}
