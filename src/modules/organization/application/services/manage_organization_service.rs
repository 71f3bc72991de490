use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::organization::application::domain::entities::{
    NewOrganization, Organization, OrganizationChanges,
};
use crate::organization::application::ports::incoming::use_cases::{
    ManageOrganizationError, ManageOrganizationUseCase,
};
use crate::organization::application::ports::outgoing::OrganizationRepository;

const NAME_MAX_LEN: usize = 200;

pub struct ManageOrganizationService<R>
where
    R: OrganizationRepository,
{
    repository: R,
}

impl<R> ManageOrganizationService<R>
where
    R: OrganizationRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn validate_name(name: &str) -> Result<String, ManageOrganizationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ManageOrganizationError::Validation(
            "Organization name is required".to_string(),
        ));
    }
    if name.chars().count() > NAME_MAX_LEN {
        return Err(ManageOrganizationError::Validation(format!(
            "Organization name must be at most {} characters",
            NAME_MAX_LEN
        )));
    }
    Ok(name.to_string())
}

#[async_trait]
impl<R> ManageOrganizationUseCase for ManageOrganizationService<R>
where
    R: OrganizationRepository + Send + Sync,
{
    async fn create(
        &self,
        mut input: NewOrganization,
    ) -> Result<Organization, ManageOrganizationError> {
        input.name = validate_name(&input.name)?;

        let organization = self.repository.create(input).await?;
        info!(organization_id = %organization.id, name = %organization.name, "Organization created");
        Ok(organization)
    }

    async fn update(
        &self,
        id: Uuid,
        mut changes: OrganizationChanges,
    ) -> Result<Organization, ManageOrganizationError> {
        if let Some(name) = changes.name.as_deref() {
            changes.name = Some(validate_name(name)?);
        }

        let organization = self.repository.update(id, changes).await?;
        info!(organization_id = %id, "Organization updated");
        Ok(organization)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ManageOrganizationError> {
        self.repository.delete(id).await?;
        info!(organization_id = %id, "Organization deleted");
        Ok(())
    }
}
