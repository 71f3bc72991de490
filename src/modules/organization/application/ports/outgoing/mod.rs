pub mod follower_repository;
pub mod organization_query;
pub mod organization_repository;

pub use follower_repository::{FollowerRepository, FollowerRepositoryError};
pub use organization_query::{OrganizationQuery, OrganizationQueryError};
pub use organization_repository::{OrganizationRepository, OrganizationRepositoryError};
