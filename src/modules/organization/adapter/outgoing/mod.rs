pub mod follower_repository_postgres;
pub mod organization_query_postgres;
pub mod organization_repository_postgres;
pub mod sea_orm_entity;

pub use follower_repository_postgres::FollowerRepositoryPostgres;
pub use organization_query_postgres::OrganizationQueryPostgres;
pub use organization_repository_postgres::OrganizationRepositoryPostgres;
