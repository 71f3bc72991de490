pub mod sea_orm_entity;
pub mod security;
pub mod session_repository_postgres;
pub mod status_log_repository_postgres;
pub mod user_query_postgres;
pub mod user_repository_postgres;

pub use session_repository_postgres::SessionRepositoryPostgres;
pub use status_log_repository_postgres::StatusLogRepositoryPostgres;
pub use user_query_postgres::UserQueryPostgres;
pub use user_repository_postgres::UserRepositoryPostgres;
