pub mod attendee_repository_postgres;
pub mod event_query_postgres;
pub mod sea_orm_entity;

pub use attendee_repository_postgres::AttendeeRepositoryPostgres;
pub use event_query_postgres::EventQueryPostgres;
