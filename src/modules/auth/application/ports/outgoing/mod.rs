pub mod password_hasher;
pub mod session_repository;
pub mod status_log_repository;
pub mod token_generator;
pub mod user_query;
pub mod user_repository;

pub use password_hasher::{HashError, PasswordHasher};
pub use session_repository::{SessionRepository, SessionRepositoryError};
pub use status_log_repository::{StatusLogRepository, StatusLogRepositoryError};
pub use token_generator::TokenGenerator;
pub use user_query::{UserQuery, UserQueryError};
pub use user_repository::{UserProfileUpdate, UserRepository, UserRepositoryError};
