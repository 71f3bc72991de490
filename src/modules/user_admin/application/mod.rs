pub mod use_cases;
pub mod user_admin_use_cases;

pub use user_admin_use_cases::UserAdminUseCases;
