pub mod authorization;
pub mod email_policy;

pub use authorization::{is_admin, is_super_admin};
pub use email_policy::{normalize_email, EmailPolicyError};
