pub mod password;
pub mod token_hasher;

pub use password::BasicPasswordPolicy;
pub use token_hasher::hash_token;
