pub mod argon2_hasher;
pub mod bcrypt_hasher;
pub mod legacy_aware_hasher;
pub mod random_token_generator;

pub use argon2_hasher::Argon2Hasher;
pub use bcrypt_hasher::BcryptHasher;
pub use legacy_aware_hasher::LegacyAwareHasher;
pub use random_token_generator::RandomTokenGenerator;
