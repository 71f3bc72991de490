use argon2::{
    password_hash::{
        Error as PasswordHashError, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};
use async_trait::async_trait;
use rand_core::OsRng;
use tracing::warn;

use crate::auth::application::ports::outgoing::password_hasher::{
    HashError, PasswordHasher as HasherTrait,
};

#[derive(Clone)]
pub struct Argon2Hasher {
    params: Params,
    #[cfg(test)]
    salt_override: Option<SaltString>,
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Argon2Hasher {
    const DEFAULT_MEMORY_KIB: u32 = 4 * 1024;
    const DEFAULT_ITERATIONS: u32 = 3;
    const DEFAULT_PARALLELISM: u32 = 1;

    pub fn new() -> Self {
        // 4MB memory, 3 iterations, 1 thread
        let params = Params::new(
            Self::DEFAULT_MEMORY_KIB,
            Self::DEFAULT_ITERATIONS,
            Self::DEFAULT_PARALLELISM,
            None,
        )
        .unwrap_or_default();

        Self {
            params,
            #[cfg(test)]
            salt_override: None,
        }
    }

    /// Custom cost parameters. Invalid combinations are rejected by argon2.
    pub fn with_params(
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
    ) -> Result<Self, argon2::Error> {
        let params = Params::new(memory_kib, iterations, parallelism, None)?;

        Ok(Self {
            params,
            #[cfg(test)]
            salt_override: None,
        })
    }

    /// Reads `ARGON2_MEMORY_COST` (KiB), `ARGON2_TIME_COST` and
    /// `ARGON2_PARALLELISM`. Falls back to the defaults on bad input.
    pub fn from_env() -> Self {
        fn read(key: &str, default: u32) -> u32 {
            std::env::var(key)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default)
        }

        let memory_kib = read("ARGON2_MEMORY_COST", Self::DEFAULT_MEMORY_KIB);
        let iterations = read("ARGON2_TIME_COST", Self::DEFAULT_ITERATIONS);
        let parallelism = read("ARGON2_PARALLELISM", Self::DEFAULT_PARALLELISM);

        Self::with_params(memory_kib, iterations, parallelism).unwrap_or_else(|e| {
            warn!(error = %e, "Invalid Argon2 parameters, using defaults");
            Self::new()
        })
    }

    #[cfg(test)]
    pub fn with_fixed_salt(salt: &str) -> Self {
        Self {
            params: Params::new(4 * 1024, 3, 1, None).expect("Invalid params"),
            salt_override: Some(SaltString::from_b64(salt).expect("Invalid salt")),
        }
    }
}

#[async_trait]
impl HasherTrait for Argon2Hasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        let password = password.to_string();
        let params = self.params.clone();

        #[cfg(test)]
        let salt_override = self.salt_override.clone();

        tokio::task::spawn_blocking(move || {
            let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

            #[cfg(test)]
            let salt = salt_override.unwrap_or_else(|| SaltString::generate(&mut OsRng));

            #[cfg(not(test))]
            let salt = SaltString::generate(&mut OsRng);

            argon2
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|_| HashError::HashFailed)
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        let password = password.to_string();
        let hash = hash.to_string();

        tokio::task::spawn_blocking(move || {
            let parsed_hash = PasswordHash::new(&hash).map_err(|_| HashError::VerifyFailed)?;

            // Cost parameters come from the PHC string, not from self.params
            match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
                Ok(_) => Ok(true),
                Err(PasswordHashError::Password) => Ok(false),
                Err(_) => Err(HashError::VerifyFailed),
            }
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_argon2_hash_and_verify_password() {
        let hasher = Argon2Hasher::new();
        let password = "meeple-and-dice";

        let hashed_password = hasher.hash_password(password).await.unwrap();
        assert!(hashed_password.starts_with("$argon2id$"));

        assert!(hasher
            .verify_password(password, &hashed_password)
            .await
            .unwrap());
        assert!(!hasher
            .verify_password("wrong-password", &hashed_password)
            .await
            .unwrap());

        let verify_invalid_hash = hasher.verify_password(password, "invalid-hash").await;
        assert!(matches!(verify_invalid_hash, Err(HashError::VerifyFailed)));
    }

    #[tokio::test]
    async fn test_hash_verifies_across_different_params() {
        let strong = Argon2Hasher::with_params(8 * 1024, 2, 1).unwrap();
        let hash = strong.hash_password("catan123").await.unwrap();

        // A hasher configured differently still verifies using the PHC params
        let default_hasher = Argon2Hasher::new();
        assert!(default_hasher.verify_password("catan123", &hash).await.unwrap());
    }

    #[test]
    fn test_with_params_rejects_invalid_cost() {
        assert!(Argon2Hasher::with_params(0, 0, 0).is_err());
    }

    #[tokio::test]
    async fn test_hash_password_error() {
        let bad_salt = SaltString::encode_b64(b"short").unwrap();

        let hasher = Argon2Hasher::with_fixed_salt(bad_salt.as_str());
        let result = hasher.hash_password("abc123").await;

        assert!(matches!(result, Err(HashError::HashFailed)));
    }
}
