use async_trait::async_trait;
use std::sync::Arc;

use super::bcrypt_hasher::BcryptHasher;
use crate::auth::application::ports::outgoing::password_hasher::{HashError, PasswordHasher};

/// New hashes go through `primary`; stored bcrypt hashes are still verified
/// with bcrypt so imported accounts keep working.
#[derive(Clone)]
pub struct LegacyAwareHasher {
    primary: Arc<dyn PasswordHasher>,
    legacy: BcryptHasher,
}

impl LegacyAwareHasher {
    pub fn new(primary: Arc<dyn PasswordHasher>) -> Self {
        Self {
            primary,
            legacy: BcryptHasher::default(),
        }
    }
}

#[async_trait]
impl PasswordHasher for LegacyAwareHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        self.primary.hash_password(password).await
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        if BcryptHasher::is_bcrypt_hash(hash) {
            self.legacy.verify_password(password, hash).await
        } else {
            self.primary.verify_password(password, hash).await
        }
    }
}
