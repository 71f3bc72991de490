use rand::{rngs::OsRng, RngCore};

use crate::auth::application::ports::outgoing::token_generator::TokenGenerator;

/// 32 bytes from the OS CSPRNG, hex encoded (64 chars).
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomTokenGenerator;

impl TokenGenerator for RandomTokenGenerator {
    fn generate(&self) -> String {
        let mut bytes = [0u8; 32];
        OsRng.fill_bytes(&mut bytes);
        bytes.iter().map(|b| format!("{:02x}", b)).collect()
    }
}
