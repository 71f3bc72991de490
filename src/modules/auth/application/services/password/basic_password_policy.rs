use crate::auth::application::ports::incoming::password_policy::{
    PasswordPolicy, PasswordPolicyError,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct BasicPasswordPolicy;

impl BasicPasswordPolicy {
    pub const MIN_LEN: usize = 6;
    pub const MAX_LEN: usize = 128;
}

impl PasswordPolicy for BasicPasswordPolicy {
    fn validate(&self, password: &str) -> Result<(), PasswordPolicyError> {
        let len = password.chars().count();

        if len < Self::MIN_LEN {
            return Err(PasswordPolicyError::TooShort(Self::MIN_LEN));
        }

        if len > Self::MAX_LEN {
            return Err(PasswordPolicyError::TooLong(Self::MAX_LEN));
        }

        Ok(())
    }
}
