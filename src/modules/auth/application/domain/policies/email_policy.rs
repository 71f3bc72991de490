use email_address::EmailAddress;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmailPolicyError {
    #[error("Email cannot be empty")]
    Empty,

    #[error("Invalid email format")]
    InvalidFormat,
}

/// Canonical form used for every write and lookup: trimmed and lowercased.
pub fn normalize_email(raw: &str) -> Result<String, EmailPolicyError> {
    let email = raw.trim();

    if email.is_empty() {
        return Err(EmailPolicyError::Empty);
    }

    if !EmailAddress::is_valid(email) {
        return Err(EmailPolicyError::InvalidFormat);
    }

    Ok(email.to_lowercase())
}
