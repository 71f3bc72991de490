use crate::auth::application::domain::entities::UserRole;

/// True for `super_admin` and `venue_admin`. Any other string, including
/// roles this build does not know about, is not an admin.
pub fn is_admin(role: &str) -> bool {
    matches!(
        role.parse::<UserRole>(),
        Ok(UserRole::SuperAdmin) | Ok(UserRole::VenueAdmin)
    )
}

pub fn is_super_admin(role: &str) -> bool {
    matches!(role.parse::<UserRole>(), Ok(UserRole::SuperAdmin))
}
