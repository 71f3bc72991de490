use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::auth::application::domain::entities::{InvalidUserStatus, User, UserStatus};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub email_verified: bool,
    pub email_verify_token: Option<String>,
    pub password_reset_token: Option<String>,
    pub password_reset_expires: Option<DateTimeWithTimeZone>,
    pub organization_id: Option<Uuid>,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub is_active: bool,
    pub status: String,
    pub deactivated_at: Option<DateTimeWithTimeZone>,
    pub deactivated_by: Option<Uuid>,
    pub reactivated_at: Option<DateTimeWithTimeZone>,
    pub last_login_at: Option<DateTimeWithTimeZone>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::sessions::Entity")]
    Sessions,
}

impl Related<super::sessions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sessions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for User {
    type Error = InvalidUserStatus;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let utc = |t: DateTimeWithTimeZone| t.with_timezone(&chrono::Utc);

        Ok(User {
            status: model.status.parse::<UserStatus>()?,
            id: model.id,
            email: model.email,
            password_hash: model.password_hash,
            first_name: model.first_name,
            last_name: model.last_name,
            role: model.role,
            email_verified: model.email_verified,
            email_verify_token: model.email_verify_token,
            password_reset_token: model.password_reset_token,
            password_reset_expires: model.password_reset_expires.map(utc),
            organization_id: model.organization_id,
            avatar: model.avatar,
            bio: model.bio,
            location: model.location,
            is_active: model.is_active,
            deactivated_at: model.deactivated_at.map(utc),
            deactivated_by: model.deactivated_by,
            reactivated_at: model.reactivated_at.map(utc),
            last_login_at: model.last_login_at.map(utc),
            created_at: utc(model.created_at),
            updated_at: utc(model.updated_at),
        })
    }
}

#[cfg(test)]
pub mod fixtures {
    use super::Model;
    use chrono::Utc;
    use uuid::Uuid;

    /// Active, verified end user row.
    pub fn user_model(id: Uuid, email: &str) -> Model {
        let now = Utc::now().fixed_offset();
        Model {
            id,
            email: email.to_string(),
            password_hash: "$argon2id$v=19$m=4096,t=3,p=1$c2FsdA$aGFzaA".to_string(),
            first_name: "Robin".to_string(),
            last_name: "Dice".to_string(),
            role: "end_user".to_string(),
            email_verified: true,
            email_verify_token: None,
            password_reset_token: None,
            password_reset_expires: None,
            organization_id: None,
            avatar: None,
            bio: None,
            location: None,
            is_active: true,
            status: "ACTIVE".to_string(),
            deactivated_at: None,
            deactivated_by: None,
            reactivated_at: None,
            last_login_at: None,
            created_at: now,
            updated_at: now,
        }
    }
}
