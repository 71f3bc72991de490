use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::auth::application::domain::entities::StatusLog;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "user_status_logs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub old_status: String,
    pub new_status: String,
    pub changed_by: Uuid,
    pub reason: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for StatusLog {
    fn from(model: Model) -> Self {
        StatusLog {
            id: model.id,
            user_id: model.user_id,
            old_status: model.old_status,
            new_status: model.new_status,
            changed_by: model.changed_by,
            reason: model.reason,
            created_at: model.created_at.with_timezone(&chrono::Utc),
        }
    }
}
