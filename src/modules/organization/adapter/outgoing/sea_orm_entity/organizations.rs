use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::organization::application::domain::entities::Organization;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "organizations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub logo: Option<String>,
    pub banner_image: Option<String>,
    #[sea_orm(column_type = "Double", nullable)]
    pub latitude: Option<f64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub longitude: Option<f64>,
    pub allow_multi_venue: bool,
    pub enable_followers: bool,
    pub enable_public_events: bool,
    pub enable_messaging: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::venues::Entity")]
    Venues,
    #[sea_orm(has_many = "super::followers::Entity")]
    Followers,
}

impl Related<super::venues::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Venues.def()
    }
}

impl Related<super::followers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Followers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Organization {
    fn from(model: Model) -> Self {
        Organization {
            id: model.id,
            name: model.name,
            description: model.description,
            address: model.address,
            city: model.city,
            state: model.state,
            zip_code: model.zip_code,
            phone: model.phone,
            email: model.email,
            website: model.website,
            logo: model.logo,
            banner_image: model.banner_image,
            latitude: model.latitude,
            longitude: model.longitude,
            allow_multi_venue: model.allow_multi_venue,
            enable_followers: model.enable_followers,
            enable_public_events: model.enable_public_events,
            enable_messaging: model.enable_messaging,
            created_at: model.created_at.with_timezone(&chrono::Utc),
            updated_at: model.updated_at.with_timezone(&chrono::Utc),
        }
    }
}
