use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::board_game::application::domain::entities::BoardGame;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "board_games")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub bgg_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub thumbnail: Option<String>,
    pub min_players: Option<i32>,
    pub max_players: Option<i32>,
    pub playing_time: Option<i32>,
    pub min_age: Option<i32>,
    #[sea_orm(column_type = "JsonBinary")]
    pub categories: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub mechanics: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub designers: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub publishers: Json,
    pub year_published: Option<i32>,
    #[sea_orm(column_type = "Double", nullable)]
    pub complexity: Option<f64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub rating: Option<f64>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Rows written by older tooling may hold a JSON string or null instead of an array.
fn string_list(value: Json) -> Vec<String> {
    match value {
        Json::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Json::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        Json::String(raw) => serde_json::from_str(&raw).unwrap_or_default(),
        _ => Vec::new(),
    }
}

impl From<Model> for BoardGame {
    fn from(m: Model) -> Self {
        BoardGame {
            id: m.id,
            bgg_id: m.bgg_id,
            name: m.name,
            description: m.description,
            image: m.image,
            thumbnail: m.thumbnail,
            min_players: m.min_players,
            max_players: m.max_players,
            playing_time: m.playing_time,
            min_age: m.min_age,
            categories: string_list(m.categories),
            mechanics: string_list(m.mechanics),
            designers: string_list(m.designers),
            publishers: string_list(m.publishers),
            year_published: m.year_published,
            complexity: m.complexity,
            rating: m.rating,
            created_at: m.created_at.with_timezone(&chrono::Utc),
            updated_at: m.updated_at.with_timezone(&chrono::Utc),
        }
    }
}
