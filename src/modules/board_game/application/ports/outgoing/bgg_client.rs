use async_trait::async_trait;

use crate::board_game::application::domain::entities::{BggGame, BggSearchResult};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BggClientError {
    #[error("BGG request failed: {0}")]
    Unavailable(String),

    #[error("BGG response could not be parsed: {0}")]
    Malformed(String),
}

/// Read access to the BoardGameGeek XML API.
#[async_trait]
pub trait BggClient: Send + Sync {
    /// `None` when BGG has no item with that id.
    async fn fetch_game(&self, bgg_id: i32) -> Result<Option<BggGame>, BggClientError>;

    async fn search(&self, query: &str) -> Result<Vec<BggSearchResult>, BggClientError>;
}
