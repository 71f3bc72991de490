use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::board_game::adapter::outgoing::bgg::BggXmlParser;
use crate::board_game::application::domain::entities::{
    BggGame, BggSearchResult, BoardGame, GameSyncRun, SyncOutcome, SyncStatus, SyncType,
    UpsertOutcome,
};
use crate::board_game::application::ports::outgoing::{
    BggClient, BggClientError, BoardGameRepository, BoardGameRepositoryError, SyncRunRepository,
    SyncRunRepositoryError,
};

/// Catalogue and sync history; implements both storage ports.
#[derive(Clone, Default)]
pub struct InMemoryGames {
    games: Arc<Mutex<Vec<BoardGame>>>,
    runs: Arc<Mutex<Vec<GameSyncRun>>>,
    fail: bool,
}

impl InMemoryGames {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub async fn seed(&self, game: BggGame) -> BoardGame {
        match self.upsert(game).await {
            Ok(outcome) => outcome.into_game(),
            Err(e) => panic!("seeding failed: {e}"),
        }
    }

    pub fn runs(&self) -> Vec<GameSyncRun> {
        self.runs.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), BoardGameRepositoryError> {
        if self.fail {
            return Err(BoardGameRepositoryError::DatabaseError(
                "database unavailable".to_string(),
            ));
        }
        Ok(())
    }
}

fn apply(target: &mut BoardGame, game: BggGame) {
    target.name = game.name;
    target.description = game.description;
    target.image = game.image;
    target.thumbnail = game.thumbnail;
    target.min_players = game.min_players;
    target.max_players = game.max_players;
    target.playing_time = game.playing_time;
    target.min_age = game.min_age;
    target.categories = game.categories;
    target.mechanics = game.mechanics;
    target.designers = game.designers;
    target.publishers = game.publishers;
    target.year_published = game.year_published;
    target.complexity = game.complexity;
    target.rating = game.rating;
    target.updated_at = Utc::now();
}

#[async_trait]
impl BoardGameRepository for InMemoryGames {
    async fn list(&self) -> Result<Vec<BoardGame>, BoardGameRepositoryError> {
        self.check()?;
        let mut games = self.games.lock().unwrap().clone();
        games.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(games)
    }

    async fn upsert(&self, game: BggGame) -> Result<UpsertOutcome, BoardGameRepositoryError> {
        self.check()?;
        let mut games = self.games.lock().unwrap();
        if let Some(existing) = games.iter_mut().find(|g| g.bgg_id == game.bgg_id) {
            apply(existing, game);
            return Ok(UpsertOutcome::Updated(existing.clone()));
        }

        let now = Utc::now();
        let mut created = BoardGame {
            id: Uuid::new_v4(),
            bgg_id: game.bgg_id,
            name: String::new(),
            description: None,
            image: None,
            thumbnail: None,
            min_players: None,
            max_players: None,
            playing_time: None,
            min_age: None,
            categories: vec![],
            mechanics: vec![],
            designers: vec![],
            publishers: vec![],
            year_published: None,
            complexity: None,
            rating: None,
            created_at: now,
            updated_at: now,
        };
        apply(&mut created, game);
        games.push(created.clone());
        Ok(UpsertOutcome::Created(created))
    }

    async fn bgg_ids(&self) -> Result<Vec<i32>, BoardGameRepositoryError> {
        self.check()?;
        Ok(self.games.lock().unwrap().iter().map(|g| g.bgg_id).collect())
    }
}

#[async_trait]
impl SyncRunRepository for InMemoryGames {
    async fn start(&self, sync_type: SyncType) -> Result<GameSyncRun, SyncRunRepositoryError> {
        let run = GameSyncRun {
            id: Uuid::new_v4(),
            sync_type,
            status: SyncStatus::Running,
            games_processed: 0,
            games_added: 0,
            games_updated: 0,
            started_at: Utc::now(),
            completed_at: None,
            error: None,
        };
        self.runs.lock().unwrap().push(run.clone());
        Ok(run)
    }

    async fn finish(
        &self,
        run_id: Uuid,
        outcome: SyncOutcome,
    ) -> Result<GameSyncRun, SyncRunRepositoryError> {
        let mut runs = self.runs.lock().unwrap();
        let run = runs
            .iter_mut()
            .find(|r| r.id == run_id)
            .ok_or(SyncRunRepositoryError::NotFound)?;
        run.status = outcome.status;
        run.games_processed = outcome.counters.processed;
        run.games_added = outcome.counters.added;
        run.games_updated = outcome.counters.updated;
        run.error = outcome.error;
        run.completed_at = Some(Utc::now());
        Ok(run.clone())
    }

    async fn recent(&self, limit: u64) -> Result<Vec<GameSyncRun>, SyncRunRepositoryError> {
        // Insertion order stands in for started_at, which can tie within a test.
        Ok(self
            .runs
            .lock()
            .unwrap()
            .iter()
            .rev()
            .take(limit as usize)
            .cloned()
            .collect())
    }
}

/// Canned BGG responses.
#[derive(Clone, Default)]
pub struct FakeBgg {
    games: Vec<BggGame>,
    unavailable: bool,
}

impl FakeBgg {
    pub fn with_games(games: Vec<BggGame>) -> Self {
        Self {
            games,
            unavailable: false,
        }
    }

    pub fn unavailable() -> Self {
        Self {
            games: vec![],
            unavailable: true,
        }
    }

    fn check(&self) -> Result<(), BggClientError> {
        if self.unavailable {
            return Err(BggClientError::Unavailable("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl BggClient for FakeBgg {
    async fn fetch_game(&self, bgg_id: i32) -> Result<Option<BggGame>, BggClientError> {
        self.check()?;
        Ok(self.games.iter().find(|g| g.bgg_id == bgg_id).cloned())
    }

    async fn search(&self, query: &str) -> Result<Vec<BggSearchResult>, BggClientError> {
        self.check()?;
        let needle = query.to_lowercase();
        Ok(self
            .games
            .iter()
            .filter(|g| g.name.to_lowercase().contains(&needle))
            .map(|g| BggSearchResult {
                bgg_id: g.bgg_id,
                name: g.name.clone(),
                year_published: g.year_published,
            })
            .collect())
    }
}

/// Serves raw `thing` documents through the real XML parser.
pub struct XmlBgg {
    documents: Vec<(i32, String)>,
    parser: BggXmlParser,
}

impl XmlBgg {
    pub fn with_documents(documents: Vec<(i32, &str)>) -> Self {
        Self {
            documents: documents
                .into_iter()
                .map(|(id, xml)| (id, xml.to_string()))
                .collect(),
            parser: BggXmlParser::new().unwrap(),
        }
    }
}

#[async_trait]
impl BggClient for XmlBgg {
    async fn fetch_game(&self, bgg_id: i32) -> Result<Option<BggGame>, BggClientError> {
        let xml = self
            .documents
            .iter()
            .find(|(id, _)| *id == bgg_id)
            .map(|(_, xml)| xml.as_str())
            .ok_or_else(|| BggClientError::Unavailable(format!("no document for {bgg_id}")))?;
        Ok(self.parser.parse_thing(bgg_id, xml))
    }

    async fn search(&self, _query: &str) -> Result<Vec<BggSearchResult>, BggClientError> {
        Ok(vec![])
    }
}
