use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::board_game::application::domain::entities::{
    BggSearchResult, GameSyncRun, SyncCounters, SyncOutcome, SyncType, UpsertOutcome,
};
use crate::board_game::application::ports::incoming::use_cases::{
    GameSyncError, GameSyncUseCase, SearchBggUseCase,
};
use crate::board_game::application::ports::outgoing::{
    BggClient, BoardGameRepository, SyncRunRepository,
};

const HISTORY_LIMIT: u64 = 20;

fn normalize_query(query: &str) -> Result<&str, GameSyncError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(GameSyncError::Validation(
            "Search query is required".to_string(),
        ));
    }
    Ok(query)
}

pub struct SearchBggService<B>
where
    B: BggClient,
{
    bgg: Arc<B>,
}

impl<B> SearchBggService<B>
where
    B: BggClient,
{
    pub fn new(bgg: Arc<B>) -> Self {
        Self { bgg }
    }
}

#[async_trait]
impl<B> SearchBggUseCase for SearchBggService<B>
where
    B: BggClient + Send + Sync,
{
    async fn execute(&self, query: &str) -> Result<Vec<BggSearchResult>, GameSyncError> {
        let query = normalize_query(query)?;
        Ok(self.bgg.search(query).await?)
    }
}

/// Refreshes every catalogued game from BGG, one request at a time.
/// Stops at the first failure; games vanished from BGG are skipped.
pub async fn refresh_catalogue<B, R>(bgg: &B, games: &R) -> SyncOutcome
where
    B: BggClient + ?Sized,
    R: BoardGameRepository + ?Sized,
{
    let mut counters = SyncCounters::default();

    let ids = match games.bgg_ids().await {
        Ok(ids) => ids,
        Err(e) => return SyncOutcome::failed(counters, e.to_string()),
    };

    for bgg_id in ids {
        match bgg.fetch_game(bgg_id).await {
            Ok(Some(game)) => match games.upsert(game).await {
                Ok(outcome) => counters.record(&outcome),
                Err(e) => return SyncOutcome::failed(counters, e.to_string()),
            },
            Ok(None) => {
                warn!(bgg_id, "Catalogued game no longer on BGG");
                counters.processed += 1;
            }
            Err(e) => return SyncOutcome::failed(counters, e.to_string()),
        }
    }

    SyncOutcome::completed(counters)
}

/// Pulls games from BGG into the catalogue and records every run.
pub struct GameSyncService<B, R, S>
where
    B: BggClient,
    R: BoardGameRepository,
    S: SyncRunRepository,
{
    bgg: Arc<B>,
    games: Arc<R>,
    runs: Arc<S>,
}

impl<B, R, S> GameSyncService<B, R, S>
where
    B: BggClient,
    R: BoardGameRepository,
    S: SyncRunRepository,
{
    pub fn new(bgg: Arc<B>, games: Arc<R>, runs: Arc<S>) -> Self {
        Self { bgg, games, runs }
    }

    async fn fetch_and_upsert(&self, bgg_id: i32) -> Result<UpsertOutcome, GameSyncError> {
        let game = self
            .bgg
            .fetch_game(bgg_id)
            .await?
            .ok_or(GameSyncError::GameNotFound)?;
        Ok(self.games.upsert(game).await?)
    }
}

#[async_trait]
impl<B, R, S> GameSyncUseCase for GameSyncService<B, R, S>
where
    B: BggClient + Send + Sync + 'static,
    R: BoardGameRepository + Send + Sync + 'static,
    S: SyncRunRepository + Send + Sync + 'static,
{
    async fn sync_single(&self, bgg_id: i32) -> Result<UpsertOutcome, GameSyncError> {
        if bgg_id <= 0 {
            return Err(GameSyncError::Validation(
                "bggId must be a positive integer".to_string(),
            ));
        }

        let run = self.runs.start(SyncType::Single).await?;
        let result = self.fetch_and_upsert(bgg_id).await;

        let outcome = match &result {
            Ok(upserted) => {
                let mut counters = SyncCounters::default();
                counters.record(upserted);
                SyncOutcome::completed(counters)
            }
            Err(e) => SyncOutcome::failed(SyncCounters::default(), e.to_string()),
        };
        self.runs.finish(run.id, outcome).await?;

        if let Ok(upserted) = &result {
            info!(bgg_id, game_id = %upserted.game().id, "Game synced from BGG");
        }
        result
    }

    async fn sync_search(&self, query: &str) -> Result<Vec<BggSearchResult>, GameSyncError> {
        let query = normalize_query(query)?;
        let run = self.runs.start(SyncType::Search).await?;

        match self.bgg.search(query).await {
            Ok(results) => {
                let counters = SyncCounters {
                    processed: results.len() as i32,
                    ..SyncCounters::default()
                };
                self.runs
                    .finish(run.id, SyncOutcome::completed(counters))
                    .await?;
                Ok(results)
            }
            Err(e) => {
                self.runs
                    .finish(run.id, SyncOutcome::failed(SyncCounters::default(), e.to_string()))
                    .await?;
                Err(e.into())
            }
        }
    }

    async fn start_full_sync(&self) -> Result<GameSyncRun, GameSyncError> {
        let run = self.runs.start(SyncType::Full).await?;

        let bgg = Arc::clone(&self.bgg);
        let games = Arc::clone(&self.games);
        let runs = Arc::clone(&self.runs);
        let run_id = run.id;
        tokio::spawn(async move {
            let outcome = refresh_catalogue(bgg.as_ref(), games.as_ref()).await;
            info!(
                %run_id,
                status = outcome.status.as_str(),
                processed = outcome.counters.processed,
                "Full BGG sync finished"
            );
            if let Err(e) = runs.finish(run_id, outcome).await {
                error!(%run_id, error = %e, "Failed to record full sync result");
            }
        });

        Ok(run)
    }

    async fn history(&self) -> Result<Vec<GameSyncRun>, GameSyncError> {
        Ok(self.runs.recent(HISTORY_LIMIT).await?)
    }
}
