//! Thread reconstruction: walk reply links forward from a round-1 answer.

use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, error};

use super::topology::{neighbors_in, RingTopology};
use crate::domain::models::{Answer, AnswerId, GameId, PlayerId};
use crate::domain::rounds::Round;
use crate::domain::thread::{label_thread, name_lookup, ThreadEntry, ThreadGuard};
use crate::errors::domain::DomainError;
use crate::store::GameStore;

#[derive(Debug, Clone, Copy)]
enum Cursor {
    Origin(PlayerId),
    After(AnswerId),
    Done,
}

/// Lazy forward walk over one thread.
///
/// Each call to [`ThreadWalk::next`] fetches one hop. The walk ends at the
/// current terminal answer; restart by asking the reconstructor for a new walk.
#[derive(Debug)]
pub struct ThreadWalk {
    game: GameId,
    cursor: Cursor,
    guard: ThreadGuard,
}

impl ThreadWalk {
    fn new(game: GameId, origin: PlayerId) -> Self {
        Self {
            game,
            cursor: Cursor::Origin(origin),
            guard: ThreadGuard::new(),
        }
    }

    pub async fn next(&mut self, store: &dyn GameStore) -> Result<Option<Answer>, DomainError> {
        let found = match self.cursor {
            Cursor::Origin(player) => store.find_answer(self.game, player, Round::FIRST).await?,
            Cursor::After(id) => store.find_answer_by_reply_target(id).await?,
            Cursor::Done => return Ok(None),
        };

        let Some(answer) = found else {
            self.cursor = Cursor::Done;
            return Ok(None);
        };

        if let Err(e) = self.guard.admit(&answer) {
            self.cursor = Cursor::Done;
            error!(
                game_id = self.game,
                answer_id = answer.id,
                error = %e,
                "Thread integrity fault"
            );
            return Err(e);
        }

        self.cursor = Cursor::After(answer.id);
        Ok(Some(answer))
    }
}

/// A player's thread with author names, as revealed at the end of a game.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerThread {
    pub player_id: PlayerId,
    pub player_name: String,
    pub entries: Vec<ThreadEntry>,
}

/// Thread reconstruction service.
pub struct ThreadReconstructor;

impl ThreadReconstructor {
    pub fn new() -> Self {
        Self
    }

    /// Start a lazy walk over the thread `origin` started in `game`.
    pub fn walk(&self, game: GameId, origin: PlayerId) -> ThreadWalk {
        ThreadWalk::new(game, origin)
    }

    /// The thread `origin` started, oldest first. Empty if they never answered round 1.
    pub async fn reconstruct(
        &self,
        store: &dyn GameStore,
        game: GameId,
        origin: PlayerId,
    ) -> Result<Vec<Answer>, DomainError> {
        let players = RingTopology::new().members(store, game).await?;
        neighbors_in(&players, game, origin)?;
        self.collect(store, game, origin).await
    }

    /// Like [`reconstruct`](Self::reconstruct), with each answer labeled by author name.
    pub async fn reconstruct_labeled(
        &self,
        store: &dyn GameStore,
        game: GameId,
        origin: PlayerId,
        names: &HashMap<PlayerId, String>,
    ) -> Result<Vec<ThreadEntry>, DomainError> {
        let answers = self.reconstruct(store, game, origin).await?;
        label_thread(answers, names)
    }

    /// Every player's thread in ring order.
    pub async fn reconstruct_all(
        &self,
        store: &dyn GameStore,
        game: GameId,
    ) -> Result<Vec<PlayerThread>, DomainError> {
        let players = RingTopology::new().members(store, game).await?;
        let names = name_lookup(&players);

        let mut threads = Vec::with_capacity(players.len());
        for player in &players {
            let answers = self.collect(store, game, player.id).await?;
            threads.push(PlayerThread {
                player_id: player.id,
                player_name: player.name.clone(),
                entries: label_thread(answers, &names)?,
            });
        }
        Ok(threads)
    }

    async fn collect(
        &self,
        store: &dyn GameStore,
        game: GameId,
        origin: PlayerId,
    ) -> Result<Vec<Answer>, DomainError> {
        let mut walk = self.walk(game, origin);
        let mut answers = Vec::new();
        while let Some(answer) = walk.next(store).await? {
            answers.push(answer);
        }
        debug!(
            game_id = game,
            origin_player_id = origin,
            hops = answers.len(),
            "Thread reconstructed"
        );
        Ok(answers)
    }
}

impl Default for ThreadReconstructor {
    fn default() -> Self {
        Self::new()
    }
}
