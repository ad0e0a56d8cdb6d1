//! Racing submissions for the same (player, round): exactly one wins.

use std::sync::Arc;

use futures_util::future::join_all;
use telepic_backend::db::txn::with_txn;
use telepic_backend::errors::domain::{ConflictKind, DomainError};
use telepic_backend::errors::ErrorCode;
use telepic_backend::services::{ChainLinker, RecordAnswer};
use telepic_backend::store::{GameStore, MemoryStore, SeaStore};

use crate::support::build_test_state;
use crate::support::factory::{answer, payload_for, round, seed_ring};

const ATTEMPTS: usize = 8;

#[tokio::test]
async fn concurrent_transactions_record_one_answer() -> Result<(), Box<dyn std::error::Error>> {
    let test_db = build_test_state().await?;
    let (game, players) = {
        let store = SeaStore::new(test_db.db());
        let (game, players) = seed_ring(&store, "G", &["Alice", "Bob", "Carol"]).await?;
        answer(&store, &players[1], 1, "a dog barking", None).await?;
        (game, players)
    };
    let carol = players[2].clone();
    let bobs = SeaStore::new(test_db.db())
        .find_answer(game.id, players[1].id, round(1))
        .await?
        .expect("Bob answered round 1");

    let attempts = (0..ATTEMPTS).map(|i| {
        let request = RecordAnswer {
            game: game.id,
            player: carol.id,
            round: round(2),
            payload: payload_for(round(2), &format!("images/dog-{i}.png")),
            in_reply_to: Some(bobs.id),
        };
        with_txn(&test_db.state, move |txn| {
            Box::pin(async move {
                Ok(ChainLinker::new()
                    .record_answer(&SeaStore::new(txn), request)
                    .await?)
            })
        })
    });
    let results = join_all(attempts).await;

    let wins = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(wins, 1, "results: {results:?}");
    for err in results.iter().filter_map(|r| r.as_ref().err()) {
        assert_eq!(err.code(), ErrorCode::AlreadyAnswered, "got {err:?}");
    }

    let stored = SeaStore::new(test_db.db())
        .find_answer(game.id, carol.id, round(2))
        .await?;
    assert!(stored.is_some());
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_tasks_on_memory_store_record_one_answer(
) -> Result<(), Box<dyn std::error::Error>> {
    let store = Arc::new(MemoryStore::new());
    let (game, players) = seed_ring(store.as_ref(), "G", &["Alice", "Bob"]).await?;
    let alice = players[0].clone();

    let handles: Vec<_> = (0..ATTEMPTS)
        .map(|i| {
            let store = Arc::clone(&store);
            let request = RecordAnswer {
                game: game.id,
                player: alice.id,
                round: round(1),
                payload: payload_for(round(1), &format!("drawing {i}")),
                in_reply_to: None,
            };
            tokio::spawn(async move {
                ChainLinker::new()
                    .record_answer(store.as_ref(), request)
                    .await
            })
        })
        .collect();

    let mut wins = 0;
    for handle in handles {
        match handle.await? {
            Ok(_) => wins += 1,
            Err(DomainError::Conflict(ConflictKind::AlreadyAnswered, _)) => {}
            Err(other) => panic!("unexpected error: {other:?}"),
        }
    }
    assert_eq!(wins, 1);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_joins_get_distinct_positions() -> Result<(), Box<dyn std::error::Error>> {
    let store = Arc::new(MemoryStore::new());
    let (game, _) = seed_ring(store.as_ref(), "G", &[]).await?;

    let handles: Vec<_> = (0..ATTEMPTS)
        .map(|i| {
            let store = Arc::clone(&store);
            tokio::spawn(async move { store.insert_player(game.id, &format!("p{i}")).await })
        })
        .collect();
    for handle in handles {
        handle.await??;
    }

    let mut positions: Vec<i32> = store
        .list_players(game.id)
        .await?
        .iter()
        .map(|p| p.ring_position)
        .collect();
    positions.dedup();
    assert_eq!(positions, (0..ATTEMPTS as i32).collect::<Vec<_>>());
    Ok(())
}
