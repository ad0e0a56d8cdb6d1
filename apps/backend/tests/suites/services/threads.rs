use telepic_backend::domain::thread::name_lookup;
use telepic_backend::domain::AnswerPayload;
use telepic_backend::errors::domain::{DomainError, NotFoundKind};
use telepic_backend::services::{GameService, ThreadReconstructor};
use telepic_backend::store::SeaStore;

use crate::support::build_test_state;
use crate::support::factory::{answer, seed_ring};

#[tokio::test]
async fn thread_follows_reply_links_across_the_ring() -> Result<(), Box<dyn std::error::Error>> {
    let test_db = build_test_state().await?;
    let store = SeaStore::new(test_db.db());
    let (game, players) = seed_ring(&store, "G", &["X", "Y", "Z"]).await?;
    let (x, y, z) = (&players[0], &players[1], &players[2]);

    let a1 = answer(&store, x, 1, "a cat eating", None).await?;
    let a2 = answer(&store, y, 2, "images/cat.png", Some(a1.id)).await?;
    let a3 = answer(&store, z, 3, "a cat at dinner", Some(a2.id)).await?;

    let thread = ThreadReconstructor::new()
        .reconstruct(&store, game.id, x.id)
        .await?;
    assert_eq!(thread, vec![a1, a2, a3]);
    Ok(())
}

#[tokio::test]
async fn thread_stops_at_current_end() -> Result<(), Box<dyn std::error::Error>> {
    let test_db = build_test_state().await?;
    let store = SeaStore::new(test_db.db());
    let (game, players) = seed_ring(&store, "G", &["X", "Y", "Z"]).await?;

    let a1 = answer(&store, &players[0], 1, "a cat eating", None).await?;
    // Y's own round-1 answer starts a different thread.
    answer(&store, &players[1], 1, "a dog barking", None).await?;

    let reconstructor = ThreadReconstructor::new();
    let thread = reconstructor.reconstruct(&store, game.id, players[0].id).await?;
    assert_eq!(thread, vec![a1]);

    let thread = reconstructor.reconstruct(&store, game.id, players[2].id).await?;
    assert!(thread.is_empty());
    Ok(())
}

#[tokio::test]
async fn lazy_walk_yields_one_hop_at_a_time() -> Result<(), Box<dyn std::error::Error>> {
    let test_db = build_test_state().await?;
    let store = SeaStore::new(test_db.db());
    let (game, players) = seed_ring(&store, "G", &["X", "Y"]).await?;

    let a1 = answer(&store, &players[0], 1, "a cat eating", None).await?;
    let a2 = answer(&store, &players[1], 2, "images/cat.png", Some(a1.id)).await?;

    let mut walk = ThreadReconstructor::new().walk(game.id, players[0].id);
    assert_eq!(walk.next(&store).await?.map(|a| a.id), Some(a1.id));
    assert_eq!(walk.next(&store).await?.map(|a| a.id), Some(a2.id));
    assert!(walk.next(&store).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn labeled_thread_names_each_author() -> Result<(), Box<dyn std::error::Error>> {
    let test_db = build_test_state().await?;
    let store = SeaStore::new(test_db.db());
    let (game, players) = seed_ring(&store, "G", &["X", "Y", "Z"]).await?;
    let (x, y, z) = (&players[0], &players[1], &players[2]);

    let a1 = answer(&store, x, 1, "a cat eating", None).await?;
    let a2 = answer(&store, y, 2, "images/cat.png", Some(a1.id)).await?;
    answer(&store, z, 3, "a cat at dinner", Some(a2.id)).await?;

    let names = name_lookup(&players);
    let entries = ThreadReconstructor::new()
        .reconstruct_labeled(&store, game.id, x.id, &names)
        .await?;

    let labels: Vec<(&str, u32)> = entries
        .iter()
        .map(|e| (e.player_name.as_str(), e.round.get()))
        .collect();
    assert_eq!(labels, [("X", 1), ("Y", 2), ("Z", 3)]);
    assert_eq!(entries[1].payload, AnswerPayload::image("images/cat.png"));
    Ok(())
}

#[tokio::test]
async fn every_thread_in_ring_order() -> Result<(), Box<dyn std::error::Error>> {
    let test_db = build_test_state().await?;
    let store = SeaStore::new(test_db.db());
    let (game, players) = seed_ring(&store, "G", &["X", "Y"]).await?;
    let (x, y) = (&players[0], &players[1]);

    let x1 = answer(&store, x, 1, "a cat eating", None).await?;
    let y1 = answer(&store, y, 1, "a dog barking", None).await?;
    answer(&store, y, 2, "images/cat.png", Some(x1.id)).await?;
    answer(&store, x, 2, "images/dog.png", Some(y1.id)).await?;

    let threads = ThreadReconstructor::new()
        .reconstruct_all(&store, game.id)
        .await?;
    assert_eq!(threads.len(), 2);

    assert_eq!(threads[0].player_name, "X");
    let authors: Vec<_> = threads[0].entries.iter().map(|e| e.player_name.as_str()).collect();
    assert_eq!(authors, ["X", "Y"]);

    assert_eq!(threads[1].player_name, "Y");
    let authors: Vec<_> = threads[1].entries.iter().map(|e| e.player_name.as_str()).collect();
    assert_eq!(authors, ["Y", "X"]);
    Ok(())
}

#[tokio::test]
async fn late_joiner_has_empty_thread() -> Result<(), Box<dyn std::error::Error>> {
    let test_db = build_test_state().await?;
    let store = SeaStore::new(test_db.db());
    let (game, players) = seed_ring(&store, "G", &["X"]).await?;
    answer(&store, &players[0], 1, "a cat eating", None).await?;

    let late = GameService::new().join_game(&store, game.id, "W").await?;
    let threads = ThreadReconstructor::new()
        .reconstruct_all(&store, game.id)
        .await?;
    let last = threads.last().expect("two threads");
    assert_eq!(last.player_id, late.id);
    assert!(last.entries.is_empty());
    Ok(())
}

#[tokio::test]
async fn non_member_origin_is_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let test_db = build_test_state().await?;
    let store = SeaStore::new(test_db.db());
    let (game, _) = seed_ring(&store, "G", &["X"]).await?;

    let err = ThreadReconstructor::new()
        .reconstruct(&store, game.id, 77_777)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(NotFoundKind::Player, _)));
    Ok(())
}
