use telepic_backend::errors::domain::{DomainError, NotFoundKind};
use telepic_backend::services::RingTopology;
use telepic_backend::store::SeaStore;

use crate::support::build_test_state;
use crate::support::factory::seed_ring;

#[tokio::test]
async fn three_player_ring_neighbors() -> Result<(), Box<dyn std::error::Error>> {
    let test_db = build_test_state().await?;
    let store = SeaStore::new(test_db.db());
    let (game, players) = seed_ring(&store, "G", &["Alice", "Bob", "Carol"]).await?;
    let topology = RingTopology::new();

    let expected = [("Carol", "Bob"), ("Alice", "Carol"), ("Bob", "Alice")];
    for (player, (pred, succ)) in players.iter().zip(expected) {
        let n = topology.neighbors(&store, game.id, player.id).await?;
        assert_eq!(n.predecessor.name, pred, "predecessor of {}", player.name);
        assert_eq!(n.successor.name, succ, "successor of {}", player.name);
    }
    Ok(())
}

#[tokio::test]
async fn ring_order_is_join_order_not_id_order() -> Result<(), Box<dyn std::error::Error>> {
    let test_db = build_test_state().await?;
    let store = SeaStore::new(test_db.db());

    // Interleave joins across two games so ids are not contiguous per game.
    let (g1, _) = seed_ring(&store, "one", &[]).await?;
    let (g2, _) = seed_ring(&store, "two", &[]).await?;
    let service = telepic_backend::services::GameService::new();
    let a = service.join_game(&store, g1.id, "Alice").await?;
    service.join_game(&store, g2.id, "Xavier").await?;
    let b = service.join_game(&store, g1.id, "Bob").await?;

    let ring = service.list_players(&store, g1.id).await?;
    let ids: Vec<_> = ring.iter().map(|p| p.id).collect();
    assert_eq!(ids, [a.id, b.id]);
    assert_eq!(
        ring.iter().map(|p| p.ring_position).collect::<Vec<_>>(),
        [0, 1]
    );
    Ok(())
}

#[tokio::test]
async fn player_from_another_game_is_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let test_db = build_test_state().await?;
    let store = SeaStore::new(test_db.db());
    let (g1, _) = seed_ring(&store, "one", &["Alice"]).await?;
    let (_, others) = seed_ring(&store, "two", &["Xavier"]).await?;

    let err = RingTopology::new()
        .neighbors(&store, g1.id, others[0].id)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(NotFoundKind::Player, _)));
    Ok(())
}
