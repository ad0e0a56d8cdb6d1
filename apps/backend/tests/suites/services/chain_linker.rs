use telepic_backend::domain::turn::PredecessorLink;
use telepic_backend::domain::AnswerPayload;
use telepic_backend::errors::domain::{ConflictKind, DomainError, NotFoundKind, ValidationKind};
use telepic_backend::services::{ChainLinker, RecordAnswer};
use telepic_backend::store::{GameStore, SeaStore};

use crate::support::build_test_state;
use crate::support::factory::{answer, round, seed_ring};

#[tokio::test]
async fn round_one_needs_no_predecessor() -> Result<(), Box<dyn std::error::Error>> {
    let test_db = build_test_state().await?;
    let store = SeaStore::new(test_db.db());
    let (game, players) = seed_ring(&store, "G", &["Alice", "Bob"]).await?;

    let link = ChainLinker::new()
        .required_predecessor_answer(&store, game.id, players[0].id, round(1))
        .await?;
    assert_eq!(link, PredecessorLink::NotRequired);
    Ok(())
}

#[tokio::test]
async fn link_tracks_predecessor_progress() -> Result<(), Box<dyn std::error::Error>> {
    let test_db = build_test_state().await?;
    let store = SeaStore::new(test_db.db());
    let (game, players) = seed_ring(&store, "G", &["Alice", "Bob", "Carol"]).await?;
    let (bob, carol) = (&players[1], &players[2]);
    let linker = ChainLinker::new();

    let link = linker
        .required_predecessor_answer(&store, game.id, carol.id, round(2))
        .await?;
    match &link {
        PredecessorLink::NotYetAvailable { predecessor } => assert_eq!(predecessor.id, bob.id),
        other => panic!("expected NotYetAvailable, got {other:?}"),
    }

    let bobs = answer(&store, bob, 1, "a dog barking", None).await?;
    let link = linker
        .required_predecessor_answer(&store, game.id, carol.id, round(2))
        .await?;
    assert_eq!(link.required_reply_target(), Some(bobs.id));
    assert_eq!(link.answer(), Some(&bobs));
    Ok(())
}

#[tokio::test]
async fn second_answer_for_round_conflicts() -> Result<(), Box<dyn std::error::Error>> {
    let test_db = build_test_state().await?;
    let store = SeaStore::new(test_db.db());
    let (_, players) = seed_ring(&store, "G", &["Alice", "Bob", "Carol"]).await?;
    let (bob, carol) = (&players[1], &players[2]);

    let b1 = answer(&store, bob, 1, "a dog barking", None).await?;
    let first = answer(&store, carol, 2, "images/dog.png", Some(b1.id)).await?;

    let err = answer(&store, carol, 2, "images/other.png", Some(b1.id))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Conflict(ConflictKind::AlreadyAnswered, _)
    ));

    // The first answer is untouched.
    let stored = store.find_answer(carol.game_id, carol.id, round(2)).await?;
    assert_eq!(stored, Some(first));
    Ok(())
}

#[tokio::test]
async fn wrong_reply_target_is_invalid_link() -> Result<(), Box<dyn std::error::Error>> {
    let test_db = build_test_state().await?;
    let store = SeaStore::new(test_db.db());
    let (_, players) = seed_ring(&store, "G", &["Alice", "Bob", "Carol"]).await?;
    let (alice, bob, carol) = (&players[0], &players[1], &players[2]);

    let a1 = answer(&store, alice, 1, "a cat eating", None).await?;
    let b1 = answer(&store, bob, 1, "a dog barking", None).await?;

    // Carol follows Bob, not Alice.
    let err = answer(&store, carol, 2, "images/cat.png", Some(a1.id))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidLink(_)), "got {err:?}");

    let err = answer(&store, carol, 2, "images/dog.png", None)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidLink(_)), "got {err:?}");

    let ok = answer(&store, carol, 2, "images/dog.png", Some(b1.id)).await?;
    assert_eq!(ok.in_reply_to, Some(b1.id));
    Ok(())
}

#[tokio::test]
async fn replying_before_predecessor_answers_is_invalid_link(
) -> Result<(), Box<dyn std::error::Error>> {
    let test_db = build_test_state().await?;
    let store = SeaStore::new(test_db.db());
    let (_, players) = seed_ring(&store, "G", &["Alice", "Bob"]).await?;
    let (alice, bob) = (&players[0], &players[1]);

    let a1 = answer(&store, alice, 1, "a cat eating", None).await?;

    // Alice's predecessor is Bob, who hasn't answered round 1 yet.
    let err = answer(&store, alice, 2, "images/cat.png", Some(a1.id))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidLink(_)), "got {err:?}");

    let b1 = answer(&store, bob, 1, "a dog barking", None).await?;
    answer(&store, alice, 2, "images/dog.png", Some(b1.id)).await?;
    Ok(())
}

#[tokio::test]
async fn round_one_with_reply_target_is_invalid_link() -> Result<(), Box<dyn std::error::Error>> {
    let test_db = build_test_state().await?;
    let store = SeaStore::new(test_db.db());
    let (_, players) = seed_ring(&store, "G", &["Alice", "Bob"]).await?;

    let b1 = answer(&store, &players[1], 1, "a dog barking", None).await?;
    let err = answer(&store, &players[0], 1, "a cat eating", Some(b1.id))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidLink(_)), "got {err:?}");
    Ok(())
}

#[tokio::test]
async fn payload_kind_must_match_round() -> Result<(), Box<dyn std::error::Error>> {
    let test_db = build_test_state().await?;
    let store = SeaStore::new(test_db.db());
    let (game, players) = seed_ring(&store, "G", &["Alice"]).await?;
    let alice = &players[0];

    let err = ChainLinker::new()
        .record_answer(
            &store,
            RecordAnswer {
                game: game.id,
                player: alice.id,
                round: round(1),
                payload: AnswerPayload::image("images/cat.png"),
                in_reply_to: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::PayloadKindMismatch, _)
    ));
    Ok(())
}

#[tokio::test]
async fn ring_of_one_replies_to_itself() -> Result<(), Box<dyn std::error::Error>> {
    let test_db = build_test_state().await?;
    let store = SeaStore::new(test_db.db());
    let (_, players) = seed_ring(&store, "Solo", &["Alice"]).await?;
    let alice = &players[0];

    let a1 = answer(&store, alice, 1, "a cat eating", None).await?;
    let a2 = answer(&store, alice, 2, "images/cat.png", Some(a1.id)).await?;
    let a3 = answer(&store, alice, 3, "a cat on a plate", Some(a2.id)).await?;
    assert_eq!(a3.in_reply_to, Some(a2.id));
    Ok(())
}

#[tokio::test]
async fn unknown_player_is_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let test_db = build_test_state().await?;
    let store = SeaStore::new(test_db.db());
    let (game, _) = seed_ring(&store, "G", &["Alice"]).await?;

    let err = ChainLinker::new()
        .required_predecessor_answer(&store, game.id, 4_242, round(2))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(NotFoundKind::Player, _)));
    Ok(())
}
