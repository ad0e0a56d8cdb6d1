//! Property tests for ring neighbours and round parity (pure domain, no DB).
//!
//! - predecessor(i) = members[(i - 1 + N) mod N]
//! - successor(i) = members[(i + 1) mod N]
//! - predecessor and successor are inverse relations
//! - odd rounds take text, even rounds take images

use proptest::prelude::*;

use crate::domain::payload::AnswerPayload;
use crate::domain::ring::Ring;
use crate::domain::rounds::{AnswerKind, Round};
use crate::domain::test_gens;

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    }
}

proptest! {
    #![proptest_config(config())]

    #[test]
    fn prop_neighbors_follow_modular_arithmetic(
        (n, i) in test_gens::ring_size().prop_flat_map(|n| (Just(n), 0..n)),
    ) {
        let members: Vec<usize> = (0..n).collect();
        let ring = Ring::new(&members);
        let neighbors = ring.neighbors_at(i).unwrap();

        prop_assert_eq!(*neighbors.predecessor, (i + n - 1) % n);
        prop_assert_eq!(*neighbors.successor, (i + 1) % n);
    }

    #[test]
    fn prop_successor_of_predecessor_is_self(
        (n, i) in test_gens::ring_size().prop_flat_map(|n| (Just(n), 0..n)),
    ) {
        let members: Vec<usize> = (0..n).collect();
        let ring = Ring::new(&members);
        let pred = *ring.neighbors_at(i).unwrap().predecessor;
        let back = *ring.neighbors_at(pred).unwrap().successor;
        prop_assert_eq!(back, i);
    }

    #[test]
    fn prop_ring_of_one_is_its_own_neighbor(id in any::<i64>()) {
        let members = [id];
        let neighbors = Ring::new(&members).neighbors_of(|m| *m == id).unwrap();
        prop_assert_eq!(*neighbors.predecessor, id);
        prop_assert_eq!(*neighbors.successor, id);
    }

    #[test]
    fn prop_non_member_has_no_neighbors(n in test_gens::ring_size()) {
        let members: Vec<usize> = (0..n).collect();
        prop_assert!(Ring::new(&members).neighbors_of(|m| *m == n).is_none());
        prop_assert!(Ring::new(&members).neighbors_at(n).is_none());
    }

    #[test]
    fn prop_parity_alternates(round in test_gens::round()) {
        let expected = if round.get() % 2 == 1 { AnswerKind::Text } else { AnswerKind::Image };
        prop_assert_eq!(round.expected_kind(), expected);
        prop_assert_ne!(round.expected_kind(), round.next().expected_kind());
        if let Some(prev) = round.previous() {
            prop_assert_eq!(prev.next(), round);
        }
    }

    #[test]
    fn prop_generated_payloads_validate(
        (round, payload) in test_gens::round()
            .prop_flat_map(|r| (Just(r), test_gens::valid_payload_for(r))),
    ) {
        prop_assert!(payload.validate_for(round).is_ok());
        let restored = AnswerPayload::from_stored(round, payload.content().to_string());
        prop_assert_eq!(restored, payload);
    }

    #[test]
    fn prop_wrong_kind_is_rejected(round in test_gens::round()) {
        let wrong = match round.expected_kind() {
            AnswerKind::Text => AnswerPayload::image("images/x.png"),
            AnswerKind::Image => AnswerPayload::text("a cat"),
        };
        prop_assert!(wrong.validate_for(round).is_err());
    }
}

#[test]
fn round_one_has_no_previous() {
    assert_eq!(Round::FIRST.previous(), None);
}
