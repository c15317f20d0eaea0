use std::collections::HashSet;

use gifted::error::GiftedError;
use gifted::model::{Id, Participant};
use gifted::pairing::{self, Assignments};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn ids(n: usize) -> Vec<Id<Participant>> {
    (0..n).map(|_| Id::generate()).collect()
}

fn assert_derangement(participants: &[Id<Participant>], assignments: &Assignments) {
    assert_eq!(assignments.len(), participants.len());

    let mut giftees = HashSet::new();
    for gifter in participants {
        let giftee = assignments
            .get(gifter)
            .unwrap_or_else(|| panic!("no giftee assigned for {}", gifter));
        assert_ne!(giftee, gifter, "self-pair for {}", gifter);
        assert!(giftees.insert(*giftee), "giftee {} assigned twice", giftee);
    }

    // Every participant received a gift exactly once.
    let expected: HashSet<_> = participants.iter().copied().collect();
    assert_eq!(giftees, expected);
}

// ==========================================================================
// DERANGEMENT PROPERTIES
// ==========================================================================

#[test]
fn every_size_yields_a_derangement_repeatedly() {
    let mut rng = rand::thread_rng();
    for n in [2usize, 3, 4, 5, 8, 13, 50, 300] {
        let participants = ids(n);
        for _ in 0..40 {
            let assignments = pairing::generate(&participants, &mut rng).unwrap();
            assert_derangement(&participants, &assignments);
            assert!(pairing::is_derangement(&participants, &assignments));
        }
    }
}

#[test]
fn seeded_sweep_over_small_sizes() {
    for n in 2..=64usize {
        let participants = ids(n);
        let mut rng = StdRng::seed_from_u64(n as u64);
        let assignments = pairing::generate(&participants, &mut rng).unwrap();
        assert_derangement(&participants, &assignments);
    }
}

#[test]
fn two_participants_deterministically_swap() {
    let pair = ids(2);
    let mut rng = rand::thread_rng();
    for _ in 0..200 {
        let assignments = pairing::generate(&pair, &mut rng).unwrap();
        assert_eq!(assignments[&pair[0]], pair[1]);
        assert_eq!(assignments[&pair[1]], pair[0]);
    }
}

#[test]
fn four_participants_end_to_end() {
    let participants = ids(4);
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..100 {
        let assignments = pairing::generate(&participants, &mut rng).unwrap();
        assert_derangement(&participants, &assignments);
    }
}

#[test]
fn same_seed_reproduces_the_mapping() {
    let participants = ids(25);
    let first = pairing::generate(&participants, &mut StdRng::seed_from_u64(99)).unwrap();
    let second = pairing::generate(&participants, &mut StdRng::seed_from_u64(99)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn all_giftees_reachable_over_many_runs() {
    // Statistical: with three participants each gifter has two possible
    // giftees; over enough runs both must appear.
    let participants = ids(3);
    let mut rng = rand::thread_rng();

    let mut seen: HashSet<(Id<Participant>, Id<Participant>)> = HashSet::new();
    for _ in 0..500 {
        let assignments = pairing::generate(&participants, &mut rng).unwrap();
        for (gifter, giftee) in &assignments {
            seen.insert((*gifter, *giftee));
        }
    }

    // 3 gifters x 2 legal giftees each.
    assert_eq!(seen.len(), 6);
}

// ==========================================================================
// PRECONDITIONS
// ==========================================================================

#[test]
fn empty_input_is_rejected() {
    let mut rng = rand::thread_rng();
    let result = pairing::generate(&[], &mut rng);
    assert!(matches!(
        result,
        Err(GiftedError::TooFewParticipants { count: 0 })
    ));
}

#[test]
fn single_participant_is_rejected() {
    let mut rng = rand::thread_rng();
    let result = pairing::generate(&ids(1), &mut rng);
    assert!(matches!(
        result,
        Err(GiftedError::TooFewParticipants { count: 1 })
    ));
}

#[test]
fn duplicate_participant_is_rejected() {
    let mut input = ids(4);
    input.push(input[1]);
    let mut rng = rand::thread_rng();
    let result = pairing::generate(&input, &mut rng);
    assert!(matches!(
        result,
        Err(GiftedError::DuplicateParticipant { .. })
    ));
}

#[test]
fn invalid_input_consumes_no_randomness() {
    // Precondition failures must happen before the RNG is touched: a valid
    // call after a failed one sees the same stream as a fresh seed.
    let participants = ids(10);
    let mut rng = StdRng::seed_from_u64(5);
    let _ = pairing::generate(&ids(1), &mut rng);
    let after_failure = pairing::generate(&participants, &mut rng).unwrap();

    let fresh = pairing::generate(&participants, &mut StdRng::seed_from_u64(5)).unwrap();
    assert_eq!(after_failure, fresh);
}
