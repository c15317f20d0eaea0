use std::collections::{HashMap, HashSet};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{GiftedError, GiftedResult};
use crate::model::{Id, Participant};

/// Gifter-to-giftee mapping produced by [`generate`].
pub type Assignments = HashMap<Id<Participant>, Id<Participant>>;

/// Upper bound on shuffle restarts. A restart happens with probability at
/// most 1/N per attempt, so hitting this bound means the RNG is broken.
pub const MAX_ATTEMPTS: usize = 64;

/// Produce a random derangement of `participants`: every participant is
/// assigned exactly one giftee, every participant is a giftee exactly once,
/// and nobody is assigned to themself.
///
/// Pure apart from the caller-supplied RNG; fails before consuming any
/// randomness if the input has fewer than 2 entries or contains duplicates.
pub fn generate<R: Rng + ?Sized>(
    participants: &[Id<Participant>],
    rng: &mut R,
) -> GiftedResult<Assignments> {
    validate(participants)?;

    for _ in 0..MAX_ATTEMPTS {
        let mut candidates = participants.to_vec();
        candidates.shuffle(rng);

        // The consumption loop below only special-cases the top of the
        // candidate stack, so the one layout it cannot fix is the final
        // gifter facing the bottom candidate. Reject and reshuffle.
        if participants.last() == candidates.first() {
            continue;
        }

        let mut assignments = Assignments::with_capacity(participants.len());
        for &gifter in participants {
            // Pop the top of the stack, or the one beneath it when the top
            // is the gifter themself. Earlier positions can never be forced
            // into a self-pair: a gifter is only compared against the
            // current top, and the bottom candidate (the last one standing)
            // was checked against the final gifter above.
            let top = candidates.len() - 1;
            let take = if candidates[top] == gifter { top - 1 } else { top };
            assignments.insert(gifter, candidates.remove(take));
        }
        return Ok(assignments);
    }

    Err(GiftedError::ShuffleExhausted {
        attempts: MAX_ATTEMPTS,
    })
}

/// True if `assignments` is a fixed-point-free permutation of `participants`.
pub fn is_derangement(participants: &[Id<Participant>], assignments: &Assignments) -> bool {
    if assignments.len() != participants.len() {
        return false;
    }
    let mut giftees = HashSet::with_capacity(participants.len());
    for &gifter in participants {
        match assignments.get(&gifter) {
            Some(&giftee) if giftee != gifter => {
                if !giftees.insert(giftee) {
                    return false;
                }
            }
            _ => return false,
        }
    }
    giftees.len() == participants.len()
}

fn validate(participants: &[Id<Participant>]) -> GiftedResult<()> {
    if participants.len() < 2 {
        return Err(GiftedError::TooFewParticipants {
            count: participants.len(),
        });
    }
    let mut seen = HashSet::with_capacity(participants.len());
    for id in participants {
        if !seen.insert(id) {
            return Err(GiftedError::DuplicateParticipant { id: id.to_string() });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn ids(n: usize) -> Vec<Id<Participant>> {
        (0..n).map(|_| Id::generate()).collect()
    }

    #[test]
    fn two_participants_always_swap() {
        let pair = ids(2);
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let result = generate(&pair, &mut rng).unwrap();
            assert_eq!(result[&pair[0]], pair[1]);
            assert_eq!(result[&pair[1]], pair[0]);
        }
    }

    #[test]
    fn rejects_empty_input() {
        let mut rng = rand::thread_rng();
        assert!(matches!(
            generate(&[], &mut rng),
            Err(GiftedError::TooFewParticipants { count: 0 })
        ));
    }

    #[test]
    fn rejects_single_participant() {
        let mut rng = rand::thread_rng();
        assert!(matches!(
            generate(&ids(1), &mut rng),
            Err(GiftedError::TooFewParticipants { count: 1 })
        ));
    }

    #[test]
    fn rejects_duplicate_participant() {
        let mut input = ids(3);
        input.push(input[0]);
        let mut rng = rand::thread_rng();
        assert!(matches!(
            generate(&input, &mut rng),
            Err(GiftedError::DuplicateParticipant { .. })
        ));
    }

    #[test]
    fn same_seed_same_assignments() {
        let participants = ids(10);
        let first = generate(&participants, &mut StdRng::seed_from_u64(42)).unwrap();
        let second = generate(&participants, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn is_derangement_rejects_fixed_point() {
        let participants = ids(3);
        let mut bogus = Assignments::new();
        bogus.insert(participants[0], participants[0]);
        bogus.insert(participants[1], participants[2]);
        bogus.insert(participants[2], participants[1]);
        assert!(!is_derangement(&participants, &bogus));
    }

    #[test]
    fn is_derangement_rejects_repeated_giftee() {
        let participants = ids(3);
        let mut bogus = Assignments::new();
        bogus.insert(participants[0], participants[1]);
        bogus.insert(participants[1], participants[2]);
        bogus.insert(participants[2], participants[1]);
        assert!(!is_derangement(&participants, &bogus));
    }
}
