//! Constrained reordering of a round's fixtures.
//!
//! The constraint is presentational: no team should appear in two adjacent
//! slots of the published order. It is soft. Randomized search runs under a
//! fixed retry budget and falls back to the last permutation when the
//! budget is spent; exhaustion is reported to the caller, never raised as
//! an error.
//!
//! For some rosters no clash-free ordering of a full round exists at all
//! (three teams produce three fixtures that pairwise share a team), so the
//! fallback path is a legitimate outcome, not a bug.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::Fixture;

/// Retry budget for the randomized search.
pub const MAX_SHUFFLE_ATTEMPTS: u32 = 1000;

/// True when any two adjacent fixtures share a team.
#[inline]
pub fn has_adjacent_clash(fixtures: &[Fixture]) -> bool {
    fixtures.windows(2).any(|pair| pair[0].shares_team(&pair[1]))
}

/// Reorder a round's fixtures so that no team plays in two consecutive
/// slots, if the retry budget allows.
///
/// Each attempt shuffles a fresh copy of the original order, not the
/// previous failed permutation, so every attempt draws from the uniform
/// distribution over permutations. Returns the ordering together with a
/// flag that is true when the budget ran out with a clash still present.
pub fn shuffle_round<R: Rng>(original: &[Fixture], rng: &mut R) -> (Vec<Fixture>, bool) {
    let mut ordered = original.to_vec();
    let mut attempts = 0u32;

    while has_adjacent_clash(&ordered) {
        if attempts >= MAX_SHUFFLE_ATTEMPTS {
            return (ordered, true);
        }
        ordered = original.to_vec();
        ordered.shuffle(rng);
        attempts += 1;
    }

    (ordered, false)
}
