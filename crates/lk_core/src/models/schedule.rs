//! Schedule model: the structured result of a generation run.

use serde::{Deserialize, Serialize};

use super::fixture::Fixture;

/// Output of a full schedule generation run.
///
/// Fixtures are grouped by round in ascending round order; within each
/// round they appear in the published (shuffled) order. `degraded_rounds`
/// lists rounds whose ordering still violated the adjacency constraint
/// when the retry budget ran out, so callers can observe the soft failure
/// without scraping logs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    pub fixtures: Vec<Fixture>,
    pub degraded_rounds: Vec<u32>,
}

impl Schedule {
    #[inline]
    pub fn is_degraded(&self) -> bool {
        !self.degraded_rounds.is_empty()
    }

    #[inline]
    pub fn fixture_count(&self) -> usize {
        self.fixtures.len()
    }

    /// All fixtures belonging to one round, in published order.
    pub fn fixtures_for_round(&self, round: u32) -> impl Iterator<Item = &Fixture> {
        self.fixtures.iter().filter(move |f| f.round == round)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixture::TeamId;

    #[test]
    fn test_degraded_flag() {
        let clean = Schedule { fixtures: Vec::new(), degraded_rounds: Vec::new() };
        assert!(!clean.is_degraded());

        let degraded = Schedule { fixtures: Vec::new(), degraded_rounds: vec![2] };
        assert!(degraded.is_degraded());
    }

    #[test]
    fn test_fixtures_for_round_filters() {
        let schedule = Schedule {
            fixtures: vec![
                Fixture::new(TeamId(1), TeamId(2), 1),
                Fixture::new(TeamId(2), TeamId(1), 2),
                Fixture::new(TeamId(1), TeamId(3), 1),
            ],
            degraded_rounds: Vec::new(),
        };

        let round1: Vec<_> = schedule.fixtures_for_round(1).collect();
        assert_eq!(round1.len(), 2);
        assert!(round1.iter().all(|f| f.round == 1));
        assert_eq!(schedule.fixtures_for_round(3).count(), 0);
    }
}
