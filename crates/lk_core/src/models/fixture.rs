//! Fixture model: the output unit of schedule generation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque team identifier, unique within a schedule plan.
///
/// The engine never inspects the value; it only compares it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TeamId(pub u64);

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle state of a fixture.
///
/// The generator always emits `Scheduled`. The later states belong to
/// score entry and rescheduling, which happen outside the generation path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FixtureStatus {
    Scheduled,
    Completed,
    Postponed,
    Canceled,
}

/// A single scheduled match between two teams.
///
/// Immutable once produced by the generator; persistence and later
/// mutation are the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    pub home_team_id: TeamId,
    pub away_team_id: TeamId,
    /// 1-based round number.
    pub round: u32,
    pub status: FixtureStatus,
}

impl Fixture {
    pub fn new(home_team_id: TeamId, away_team_id: TeamId, round: u32) -> Self {
        Self {
            home_team_id,
            away_team_id,
            round,
            status: FixtureStatus::Scheduled,
        }
    }

    /// The participants as an unordered pair (smaller id first).
    #[inline]
    pub fn pair(&self) -> (TeamId, TeamId) {
        if self.home_team_id <= self.away_team_id {
            (self.home_team_id, self.away_team_id)
        } else {
            (self.away_team_id, self.home_team_id)
        }
    }

    #[inline]
    pub fn involves(&self, team: TeamId) -> bool {
        self.home_team_id == team || self.away_team_id == team
    }

    /// True when the two fixtures have at least one participant in common.
    #[inline]
    pub fn shares_team(&self, other: &Fixture) -> bool {
        other.involves(self.home_team_id) || other.involves(self.away_team_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_fixture_is_scheduled() {
        let fixture = Fixture::new(TeamId(1), TeamId(2), 1);
        assert_eq!(fixture.status, FixtureStatus::Scheduled);
        assert_eq!(fixture.round, 1);
    }

    #[test]
    fn test_pair_is_unordered() {
        let natural = Fixture::new(TeamId(3), TeamId(7), 1);
        let swapped = Fixture::new(TeamId(7), TeamId(3), 2);
        assert_eq!(natural.pair(), swapped.pair());
        assert_eq!(natural.pair(), (TeamId(3), TeamId(7)));
    }

    #[test]
    fn test_involves() {
        let fixture = Fixture::new(TeamId(1), TeamId(2), 1);
        assert!(fixture.involves(TeamId(1)));
        assert!(fixture.involves(TeamId(2)));
        assert!(!fixture.involves(TeamId(3)));
    }

    #[test]
    fn test_shares_team() {
        let a = Fixture::new(TeamId(1), TeamId(2), 1);
        let b = Fixture::new(TeamId(2), TeamId(3), 1);
        let c = Fixture::new(TeamId(3), TeamId(4), 1);
        assert!(a.shares_team(&b), "fixtures with a common team should clash");
        assert!(!a.shares_team(&c), "disjoint fixtures should not clash");
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&FixtureStatus::Scheduled).unwrap();
        assert_eq!(json, "\"scheduled\"");
    }

    #[test]
    fn test_team_id_serializes_transparent() {
        let json = serde_json::to_string(&TeamId(42)).unwrap();
        assert_eq!(json, "42");
    }
}
