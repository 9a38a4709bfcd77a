//! Schedule generation engine.
//!
//! Drives generation across all requested rounds: pairings come from
//! [`pairing::round_pairings`], the published order from
//! [`shuffle::shuffle_round`]. The whole run is synchronous, CPU-bound
//! in-memory computation with no I/O; the only resource is the bounded
//! shuffle budget per round.

pub mod pairing;
pub mod shuffle;


pub use pairing::{fixtures_per_round, round_pairings};
pub use shuffle::{has_adjacent_clash, shuffle_round, MAX_SHUFFLE_ATTEMPTS};

use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::warn;

use crate::error::{Result, ScheduleError};
use crate::models::{Schedule, TeamId};

/// Input to a schedule generation run.
#[derive(Debug, Clone)]
pub struct SchedulePlan {
    /// Roster of at least two distinct teams, in caller-supplied order.
    pub teams: Vec<TeamId>,
    /// Number of single round-robins to generate, at least 1.
    pub total_rounds: u32,
    /// RNG seed. `None` draws a fresh seed, so re-running the same plan
    /// produces a differently ordered (but set-equal) schedule.
    pub seed: Option<u64>,
}

impl SchedulePlan {
    pub fn new(teams: Vec<TeamId>, total_rounds: u32) -> Self {
        Self { teams, total_rounds, seed: None }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Round-robin schedule generator.
///
/// Construction validates the plan; [`ScheduleEngine::generate`] itself
/// cannot fail. Retry-budget exhaustion in a round is reported through
/// [`Schedule::degraded_rounds`] and a warning log, never as an error.
#[derive(Debug)]
pub struct ScheduleEngine {
    teams: Vec<TeamId>,
    total_rounds: u32,
    seed_used: u64,
    rng: ChaCha8Rng,
}

impl ScheduleEngine {
    pub fn new(plan: SchedulePlan) -> Result<Self> {
        if plan.teams.len() < 2 {
            return Err(ScheduleError::TooFewTeams { found: plan.teams.len() });
        }

        let mut seen: HashSet<TeamId> = HashSet::with_capacity(plan.teams.len());
        for team in &plan.teams {
            if !seen.insert(*team) {
                return Err(ScheduleError::DuplicateTeam(*team));
            }
        }

        if plan.total_rounds == 0 {
            return Err(ScheduleError::InvalidRoundCount(plan.total_rounds));
        }

        let seed_used = plan.seed.unwrap_or_else(fresh_seed);
        Ok(Self {
            teams: plan.teams,
            total_rounds: plan.total_rounds,
            seed_used,
            rng: ChaCha8Rng::seed_from_u64(seed_used),
        })
    }

    /// The seed driving this engine's RNG, whether supplied or drawn.
    #[inline]
    pub fn seed_used(&self) -> u64 {
        self.seed_used
    }

    /// Generate the full fixture list, grouped by round in ascending order.
    pub fn generate(&mut self) -> Schedule {
        let per_round = pairing::fixtures_per_round(self.teams.len());
        let mut fixtures = Vec::with_capacity(self.total_rounds as usize * per_round);
        let mut degraded_rounds = Vec::new();

        for round in 1..=self.total_rounds {
            let pairings = round_pairings(&self.teams, round);
            let (ordered, degraded) = shuffle_round(&pairings, &mut self.rng);
            if degraded {
                warn!(
                    "round {}: no clash-free ordering within {} attempts, keeping last shuffle",
                    round, MAX_SHUFFLE_ATTEMPTS
                );
                degraded_rounds.push(round);
            }
            fixtures.extend(ordered);
        }

        Schedule { fixtures, degraded_rounds }
    }
}

/// Convenience entry point: build an engine with a freshly drawn seed and
/// run it once.
pub fn generate_schedule(teams: Vec<TeamId>, total_rounds: u32) -> Result<Schedule> {
    let mut engine = ScheduleEngine::new(SchedulePlan::new(teams, total_rounds))?;
    Ok(engine.generate())
}

fn fresh_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
