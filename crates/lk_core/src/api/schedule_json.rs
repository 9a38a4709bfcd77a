//! JSON API for schedule generation.
//!
//! String-in, string-out functions for host applications that speak JSON.
//! Malformed or invalid requests produce a `success: false` response with
//! an error code; no input can make these functions panic.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::engine::{ScheduleEngine, SchedulePlan};
use crate::error::{Result, ScheduleError};
use crate::models::{Fixture, TeamId};

pub const API_VERSION: &str = "1.0";

/// Round count used when the request omits one or sends zero.
pub const DEFAULT_TOTAL_ROUNDS: u32 = 1;

/// Schedule generation request.
#[derive(Debug, Deserialize)]
pub struct ScheduleRequest {
    /// Roster of team ids, at least two, unique.
    pub teams: Vec<u64>,
    /// Number of single round-robins. Missing or zero defaults to 1.
    #[serde(default)]
    pub total_rounds: Option<u32>,
    /// Optional RNG seed for reproducible output.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Payload of a successful generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleResult {
    pub fixtures: Vec<Fixture>,
    pub fixture_count: usize,
    /// Rounds whose published order still violates the adjacency
    /// constraint after the retry budget was spent.
    pub degraded_rounds: Vec<u32>,
    /// The seed that drove generation, echoed for replayability.
    pub generated_with_seed: u64,
}

/// Envelope shared by all API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
    pub schema_version: String,
}

/// Structured API error with a stable code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(code: &str, message: &str) -> Self {
        Self { code: code.to_string(), message: message.to_string() }
    }

    pub fn from_schedule_error(error: &ScheduleError) -> Self {
        let code = match error {
            ScheduleError::TooFewTeams { .. } => "TOO_FEW_TEAMS",
            ScheduleError::DuplicateTeam(_) => "DUPLICATE_TEAM",
            ScheduleError::InvalidRoundCount(_) => "INVALID_ROUND_COUNT",
            ScheduleError::SerializationError(_) => "SERIALIZATION_ERROR",
            ScheduleError::DeserializationError(_) => "INVALID_REQUEST",
        };

        Self::new(code, &error.to_string())
    }
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            schema_version: API_VERSION.to_string(),
        }
    }

    pub fn error(error: ApiError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
            schema_version: API_VERSION.to_string(),
        }
    }
}

/// Generate a schedule from a JSON request, returning a JSON response.
pub fn generate_schedule_json(request_json: &str) -> String {
    let request: ScheduleRequest = match serde_json::from_str(request_json) {
        Ok(request) => request,
        Err(err) => {
            warn!("schedule request failed to parse: {}", err);
            let response: ApiResponse<ScheduleResult> =
                ApiResponse::error(ApiError::new("INVALID_REQUEST", &err.to_string()));
            return serde_json::to_string(&response).unwrap_or_else(|_| "{}".to_string());
        }
    };

    let response = match run_request(request) {
        Ok(data) => ApiResponse::success(data),
        Err(err) => {
            warn!("schedule request rejected: {}", err);
            ApiResponse::error(ApiError::from_schedule_error(&err))
        }
    };

    serde_json::to_string(&response).unwrap_or_else(|_| "{}".to_string())
}

fn run_request(request: ScheduleRequest) -> Result<ScheduleResult> {
    let teams: Vec<TeamId> = request.teams.into_iter().map(TeamId).collect();

    let total_rounds = match request.total_rounds {
        Some(rounds) if rounds >= 1 => rounds,
        _ => DEFAULT_TOTAL_ROUNDS,
    };

    let mut plan = SchedulePlan::new(teams, total_rounds);
    if let Some(seed) = request.seed {
        plan = plan.with_seed(seed);
    }

    let mut engine = ScheduleEngine::new(plan)?;
    let generated_with_seed = engine.seed_used();
    let schedule = engine.generate();

    Ok(ScheduleResult {
        fixture_count: schedule.fixture_count(),
        fixtures: schedule.fixtures,
        degraded_rounds: schedule.degraded_rounds,
        generated_with_seed,
    })
}
