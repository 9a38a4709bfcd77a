use crate::models::TeamId;

#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    #[error("not enough teams to schedule: found {found}, need at least 2")]
    TooFewTeams { found: usize },
    #[error("duplicate team in roster: {0}")]
    DuplicateTeam(TeamId),
    #[error("invalid round count: {0}")]
    InvalidRoundCount(u32),
    #[error("serialization error: {0}")]
    SerializationError(String),
    #[error("deserialization error: {0}")]
    DeserializationError(String),
}

impl From<serde_json::Error> for ScheduleError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() {
            ScheduleError::DeserializationError(err.to_string())
        } else {
            ScheduleError::SerializationError(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
