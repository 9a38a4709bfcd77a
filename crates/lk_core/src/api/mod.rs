pub mod schedule_json;

pub use schedule_json::{
    generate_schedule_json, ApiError, ApiResponse, ScheduleRequest, ScheduleResult,
    API_VERSION, DEFAULT_TOTAL_ROUNDS,
};
