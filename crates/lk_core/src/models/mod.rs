pub mod fixture;
pub mod schedule;

pub use fixture::{Fixture, FixtureStatus, TeamId};
pub use schedule::Schedule;
