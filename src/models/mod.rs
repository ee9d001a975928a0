pub mod absence;
pub mod report;
pub mod student;
pub mod team;
pub mod team_trainer;
pub mod tournament;
pub mod train;
pub mod trainer;

pub use absence::*;
pub use report::*;
pub use student::*;
pub use team::*;
pub use team_trainer::*;
pub use tournament::*;
pub use train::*;
pub use trainer::*;

use chrono::{DateTime, NaiveDateTime, Utc};

/// Timestamps are stored as naive UTC.
pub(crate) fn utc_from_naive(dt: Option<NaiveDateTime>) -> DateTime<Utc> {
    dt.map(|dt| DateTime::<Utc>::from_naive_utc_and_offset(dt, Utc))
        .unwrap_or_default()
}
