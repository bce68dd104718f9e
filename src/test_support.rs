use chrono::NaiveDate;

use crate::domain::projection::RunwayResult;
use crate::domain::scenario::RunwayScenario;
use crate::services::runway_projection::project_runway;

pub fn on_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// ₹10,00,000 burning ₹2,00,000 a month from 1 January 2026: five recorded
/// months and a runway of 4.
pub fn sample_result() -> RunwayResult {
    project_runway(
        &RunwayScenario::new(1_000_000.0, 200_000.0),
        on_date(2026, 1, 1),
    )
}
