use chrono::{Months, NaiveDate};
use serde::Serialize;

use crate::domain::scenario::RunwayScenario;

/// State of the business at the opening of one simulated month.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct MonthlyProjection {
    pub month: u32,
    /// Cash balance before this month's net burn is applied.
    pub remaining: f64,
    pub revenue: f64,
    pub burn: f64,
    pub date: NaiveDate,
}

impl MonthlyProjection {
    /// Burn after revenue offset, floored at zero.
    pub fn net_burn(&self) -> f64 {
        (self.burn - self.revenue).max(0.0)
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RunwayResult {
    #[serde(flatten)]
    pub scenario: RunwayScenario,
    pub start_date: NaiveDate,
    /// Index of the last fully solvent month; `-1` when there was no cash at all.
    pub runway_months: i64,
    pub runway_date: NaiveDate,
    pub projected_data: Vec<MonthlyProjection>,
}

/// Moves `date` by whole calendar months, clamping the day to the end of
/// shorter months (Jan 31 + 1 month = Feb 28/29).
pub fn shift_months(date: NaiveDate, months: i64) -> NaiveDate {
    let step = Months::new(months.unsigned_abs().min(u32::MAX as u64) as u32);
    let shifted = if months >= 0 {
        date.checked_add_months(step)
    } else {
        date.checked_sub_months(step)
    };
    shifted.unwrap_or(if months >= 0 { NaiveDate::MAX } else { NaiveDate::MIN })
}
