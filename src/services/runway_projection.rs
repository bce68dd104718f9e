use chrono::NaiveDate;

use crate::domain::projection::{shift_months, MonthlyProjection, RunwayResult};
use crate::domain::scenario::RunwayScenario;

/// Projection horizon: five years of monthly steps.
pub const MAX_PROJECTION_MONTHS: u32 = 60;

/// Simulates the cash balance month by month starting at `start_date`.
///
/// Each recorded month carries its opening balance; the month's net burn
/// (burn minus revenue, floored at zero) is subtracted afterwards and revenue
/// then compounds by `growth_rate` percent. The simulation stops as soon as
/// the balance is no longer positive or after [`MAX_PROJECTION_MONTHS`].
///
/// `runway_months` is the number of recorded months minus one. It is `-1`
/// when there is no opening cash, and `59` when the business is still solvent
/// at the horizon. Inputs are not validated here.
pub fn project_runway(scenario: &RunwayScenario, start_date: NaiveDate) -> RunwayResult {
    let growth_factor = 1.0 + scenario.growth_rate / 100.0;
    let mut cash = scenario.opening_cash();
    let mut revenue = scenario.monthly_revenue;
    let mut month = 0;
    let mut projected_data = Vec::new();

    while cash > 0.0 && month < MAX_PROJECTION_MONTHS {
        let entry = MonthlyProjection {
            month,
            remaining: cash,
            revenue,
            burn: scenario.monthly_burn,
            date: shift_months(start_date, i64::from(month)),
        };
        cash -= entry.net_burn();
        projected_data.push(entry);
        revenue *= growth_factor;
        month += 1;
    }

    let runway_months = projected_data.len() as i64 - 1;
    RunwayResult {
        scenario: *scenario,
        start_date,
        runway_months,
        runway_date: shift_months(start_date, runway_months),
        projected_data,
    }
}
