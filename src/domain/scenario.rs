use serde::{Deserialize, Serialize};

/// The five inputs of a runway projection.
///
/// Money amounts are plain currency units. `growth_rate` is a monthly
/// percentage, so `5.0` means revenue grows by 5% every month.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RunwayScenario {
    pub total_cash: f64,
    pub monthly_burn: f64,
    #[serde(default)]
    pub additional_funding: f64,
    #[serde(default)]
    pub growth_rate: f64,
    #[serde(default)]
    pub monthly_revenue: f64,
}

impl RunwayScenario {
    pub fn new(total_cash: f64, monthly_burn: f64) -> Self {
        Self {
            total_cash,
            monthly_burn,
            ..Self::default()
        }
    }

    pub fn with_additional_funding(mut self, additional_funding: f64) -> Self {
        self.additional_funding = additional_funding;
        self
    }

    pub fn with_growth_rate(mut self, growth_rate: f64) -> Self {
        self.growth_rate = growth_rate;
        self
    }

    pub fn with_monthly_revenue(mut self, monthly_revenue: f64) -> Self {
        self.monthly_revenue = monthly_revenue;
        self
    }

    /// Cash on hand once the one-time funding has landed.
    pub fn opening_cash(&self) -> f64 {
        self.total_cash + self.additional_funding
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_scenario_defaults_optional_inputs_to_zero() {
        let scenario = RunwayScenario::new(1_000_000.0, 200_000.0);

        assert_eq!(scenario.additional_funding, 0.0);
        assert_eq!(scenario.growth_rate, 0.0);
        assert_eq!(scenario.monthly_revenue, 0.0);
    }

    #[test]
    fn opening_cash_includes_additional_funding() {
        let scenario = RunwayScenario::new(500_000.0, 100_000.0).with_additional_funding(500_000.0);
        assert_eq!(scenario.opening_cash(), 1_000_000.0);
    }

    #[test]
    fn optional_inputs_may_be_omitted_in_yaml() {
        let scenario: RunwayScenario =
            serde_yaml::from_str("total_cash: 1000\nmonthly_burn: 100\ngrowth_rate: 2.5\n").unwrap();

        assert_eq!(scenario.total_cash, 1000.0);
        assert_eq!(scenario.monthly_burn, 100.0);
        assert_eq!(scenario.growth_rate, 2.5);
        assert_eq!(scenario.additional_funding, 0.0);
        assert_eq!(scenario.monthly_revenue, 0.0);
    }
}
