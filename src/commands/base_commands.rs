use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::domain::scenario::RunwayScenario;
use crate::services::runway_chart::DEFAULT_CHART_MONTHS;
use crate::services::runway_report::ReportFormat;
use crate::services::scenario_yaml::{load_scenario_from_yaml_file, validate_scenario, ScenarioError};

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Project the cash runway and print a summary
    Calculate {
        #[command(flatten)]
        scenario: ScenarioArgs,
        /// Optional output YAML file for the full projection
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Plot remaining cash, revenue and burn into a PNG chart
    Chart {
        #[command(flatten)]
        scenario: ScenarioArgs,
        /// Output PNG file
        #[arg(short, long)]
        output: String,
        /// Number of months to plot
        #[arg(short, long, default_value_t = DEFAULT_CHART_MONTHS)]
        months: usize,
    },
    /// Export the runway analysis as a document
    Export {
        #[command(flatten)]
        scenario: ScenarioArgs,
        /// Output file (defaults to runway-analysis.<ext>)
        #[arg(short, long)]
        output: Option<String>,
        /// Document format
        #[arg(short, long, value_enum, default_value_t = ReportFormat::Markdown)]
        format: ReportFormat,
    },
    /// Email the runway analysis (written to a local outbox)
    Email {
        #[command(flatten)]
        scenario: ScenarioArgs,
        /// Recipient address
        #[arg(short, long)]
        to: String,
        /// Outbox directory that receives the rendered message
        #[arg(long, env = "RUNWAY_OUTBOX", default_value = "outbox")]
        outbox: String,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Projection inputs, read from a scenario YAML file and/or flags.
/// Flags take precedence over values from the file.
#[derive(Args, Debug, Clone)]
pub struct ScenarioArgs {
    /// Scenario YAML file
    #[arg(short, long)]
    pub input: Option<String>,
    /// Total available cash
    #[arg(long, allow_negative_numbers = true)]
    pub total_cash: Option<f64>,
    /// Monthly gross burn rate
    #[arg(long, allow_negative_numbers = true)]
    pub monthly_burn: Option<f64>,
    /// One-time additional funding
    #[arg(long, allow_negative_numbers = true)]
    pub additional_funding: Option<f64>,
    /// Monthly revenue growth rate in percent
    #[arg(long, allow_negative_numbers = true)]
    pub growth_rate: Option<f64>,
    /// Starting monthly revenue
    #[arg(long, allow_negative_numbers = true)]
    pub monthly_revenue: Option<f64>,
    /// Projection start date (YYYY-MM-DD)
    #[arg(short, long, default_value_t = default_start_date())]
    pub start_date: String,
}

impl ScenarioArgs {
    pub async fn resolve(&self) -> Result<(RunwayScenario, NaiveDate), ScenarioError> {
        let from_file = match &self.input {
            Some(path) => Some(load_scenario_from_yaml_file(path).await?),
            None => None,
        };

        let total_cash = self
            .total_cash
            .or(from_file.map(|s| s.total_cash))
            .ok_or(ScenarioError::MissingInput("total_cash"))?;
        let monthly_burn = self
            .monthly_burn
            .or(from_file.map(|s| s.monthly_burn))
            .ok_or(ScenarioError::MissingInput("monthly_burn"))?;
        let defaults = from_file.unwrap_or_default();

        let scenario = RunwayScenario::new(total_cash, monthly_burn)
            .with_additional_funding(self.additional_funding.unwrap_or(defaults.additional_funding))
            .with_growth_rate(self.growth_rate.unwrap_or(defaults.growth_rate))
            .with_monthly_revenue(self.monthly_revenue.unwrap_or(defaults.monthly_revenue));
        validate_scenario(&scenario)?;

        let start_date = NaiveDate::parse_from_str(&self.start_date, "%Y-%m-%d")
            .map_err(|_| ScenarioError::InvalidStartDate(self.start_date.clone()))?;
        Ok((scenario, start_date))
    }
}

fn default_start_date() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}
