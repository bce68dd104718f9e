use crate::domain::projection::RunwayResult;
use crate::services::formatters::{format_currency, format_date};
use crate::services::runway_report::{input_rows, result_rows};

pub fn format_runway_summary(result: &RunwayResult) -> String {
    let mut lines = Vec::new();
    lines.push("Runway Report".to_string());
    lines.push(format!("Start date: {}", format_date(result.start_date)));
    for (label, value) in input_rows(result).into_iter().chain(result_rows(result)) {
        lines.push(format!("{label}: {value}"));
    }
    lines.push(String::new());
    lines.push("Month | Date | Revenue | Burn | Remaining Cash".to_string());
    lines.push("------|------|---------|------|---------------".to_string());
    for entry in &result.projected_data {
        lines.push(format!(
            "Month {} | {} | {} | {} | {}",
            entry.month + 1,
            format_date(entry.date),
            format_currency(entry.revenue),
            format_currency(entry.burn),
            format_currency(entry.remaining)
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scenario::RunwayScenario;
    use crate::services::runway_projection::project_runway;
    use crate::test_support::{on_date, sample_result};

    #[test]
    fn format_runway_summary_includes_inputs_results_and_table() {
        let output = format_runway_summary(&sample_result());

        assert!(output.contains("Runway Report"));
        assert!(output.contains("Start date: 1 January 2026"));
        assert!(output.contains("Total Available Cash: ₹10,00,000"));
        assert!(output.contains("Monthly Growth Rate: 0%"));
        assert!(output.contains("Runway Duration: 4 months"));
        assert!(output.contains("Estimated End Date: 1 May 2026"));
        assert!(output.contains("Month 1 | 1 January 2026 | ₹0 | ₹2,00,000 | ₹10,00,000"));
        assert!(output.contains("Month 5 | 1 May 2026 | ₹0 | ₹2,00,000 | ₹2,00,000"));
    }

    #[test]
    fn format_runway_summary_reports_empty_projection() {
        let result = project_runway(&RunwayScenario::new(0.0, 100_000.0), on_date(2026, 1, 1));
        let output = format_runway_summary(&result);

        assert!(output.contains("Runway Duration: -1 months"));
        assert!(output.contains("Estimated End Date: 1 December 2025"));
        assert!(!output.contains("Month 1 |"));
    }
}
