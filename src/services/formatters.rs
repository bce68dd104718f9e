//! Display formatting for amounts and dates in the `en-IN` style.
//!
//! - Currency is Indian Rupee with whole units only: `₹10,00,000`.
//! - Digit grouping keeps the last three digits together and groups the rest
//!   in pairs (lakh / crore).
//! - Dates use the long form: `19 October 2026`.

use chrono::NaiveDate;

pub const CURRENCY_SYMBOL: &str = "₹";

pub fn format_currency(amount: f64) -> String {
    if amount.is_nan() {
        return format!("{CURRENCY_SYMBOL}NaN");
    }
    let sign = if amount < 0.0 { "-" } else { "" };
    if amount.is_infinite() {
        return format!("{sign}{CURRENCY_SYMBOL}∞");
    }

    let rounded = amount.abs().round();
    if rounded == 0.0 {
        return format!("{CURRENCY_SYMBOL}0");
    }
    format!("{sign}{CURRENCY_SYMBOL}{}", group_indian(&format!("{rounded:.0}")))
}

pub fn format_percent(rate: f64) -> String {
    format!("{rate}%")
}

/// Axis-tick rendering in thousands, e.g. `₹250K`.
pub fn format_compact_currency(amount: f64) -> String {
    format!("{CURRENCY_SYMBOL}{}K", amount / 1000.0)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%-d %B %Y").to_string()
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);

    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{tail}", groups.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::on_date;

    #[test]
    fn format_currency_uses_indian_grouping() {
        let cases = [
            (0.0, "₹0"),
            (999.0, "₹999"),
            (1_000.0, "₹1,000"),
            (50_000.0, "₹50,000"),
            (200_000.0, "₹2,00,000"),
            (1_000_000.0, "₹10,00,000"),
            (12_345_678.0, "₹1,23,45,678"),
        ];
        for (amount, expected) in cases {
            assert_eq!(format_currency(amount), expected, "formatting {amount}");
        }
    }

    #[test]
    fn format_currency_rounds_to_whole_units() {
        assert_eq!(format_currency(55_000.000_000_01), "₹55,000");
        assert_eq!(format_currency(1_499.5), "₹1,500");
        assert_eq!(format_currency(0.4), "₹0");
    }

    #[test]
    fn format_currency_prefixes_sign() {
        assert_eq!(format_currency(-200_000.0), "-₹2,00,000");
        assert_eq!(format_currency(-0.2), "₹0");
    }

    #[test]
    fn format_currency_handles_non_finite_values() {
        assert_eq!(format_currency(f64::NAN), "₹NaN");
        assert_eq!(format_currency(f64::INFINITY), "₹∞");
        assert_eq!(format_currency(f64::NEG_INFINITY), "-₹∞");
    }

    #[test]
    fn format_percent_uses_shortest_rendering() {
        assert_eq!(format_percent(5.0), "5%");
        assert_eq!(format_percent(2.5), "2.5%");
        assert_eq!(format_percent(0.0), "0%");
    }

    #[test]
    fn format_compact_currency_scales_to_thousands() {
        assert_eq!(format_compact_currency(250_000.0), "₹250K");
        assert_eq!(format_compact_currency(1_500.0), "₹1.5K");
        assert_eq!(format_compact_currency(0.0), "₹0K");
    }

    #[test]
    fn format_date_uses_long_month_name() {
        assert_eq!(format_date(on_date(2026, 10, 19)), "19 October 2026");
        assert_eq!(format_date(on_date(2027, 2, 1)), "1 February 2027");
    }
}
