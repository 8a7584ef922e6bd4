//! Swedish-style amount formatting shared by every export.

use audit_model::Summary;

/// Column headers of the summary table, in display order.
pub const SUMMARY_HEADERS: [&str; 5] = [
    "Target Items Total",
    "Sampling Population",
    "Sampled Items Total",
    "Population (w/o Excluded)",
    "Total Population",
];

/// Printed in place of a total that no longer fits in an `f64`.
pub const OVERFLOW_MARKER: &str = "#OVERFLOW";

/// Formats an amount as `1 234 567,89 kr`.
///
/// Two decimals, space-grouped thousands, comma decimal separator. A value
/// that rounds to zero is printed without a sign. Non-finite values print
/// [`OVERFLOW_MARKER`].
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return OVERFLOW_MARKER.to_string();
    }
    let rounded = format!("{:.2}", value.abs());
    let (whole, fraction) = rounded.split_once('.').unwrap_or((rounded.as_str(), "00"));
    let negative = value < 0.0 && rounded.bytes().any(|b| matches!(b, b'1'..=b'9'));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3 + 8);
    if negative {
        grouped.push('-');
    }
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(digit);
    }
    format!("{grouped},{fraction} kr")
}

/// Summary values in [`SUMMARY_HEADERS`] order.
pub fn summary_values(summary: &Summary) -> [String; 5] {
    [
        format_currency(summary.target_total),
        format_currency(summary.population_total),
        format_currency(summary.sample_total),
        format_currency(summary.population_without_excluded),
        format_currency(summary.grand_total),
    ]
}

/// Notice shown when the minimum-value filter removed items.
pub fn exclusion_message(excluded_count: usize, minimum_value: f64) -> String {
    format!(
        "Excluded {excluded_count} items below the threshold of {}.",
        format_currency(minimum_value)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "0,00 kr");
        assert_eq!(format_currency(5.5), "5,50 kr");
        assert_eq!(format_currency(999.999), "1 000,00 kr");
        assert_eq!(format_currency(1_234_567.891), "1 234 567,89 kr");
        assert_eq!(format_currency(100_000.0), "100 000,00 kr");
    }

    #[test]
    fn test_format_negative_currency() {
        assert_eq!(format_currency(-1_250.5), "-1 250,50 kr");
        assert_eq!(format_currency(-0.001), "0,00 kr");
    }

    #[test]
    fn test_format_non_finite_currency() {
        assert_eq!(format_currency(f64::NAN), OVERFLOW_MARKER);
        assert_eq!(format_currency(f64::INFINITY), OVERFLOW_MARKER);
        assert_eq!(format_currency(f64::NEG_INFINITY), OVERFLOW_MARKER);
    }

    #[test]
    fn test_overflowed_summary_is_marked() {
        let summary = Summary::from_totals(0.0, f64::INFINITY, 1.0, 0.0);
        let values = summary_values(&summary);
        assert_eq!(values[1], OVERFLOW_MARKER);
        assert_eq!(values[2], "1,00 kr");
        assert_eq!(values[4], OVERFLOW_MARKER);
    }

    #[test]
    fn test_exclusion_message() {
        assert_eq!(
            exclusion_message(4, 5_000.0),
            "Excluded 4 items below the threshold of 5 000,00 kr."
        );
    }

    #[test]
    fn test_summary_values_order() {
        let summary = Summary::from_totals(1.0, 2.0, 3.0, 4.0);
        assert_eq!(
            summary_values(&summary),
            ["1,00 kr", "2,00 kr", "3,00 kr", "3,00 kr", "7,00 kr"].map(String::from)
        );
    }
}
