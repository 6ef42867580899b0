//! Terminal rendering for series previews.

use chrono::NaiveDate;
use glowbook_core::recurrence::GeneratedSeries;
use owo_colors::OwoColorize;
use rust_decimal::Decimal;

/// How many dates to list before collapsing the rest into a "+K more" line.
const PREVIEW_LIMIT: usize = 5;

/// Render the expanded dates: the first few entries, then a count of the rest.
pub fn render_series(series: &GeneratedSeries) -> Vec<String> {
    if series.is_empty() {
        return vec![format!("  {}", "No dates in this series.".dimmed())];
    }

    let mut lines = Vec::new();

    for (i, date) in series.dates.iter().take(PREVIEW_LIMIT).enumerate() {
        lines.push(format!("  {:>2}. {}", i + 1, format_date(*date)));
    }

    let remaining = series.len().saturating_sub(PREVIEW_LIMIT);
    if remaining > 0 {
        lines.push(format!("  {}", format!("+{remaining} more").dimmed()));
    }

    lines
}

/// Render the projected cost line, rounded to two decimals for display.
pub fn render_cost(total: Decimal, sessions: usize, currency: &str) -> String {
    let label = format!(
        "{} session{}",
        sessions,
        if sessions == 1 { "" } else { "s" }
    );
    format!(
        "  Projected cost: {} {} ({})",
        total.round_dp(2).to_string().green(),
        currency,
        label
    )
}

fn format_date(date: NaiveDate) -> String {
    date.format("%a %Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use rust_decimal_macros::dec;

    fn series_of(n: u32) -> GeneratedSeries {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        GeneratedSeries {
            dates: (0..n)
                .map(|i| start + Duration::weeks(i as i64))
                .collect(),
        }
    }

    #[test]
    fn short_series_lists_every_date() {
        let lines = render_series(&series_of(3));
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("2025-01-01"));
        assert!(lines[2].contains("2025-01-15"));
    }

    #[test]
    fn long_series_collapses_to_more_line() {
        let lines = render_series(&series_of(12));
        assert_eq!(lines.len(), PREVIEW_LIMIT + 1);
        assert!(lines.last().unwrap().contains("+7 more"));
    }

    #[test]
    fn cost_line_rounds_for_display() {
        let line = render_cost(dec!(599.875), 12, "USD");
        assert!(line.contains("599.88"), "{line}");
        assert!(line.contains("12 sessions"), "{line}");
    }
}
