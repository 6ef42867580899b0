//! Cost projection for recurring series.

use rust_decimal::Decimal;

use crate::recurrence::GeneratedSeries;

/// Total projected cost for a series at a per-session price.
///
/// Full precision; two-decimal currency formatting is the caller's job.
pub fn project(series: &GeneratedSeries, unit_price: Decimal) -> Decimal {
    unit_price * Decimal::from(series.len() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn series_of(n: u32) -> GeneratedSeries {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        GeneratedSeries {
            dates: (0..n)
                .map(|i| start + chrono::Duration::weeks(i as i64))
                .collect(),
        }
    }

    #[test]
    fn projects_price_times_count() {
        assert_eq!(project(&series_of(12), dec!(49.99)), dec!(599.88));
        assert_eq!(project(&series_of(3), dec!(150)), dec!(450));
    }

    #[test]
    fn zero_price_and_empty_series_are_zero() {
        assert_eq!(project(&series_of(8), dec!(0)), dec!(0));
        assert_eq!(project(&series_of(0), dec!(49.99)), dec!(0));
    }

    #[test]
    fn no_precision_loss_on_fractional_prices() {
        // 0.10 * 3 must be exactly 0.30, not a float approximation.
        assert_eq!(project(&series_of(3), dec!(0.10)), dec!(0.30));
    }
}
