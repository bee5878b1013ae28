//! Two-decimal rounding applied to average and percentage reports.

use std::collections::BTreeMap;

/// Round half up at the second decimal: `floor(x * 100 + 0.5) / 100`.
///
/// Non-finite values are returned unchanged.
pub fn round_two_decimals(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    (value * 100.0 + 0.5).floor() / 100.0
}

/// Round every value of a report.
pub fn round_report(report: BTreeMap<String, f64>) -> BTreeMap<String, f64> {
    report
        .into_iter()
        .map(|(key, value)| (key, round_two_decimals(value)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_up() {
        assert_eq!(round_two_decimals(22.857142857142858), 22.86);
        assert_eq!(round_two_decimals(33.333333), 33.33);
        assert_eq!(round_two_decimals(0.125), 0.13);
        assert_eq!(round_two_decimals(-0.125), -0.12);
    }

    #[test]
    fn rounding_is_idempotent() {
        for value in [0.0, 0.1, 22.86, 25.0, 33.33, 66.67, 99.99, 100.0, 1234.56] {
            let once = round_two_decimals(value);
            assert_eq!(once, value);
            assert_eq!(round_two_decimals(once), once);
        }
    }

    #[test]
    fn non_finite_values_pass_through() {
        assert!(round_two_decimals(f64::INFINITY).is_infinite());
        assert!(round_two_decimals(f64::NAN).is_nan());
    }

    #[test]
    fn round_report_keeps_keys() {
        let report = BTreeMap::from([("a".to_string(), 1.005_1), ("b".to_string(), 2.0)]);
        let rounded = round_report(report);
        assert_eq!(rounded["a"], 1.01);
        assert_eq!(rounded["b"], 2.0);
    }
}
