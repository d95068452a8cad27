pub mod annuity;

pub use annuity::{installment_for_rate, present_value_factor};

/// simple annualization, no compounding
pub fn nominal_apr(periodic_rate: f64, periods_per_year: u32) -> f64 {
    periodic_rate * periods_per_year as f64
}

/// annualization compounding the periodic rate over a year
pub fn effective_apr(periodic_rate: f64, periods_per_year: u32) -> f64 {
    (1.0 + periodic_rate).powf(periods_per_year as f64) - 1.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_monthly_annualization() {
        let rate = 0.015;

        assert_relative_eq!(nominal_apr(rate, 12), 0.18, epsilon = 1e-12);
        // (1.015)^12 - 1
        assert_relative_eq!(effective_apr(rate, 12), 0.195618, epsilon = 1e-6);
    }

    #[test]
    fn test_zero_rate_annualizes_to_zero() {
        assert_eq!(nominal_apr(0.0, 52), 0.0);
        assert_eq!(effective_apr(0.0, 52), 0.0);
    }

    #[test]
    fn test_single_period_per_year() {
        assert_relative_eq!(nominal_apr(0.07, 1), effective_apr(0.07, 1), epsilon = 1e-15);
    }

    proptest! {
        #[test]
        fn effective_not_below_nominal(rate in 1e-6f64..0.5, periods_per_year in 1u32..400) {
            let nominal = nominal_apr(rate, periods_per_year);
            let effective = effective_apr(rate, periods_per_year);
            prop_assert!(effective >= nominal * (1.0 - 1e-12));
        }

        #[test]
        fn effective_grows_with_frequency(rate in 1e-4f64..0.5, periods_per_year in 1u32..365) {
            prop_assert!(effective_apr(rate, periods_per_year + 1) > effective_apr(rate, periods_per_year));
        }
    }
}
