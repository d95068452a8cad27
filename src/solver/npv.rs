use crate::interest::present_value_factor;
use crate::types::LoanInputs;

/// principal less the present value of every installment at `rate`
///
/// negative while the rate is too low to discount the installments down to
/// the principal, zero at the implied rate, and increasing in `rate` for any
/// schedule that pays back more than it borrowed
pub fn annuity_npv(inputs: &LoanInputs, rate: f64) -> f64 {
    inputs.principal - inputs.installment * present_value_factor(rate, inputs.periods)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_npv_at_zero_is_undiscounted_shortfall() {
        let inputs = LoanInputs::new(1000.0, 12, 95.0);
        assert_eq!(annuity_npv(&inputs, 0.0), 1000.0 - 1140.0);
    }

    #[test]
    fn test_npv_is_increasing() {
        let inputs = LoanInputs::new(1000.0, 12, 95.0);
        let rates = [0.0, 0.001, 0.01, 0.1, 1.0, 10.0];

        for pair in rates.windows(2) {
            assert!(annuity_npv(&inputs, pair[1]) > annuity_npv(&inputs, pair[0]));
        }
    }

    #[test]
    fn test_npv_vanishes_at_schedule_rate() {
        let rate: f64 = 0.02;
        let installment = 5000.0 * rate / (1.0 - (1.0 + rate).powi(-24));
        let inputs = LoanInputs::new(5000.0, 24, installment);

        assert_relative_eq!(annuity_npv(&inputs, rate), 0.0, epsilon = 1e-8);
    }
}
