use serde::{Deserialize, Serialize};
use std::fmt;

use crate::decimal::format_percentage;
use crate::errors::{RateError, Result};

/// periods per year assumed when the caller does not say otherwise
pub const DEFAULT_PERIODS_PER_YEAR: u32 = 12;

pub(crate) fn default_periods_per_year() -> u32 {
    DEFAULT_PERIODS_PER_YEAR
}

/// validated description of a fixed-installment loan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanInputs {
    /// amount financed
    pub principal: f64,
    /// number of equal payment periods
    pub periods: u32,
    /// fixed payment made every period
    pub installment: f64,
    /// only used to annualize the solved periodic rate
    #[serde(default = "default_periods_per_year")]
    pub periods_per_year: u32,
}

impl LoanInputs {
    /// create inputs with monthly periods
    pub fn new(principal: f64, periods: u32, installment: f64) -> Self {
        Self {
            principal,
            periods,
            installment,
            periods_per_year: DEFAULT_PERIODS_PER_YEAR,
        }
    }

    pub fn with_periods_per_year(mut self, periods_per_year: u32) -> Self {
        self.periods_per_year = periods_per_year;
        self
    }

    /// installment multiplied out over every period
    pub fn total_paid(&self) -> f64 {
        self.installment * self.periods as f64
    }

    /// reject anything that is not strictly positive
    pub fn validate(&self) -> Result<()> {
        if !(self.principal > 0.0) || !self.principal.is_finite() {
            return Err(RateError::invalid_input("principal", self.principal));
        }
        if self.periods == 0 {
            return Err(RateError::invalid_input("periods", self.periods));
        }
        if !(self.installment > 0.0) || !self.installment.is_finite() {
            return Err(RateError::invalid_input("installment", self.installment));
        }
        if self.periods_per_year == 0 {
            return Err(RateError::invalid_input("periods_per_year", self.periods_per_year));
        }
        Ok(())
    }
}

/// outcome of a rate calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanResult {
    pub total_paid: f64,
    pub total_interest: f64,
    /// interest rate per payment period
    pub periodic_rate: f64,
    /// periodic rate times periods per year
    pub nominal_apr: f64,
    /// periodic rate compounded over a year
    pub effective_apr: f64,
}

impl LoanResult {
    /// result for a schedule that carries no net interest
    pub fn zero_interest(total_paid: f64, total_interest: f64) -> Self {
        Self {
            total_paid,
            total_interest,
            periodic_rate: 0.0,
            nominal_apr: 0.0,
            effective_apr: 0.0,
        }
    }

    pub fn is_zero_interest(&self) -> bool {
        self.periodic_rate == 0.0
    }

    /// name of the first field that overflowed to infinity or NaN, if any
    pub fn non_finite_field(&self) -> Option<&'static str> {
        [
            ("total_paid", self.total_paid),
            ("total_interest", self.total_interest),
            ("periodic_rate", self.periodic_rate),
            ("nominal_apr", self.nominal_apr),
            ("effective_apr", self.effective_apr),
        ]
        .into_iter()
        .find(|(_, value)| !value.is_finite())
        .map(|(field, _)| field)
    }
}

impl fmt::Display for LoanResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "total paid {:.2}, interest {:.2}, periodic {}, nominal apr {}, effective apr {}",
            self.total_paid,
            self.total_interest,
            format_percentage(self.periodic_rate, 4),
            format_percentage(self.nominal_apr, 2),
            format_percentage(self.effective_apr, 2),
        )
    }
}

/// which secondary input the caller supplied alongside principal and periods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculationMode {
    /// fixed payment per period
    #[default]
    ByInstallment,
    /// total interest over the life of the loan
    ByTotalInterest,
    /// flat interest rate in percent of principal
    ByInterestRate,
}

impl CalculationMode {
    /// name of the secondary field this mode reads
    pub fn value_field(&self) -> &'static str {
        match self {
            CalculationMode::ByInstallment => "installment",
            CalculationMode::ByTotalInterest => "total_interest",
            CalculationMode::ByInterestRate => "interest_rate",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inputs_default_to_monthly() {
        let inputs = LoanInputs::new(1000.0, 12, 95.0);
        assert_eq!(inputs.periods_per_year, 12);
        assert_eq!(inputs.total_paid(), 1140.0);
        assert!(inputs.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_non_positive_fields() {
        let base = LoanInputs::new(1000.0, 12, 95.0);

        let cases = [
            (LoanInputs { principal: 0.0, ..base }, "principal"),
            (LoanInputs { principal: -5.0, ..base }, "principal"),
            (LoanInputs { principal: f64::NAN, ..base }, "principal"),
            (LoanInputs { periods: 0, ..base }, "periods"),
            (LoanInputs { installment: 0.0, ..base }, "installment"),
            (LoanInputs { installment: f64::INFINITY, ..base }, "installment"),
            (base.with_periods_per_year(0), "periods_per_year"),
        ];

        for (inputs, expected) in cases {
            match inputs.validate() {
                Err(RateError::InvalidInput { field, .. }) => assert_eq!(field, expected),
                other => panic!("expected invalid {expected}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_inputs_json_defaults_periods_per_year() {
        let inputs: LoanInputs =
            serde_json::from_str(r#"{"principal":1000.0,"periods":10,"installment":100.0}"#).unwrap();
        assert_eq!(inputs, LoanInputs::new(1000.0, 10, 100.0));
    }

    #[test]
    fn test_result_display() {
        let result = LoanResult::zero_interest(1000.0, 0.0);
        assert!(result.is_zero_interest());
        assert_eq!(
            result.to_string(),
            "total paid 1000.00, interest 0.00, periodic 0%, nominal apr 0%, effective apr 0%"
        );
    }

    #[test]
    fn test_result_display_keeps_huge_rates() {
        // 1 borrowed, 500,000 repaid after one monthly period
        let result = LoanResult {
            total_paid: 500_000.0,
            total_interest: 499_999.0,
            periodic_rate: 499_999.0,
            nominal_apr: 5_999_988.0,
            effective_apr: 2.44e68,
        };
        let text = result.to_string();

        assert!(text.contains("periodic 49999900%"), "{text}");
        assert!(!text.contains("effective apr 0%"), "{text}");
        assert!(text.contains("e70%"), "{text}");
        assert!(result.non_finite_field().is_none());
    }

    #[test]
    fn test_non_finite_field() {
        let mut result = LoanResult::zero_interest(1000.0, 0.0);
        assert_eq!(result.non_finite_field(), None);

        result.effective_apr = f64::INFINITY;
        assert_eq!(result.non_finite_field(), Some("effective_apr"));
        assert!(result.to_string().ends_with("effective apr inf%"));

        result.nominal_apr = f64::NAN;
        assert_eq!(result.non_finite_field(), Some("nominal_apr"));
    }

    #[test]
    fn test_mode_serializes_snake_case() {
        let json = serde_json::to_string(&CalculationMode::ByTotalInterest).unwrap();
        assert_eq!(json, "\"by_total_interest\"");
        assert_eq!(CalculationMode::default(), CalculationMode::ByInstallment);
        assert_eq!(CalculationMode::ByInterestRate.value_field(), "interest_rate");
    }
}
