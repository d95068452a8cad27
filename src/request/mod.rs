pub mod serialization;

use serde::{Deserialize, Serialize};

use crate::decimal::{parse_amount, parse_periods, Amount};
use crate::errors::{RateError, Result};
use crate::solver::RateSolver;
use crate::types::{default_periods_per_year, CalculationMode, LoanInputs, LoanResult};

pub use serialization::{evaluate_json, ErrorView, LoanResponse};

/// installment given directly
pub fn installment_from_amount(amount: f64) -> Result<f64> {
    ensure_installment(amount)
}

/// spread principal plus total interest evenly over the periods
pub fn installment_from_total_interest(principal: f64, periods: u32, total_interest: f64) -> Result<f64> {
    if periods == 0 {
        return Err(RateError::invalid_input("periods", periods));
    }
    ensure_installment((principal + total_interest) / periods as f64)
}

/// flat rate quoted in percent of principal for the whole term
pub fn installment_from_rate_percent(principal: f64, periods: u32, rate_percent: f64) -> Result<f64> {
    let total_interest = principal * (rate_percent / 100.0);
    installment_from_total_interest(principal, periods, total_interest)
}

/// derive the installment the solver needs from whichever input the mode selects
pub fn derive_installment(mode: CalculationMode, principal: f64, periods: u32, value: f64) -> Result<f64> {
    match mode {
        CalculationMode::ByInstallment => installment_from_amount(value),
        CalculationMode::ByTotalInterest => installment_from_total_interest(principal, periods, value),
        CalculationMode::ByInterestRate => installment_from_rate_percent(principal, periods, value),
    }
}

fn ensure_installment(installment: f64) -> Result<f64> {
    if installment > 0.0 && installment.is_finite() {
        Ok(installment)
    } else {
        Err(RateError::InvalidInstallment { installment })
    }
}

/// calculation request as handed over by an input form or a json client
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanRequest {
    pub principal: Amount,
    /// signed so a negative count from a client is reported as invalid input
    pub periods: i64,
    #[serde(default)]
    pub mode: CalculationMode,
    /// installment, total interest or rate percent depending on mode
    pub value: Amount,
    #[serde(default = "default_periods_per_year")]
    pub periods_per_year: u32,
}

impl LoanRequest {
    pub fn new(principal: f64, periods: u32, mode: CalculationMode, value: f64) -> Self {
        Self {
            principal: Amount::new(principal),
            periods: i64::from(periods),
            mode,
            value: Amount::new(value),
            periods_per_year: default_periods_per_year(),
        }
    }

    pub fn with_periods_per_year(mut self, periods_per_year: u32) -> Self {
        self.periods_per_year = periods_per_year;
        self
    }

    /// build from raw text fields
    ///
    /// principal and periods are read before the secondary value, so a bad
    /// loan amount or term is reported ahead of a bad installment
    pub fn from_form(principal: &str, periods: &str, mode: CalculationMode, value: &str) -> Result<Self> {
        let principal = parse_amount("principal", principal)?;
        let periods = parse_periods("periods", periods)?;
        let value = parse_amount(mode.value_field(), value)?;

        Ok(Self::new(principal, periods, mode, value))
    }

    /// period count narrowed to what the solver takes
    pub fn periods(&self) -> Result<u32> {
        if self.periods <= 0 {
            return Err(RateError::invalid_input("periods", self.periods));
        }
        u32::try_from(self.periods).map_err(|_| RateError::UnparsableNumber {
            field: "periods".to_string(),
            input: self.periods.to_string(),
        })
    }

    /// installment implied by the selected mode
    pub fn installment(&self) -> Result<f64> {
        derive_installment(self.mode, self.principal.value(), self.periods()?, self.value.value())
    }

    /// resolve into solver inputs
    pub fn to_inputs(&self) -> Result<LoanInputs> {
        let principal = self.principal.value();
        if !(principal > 0.0) || !principal.is_finite() {
            return Err(RateError::invalid_input("principal", principal));
        }
        let periods = self.periods()?;

        let inputs = LoanInputs {
            principal,
            periods,
            installment: self.installment()?,
            periods_per_year: self.periods_per_year,
        };
        inputs.validate()?;
        Ok(inputs)
    }

    /// evaluate with the default solver
    pub fn evaluate(&self) -> Result<LoanResult> {
        self.evaluate_with(&RateSolver::default())
    }

    pub fn evaluate_with(&self, solver: &RateSolver) -> Result<LoanResult> {
        solver.calculate(&self.to_inputs()?)
    }
}
