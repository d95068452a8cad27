pub mod bisection;
pub mod npv;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::SolverConfig;
use crate::errors::Result;
use crate::interest::{effective_apr, nominal_apr};
use crate::types::{LoanInputs, LoanResult};

pub use bisection::{bisect, expand_bracket, Bracket, Root, Termination};
pub use npv::annuity_npv;

/// how a rate was found
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolveDiagnostics {
    pub termination: Termination,
    /// doublings of the upper bound before the root was bracketed
    pub bracket_expansions: u32,
    pub iterations: u32,
    /// bracket in force when the search stopped
    pub low: f64,
    pub high: f64,
}

impl SolveDiagnostics {
    fn zero_interest() -> Self {
        Self {
            termination: Termination::ZeroInterest,
            bracket_expansions: 0,
            iterations: 0,
            low: 0.0,
            high: 0.0,
        }
    }
}

/// solves the periodic rate implied by a fixed-installment schedule
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RateSolver {
    config: SolverConfig,
}

impl RateSolver {
    pub fn new(config: SolverConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// solve from loose values
    pub fn solve(
        &self,
        principal: f64,
        periods: u32,
        installment: f64,
        periods_per_year: u32,
    ) -> Result<LoanResult> {
        self.calculate(&LoanInputs {
            principal,
            periods,
            installment,
            periods_per_year,
        })
    }

    pub fn calculate(&self, inputs: &LoanInputs) -> Result<LoanResult> {
        self.calculate_detailed(inputs).map(|(result, _)| result)
    }

    /// calculate and report how the search went
    pub fn calculate_detailed(&self, inputs: &LoanInputs) -> Result<(LoanResult, SolveDiagnostics)> {
        inputs.validate()?;

        let total_paid = inputs.total_paid();
        let total_interest = total_paid - inputs.principal;

        if total_paid <= inputs.principal + self.config.precision {
            debug!(total_paid, principal = inputs.principal, "no net interest, skipping rate search");
            return Ok((
                LoanResult::zero_interest(total_paid, total_interest),
                SolveDiagnostics::zero_interest(),
            ));
        }

        let npv = |rate: f64| annuity_npv(inputs, rate);
        let bracket = expand_bracket(npv, &self.config)?;
        let root = bisect(npv, bracket, &self.config);

        debug!(
            periodic_rate = root.value,
            iterations = root.iterations,
            expansions = bracket.expansions,
            termination = ?root.termination,
            "solved periodic rate"
        );

        let result = LoanResult {
            total_paid,
            total_interest,
            periodic_rate: root.value,
            nominal_apr: nominal_apr(root.value, inputs.periods_per_year),
            effective_apr: effective_apr(root.value, inputs.periods_per_year),
        };

        let diagnostics = SolveDiagnostics {
            termination: root.termination,
            bracket_expansions: bracket.expansions,
            iterations: root.iterations,
            low: root.low,
            high: root.high,
        };

        Ok((result, diagnostics))
    }
}

/// solve the implied rate with the default solver
pub fn solve(principal: f64, periods: u32, installment: f64, periods_per_year: u32) -> Result<LoanResult> {
    RateSolver::default().solve(principal, periods, installment, periods_per_year)
}

/// [`solve`] taking an input record
pub fn calculate(inputs: &LoanInputs) -> Result<LoanResult> {
    RateSolver::default().calculate(inputs)
}
