pub mod config;
pub mod decimal;
pub mod errors;
pub mod interest;
pub mod request;
pub mod solver;
pub mod types;

// re-export key types
pub use config::SolverConfig;
pub use decimal::Amount;
pub use errors::{RateError, Result};
pub use interest::{effective_apr, installment_for_rate, nominal_apr};
pub use request::{
    derive_installment, evaluate_json, installment_from_amount, installment_from_rate_percent,
    installment_from_total_interest, ErrorView, LoanRequest, LoanResponse,
};
pub use solver::{calculate, solve, RateSolver, SolveDiagnostics, Termination};
pub use types::{CalculationMode, LoanInputs, LoanResult, DEFAULT_PERIODS_PER_YEAR};

// re-export external dependencies that users will need
pub use rust_decimal::Decimal;
