use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::config::SolverConfig;
use crate::errors::{RateError, Result};

/// why the rate search stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// no net interest, the search never ran
    ZeroInterest,
    /// residual fell below the configured precision
    Converged,
    /// the midpoint collapsed onto a bracket end
    NoProgress,
    /// iteration budget ran out, midpoint returned as best estimate
    IterationBudgetExhausted,
}

/// interval known to contain the root
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    pub low: f64,
    pub high: f64,
    /// how many times the upper bound was doubled
    pub expansions: u32,
}

/// located root with the bracket it was taken from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Root {
    pub value: f64,
    pub iterations: u32,
    pub termination: Termination,
    pub low: f64,
    pub high: f64,
}

/// grow `[0, initial_upper_bound]` by doubling until `f` is no longer
/// negative at the upper end
///
/// `f` must be increasing with `f(0) < 0`. fails once the upper bound passes
/// the configured ceiling
pub fn expand_bracket<F>(f: F, config: &SolverConfig) -> Result<Bracket>
where
    F: Fn(f64) -> f64,
{
    let mut low = 0.0;
    let mut high = config.initial_upper_bound;
    let mut expansions = 0;

    while f(high) < 0.0 {
        low = high;
        high *= 2.0;
        expansions += 1;
        trace!(low, high, "doubling upper rate bound");

        if high > config.rate_ceiling {
            warn!(high, ceiling = config.rate_ceiling, "no rate found below ceiling");
            return Err(RateError::RateBoundsExceeded {
                ceiling: config.rate_ceiling,
                high,
            });
        }
    }

    Ok(Bracket { low, high, expansions })
}

/// halve the bracket until `|f(mid)|` drops below precision
///
/// never fails: stops early when the midpoint stops moving, and hands back
/// the last midpoint if the iteration budget runs out
pub fn bisect<F>(f: F, bracket: Bracket, config: &SolverConfig) -> Root
where
    F: Fn(f64) -> f64,
{
    let mut low = bracket.low;
    let mut high = bracket.high;

    for iteration in 1..=config.max_iterations {
        let mid = (low + high) / 2.0;

        if mid == low || mid == high {
            return Root {
                value: mid,
                iterations: iteration,
                termination: Termination::NoProgress,
                low,
                high,
            };
        }

        let balance = f(mid);
        if balance.abs() < config.precision {
            return Root {
                value: mid,
                iterations: iteration,
                termination: Termination::Converged,
                low,
                high,
            };
        }

        // negative balance means the guess is still too low
        if balance < 0.0 {
            low = mid;
        } else {
            high = mid;
        }
    }

    warn!(
        iterations = config.max_iterations,
        low, high, "bisection budget exhausted, returning midpoint"
    );

    Root {
        value: (low + high) / 2.0,
        iterations: config.max_iterations,
        termination: Termination::IterationBudgetExhausted,
        low,
        high,
    }
}
