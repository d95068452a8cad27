use serde::{Deserialize, Serialize};

use crate::errors::{RateError, Result};

/// tolerance for the zero-interest check and bisection convergence
pub const PRECISION: f64 = 1e-9;

/// bisection iteration budget
pub const MAX_ITERATIONS: u32 = 10_000;

/// first upper bound tried when bracketing the root
pub const INITIAL_UPPER_BOUND: f64 = 1.0;

/// bracket expansion gives up once the upper bound passes this rate
/// (a periodic rate of 100,000,000%)
pub const RATE_CEILING: f64 = 1e6;

/// rate solver configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub precision: f64,
    pub max_iterations: u32,
    pub initial_upper_bound: f64,
    pub rate_ceiling: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            precision: PRECISION,
            max_iterations: MAX_ITERATIONS,
            initial_upper_bound: INITIAL_UPPER_BOUND,
            rate_ceiling: RATE_CEILING,
        }
    }
}

impl SolverConfig {
    pub fn with_precision(mut self, precision: f64) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_initial_upper_bound(mut self, bound: f64) -> Self {
        self.initial_upper_bound = bound;
        self
    }

    pub fn with_rate_ceiling(mut self, ceiling: f64) -> Self {
        self.rate_ceiling = ceiling;
        self
    }

    /// load from json, missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SolverConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.precision > 0.0) || !self.precision.is_finite() {
            return Err(RateError::InvalidConfiguration {
                message: format!("precision must be positive and finite, got {}", self.precision),
            });
        }

        if self.max_iterations == 0 {
            return Err(RateError::InvalidConfiguration {
                message: "max_iterations must be at least 1".to_string(),
            });
        }

        if !(self.initial_upper_bound > 0.0) || !self.initial_upper_bound.is_finite() {
            return Err(RateError::InvalidConfiguration {
                message: format!(
                    "initial_upper_bound must be positive and finite, got {}",
                    self.initial_upper_bound
                ),
            });
        }

        if !(self.rate_ceiling > self.initial_upper_bound) {
            return Err(RateError::InvalidConfiguration {
                message: format!(
                    "rate_ceiling {} must exceed initial_upper_bound {}",
                    self.rate_ceiling, self.initial_upper_bound
                ),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SolverConfig::default();
        assert_eq!(config.precision, 1e-9);
        assert_eq!(config.max_iterations, 10_000);
        assert_eq!(config.initial_upper_bound, 1.0);
        assert_eq!(config.rate_ceiling, 1e6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let config = SolverConfig::from_json(r#"{"max_iterations": 200}"#).unwrap();
        assert_eq!(config.max_iterations, 200);
        assert_eq!(config.precision, PRECISION);
        assert_eq!(config.rate_ceiling, RATE_CEILING);
    }

    #[test]
    fn test_from_json_rejects_bad_values() {
        assert!(matches!(
            SolverConfig::from_json(r#"{"precision": 0.0}"#),
            Err(RateError::InvalidConfiguration { .. })
        ));
        assert!(matches!(
            SolverConfig::from_json(r#"{"max_iterations": "many"}"#),
            Err(RateError::Serialization { .. })
        ));
    }

    #[test]
    fn test_validate() {
        let config = SolverConfig::default().with_max_iterations(0);
        assert!(config.validate().is_err());

        let config = SolverConfig::default().with_rate_ceiling(0.5);
        assert!(config.validate().is_err());

        let config = SolverConfig::default().with_initial_upper_bound(f64::NAN);
        assert!(config.validate().is_err());

        let config = SolverConfig::default()
            .with_precision(1e-12)
            .with_initial_upper_bound(0.5)
            .with_rate_ceiling(10.0);
        assert!(config.validate().is_ok());
    }
}
