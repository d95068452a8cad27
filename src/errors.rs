use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RateError {
    #[error("invalid input: {field} must be positive, got {value}")]
    InvalidInput {
        field: String,
        value: String,
    },

    #[error("rate bounds exceeded: no root below periodic rate {ceiling} (upper bound reached {high})")]
    RateBoundsExceeded {
        ceiling: f64,
        high: f64,
    },

    #[error("unparsable number for {field}: {input:?}")]
    UnparsableNumber {
        field: String,
        input: String,
    },

    #[error("invalid installment: {installment}")]
    InvalidInstallment {
        installment: f64,
    },

    #[error("non-finite result: {field} overflowed")]
    NonFiniteResult {
        field: String,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error("serialization error: {message}")]
    Serialization {
        message: String,
    },
}

impl RateError {
    /// build an invalid input error for a named field
    pub fn invalid_input(field: &str, value: impl ToString) -> Self {
        RateError::InvalidInput {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    /// stable snake_case tag for the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            RateError::InvalidInput { .. } => "invalid_input",
            RateError::RateBoundsExceeded { .. } => "rate_bounds_exceeded",
            RateError::UnparsableNumber { .. } => "unparsable_number",
            RateError::InvalidInstallment { .. } => "invalid_installment",
            RateError::NonFiniteResult { .. } => "non_finite_result",
            RateError::InvalidConfiguration { .. } => "invalid_configuration",
            RateError::Serialization { .. } => "serialization",
        }
    }
}

impl From<serde_json::Error> for RateError {
    fn from(e: serde_json::Error) -> Self {
        RateError::Serialization {
            message: e.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = RateError::invalid_input("principal", 0.0);
        assert_eq!(err.to_string(), "invalid input: principal must be positive, got 0");
        assert_eq!(err.kind(), "invalid_input");

        let err = RateError::RateBoundsExceeded { ceiling: 1e6, high: 1048576.0 };
        assert!(err.to_string().contains("rate bounds exceeded"));
        assert_eq!(err.kind(), "rate_bounds_exceeded");

        let err = RateError::NonFiniteResult { field: "effective_apr".to_string() };
        assert_eq!(err.to_string(), "non-finite result: effective_apr overflowed");
        assert_eq!(err.kind(), "non_finite_result");
    }

    #[test]
    fn test_from_serde_json() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: RateError = parse_err.into();
        assert_eq!(err.kind(), "serialization");
    }
}
