/// json response envelope for the request boundary
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{RateError, Result};
use crate::request::LoanRequest;
use crate::types::LoanResult;

/// serializable view of a failed calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorView {
    pub kind: String,
    pub message: String,
}

impl From<&RateError> for ErrorView {
    fn from(err: &RateError) -> Self {
        ErrorView {
            kind: err.kind().to_string(),
            message: err.to_string(),
        }
    }
}

/// either a result or an error, never both
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ok: Option<LoanResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorView>,
}

/// json has no encoding for infinity or NaN, so such results become errors
fn ensure_finite(result: LoanResult) -> Result<LoanResult> {
    match result.non_finite_field() {
        Some(field) => Err(RateError::NonFiniteResult {
            field: field.to_string(),
        }),
        None => Ok(result),
    }
}

impl LoanResponse {
    pub fn from_result(result: Result<LoanResult>) -> Self {
        match result.and_then(ensure_finite) {
            Ok(result) => LoanResponse {
                ok: Some(result),
                error: None,
            },
            Err(err) => LoanResponse {
                ok: None,
                error: Some(ErrorView::from(&err)),
            },
        }
    }

    pub fn is_ok(&self) -> bool {
        self.ok.is_some()
    }

    /// convert to json string
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// evaluate a json-encoded [`LoanRequest`] into a json-encoded [`LoanResponse`]
///
/// malformed requests come back as an error envelope rather than a failure
pub fn evaluate_json(json: &str) -> String {
    let result = serde_json::from_str::<LoanRequest>(json)
        .map_err(RateError::from)
        .and_then(|request| request.evaluate());

    if let Err(err) = &result {
        debug!(kind = err.kind(), error = %err, "loan request failed");
    }

    LoanResponse::from_result(result)
        .to_json()
        .unwrap_or_else(|e| {
            format!(
                r#"{{"error":{{"kind":"serialization","message":{:?}}}}}"#,
                e.to_string()
            )
        })
}
