//! HTTP error rendering.
//!
//! Every rejection of the ledger is reported as `400 Bad Request` with a JSON
//! body `{"error": "..."}`. Rejections that depend on the balance also carry
//! the current `balance`.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::AppError;
use crate::domain::Amount;

/// JSON body of an error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<Amount>,
}

/// Error returned by the HTTP handlers.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorBody,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: ErrorBody {
                error: message.into(),
                balance: None,
            },
        }
    }

    fn with_balance(mut self, balance: Amount) -> Self {
        self.body.balance = Some(balance);
        self
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        let message = err.to_string();
        match err {
            AppError::InsufficientFunds { balance, .. }
            | AppError::AmountTooLarge { balance, .. }
            | AppError::AccountNotEmpty { balance } => {
                Self::bad_request(message).with_balance(balance)
            }
            _ => Self::bad_request(message),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        debug!("Rejected request body: {}", rejection.body_text());
        Self::bad_request(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_bad_request() {
        let err = ApiError::from(AppError::AccountNotFound);
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.body.error, "Account not found");
        assert_eq!(err.body.balance, None);
    }

    #[test]
    fn test_insufficient_funds_carries_balance() {
        let err = ApiError::from(AppError::InsufficientFunds {
            balance: 100,
            requested: 150,
        });
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.body.error, "Insufficient funds");
        assert_eq!(err.body.balance, Some(100));
    }

    #[test]
    fn test_amount_too_large_carries_balance() {
        let err = ApiError::from(AppError::AmountTooLarge {
            balance: Amount::MAX,
            requested: 1,
        });
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.body.error, "Amount too large");
        assert_eq!(err.body.balance, Some(Amount::MAX));
    }

    #[test]
    fn test_error_body_omits_missing_balance() {
        let body = ErrorBody {
            error: "Name is required".into(),
            balance: None,
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"error":"Name is required"}"#);
    }
}
