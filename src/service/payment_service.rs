use crate::client::{PayRequest, PaymentClient, PaymentInstrument};
use crate::domain::payment::{FailureBody, InitiationAccepted};
use axum::http::StatusCode;
use serde_json::Value;
use std::sync::Arc;

#[derive(Clone)]
pub struct PaymentService {
    pub client: Arc<dyn PaymentClient>,
    pub callback_url: Option<String>,
}

impl PaymentService {
    pub async fn initiate(
        &self,
        body: Value,
    ) -> Result<InitiationAccepted, (StatusCode, FailureBody)> {
        let fields = validate_initiation(&body)?;

        let request = PayRequest {
            merchant_transaction_id: fields.merchant_transaction_id.clone(),
            merchant_order_id: fields.merchant_transaction_id,
            merchant_user_id: fields.merchant_user_id,
            amount: fields.amount_minor,
            redirect_url: None,
            callback_url: self.callback_url.clone(),
            payment_instrument: PaymentInstrument::PayPage,
        };

        match self.client.pay(request).await {
            Ok(resp) => {
                tracing::info!(
                    "pay response from {}: order_id={} state={}",
                    self.client.name(),
                    resp.order_id,
                    resp.state
                );
                Ok(InitiationAccepted {
                    success: true,
                    order_id: resp.order_id,
                    state: resp.state,
                    expire_at: resp.expire_at,
                    redirect_url: resp.redirect_url,
                })
            }
            Err(e) => {
                tracing::error!("payment initiate error: {}", e);
                Err(downstream("Payment initiation failed", &e))
            }
        }
    }

    pub async fn order_status(
        &self,
        transaction_id: &str,
    ) -> Result<Value, (StatusCode, FailureBody)> {
        match self.client.get_order_status(transaction_id).await {
            Ok(status) => Ok(status),
            Err(e) => {
                tracing::error!("order status error: {}", e);
                Err(downstream("Status check failed", &e))
            }
        }
    }
}

#[derive(Debug)]
pub struct ValidatedInitiation {
    pub merchant_transaction_id: String,
    pub merchant_user_id: String,
    pub amount_minor: i64,
}

pub fn validate_initiation(body: &Value) -> Result<ValidatedInitiation, (StatusCode, FailureBody)> {
    let amount = match parse_amount(body.get("amount")) {
        Some(v) => v,
        None => return Err(invalid("Invalid or missing amount")),
    };

    let merchant_transaction_id = match body.get("merchantTransactionId").and_then(Value::as_str) {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => return Err(invalid("Invalid or missing merchantTransactionId")),
    };

    let merchant_user_id = match body.get("userId").and_then(Value::as_str) {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => "guest_user".to_string(),
    };

    Ok(ValidatedInitiation {
        merchant_transaction_id,
        merchant_user_id,
        amount_minor: to_minor_units(amount),
    })
}

pub fn to_minor_units(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}

fn parse_amount(value: Option<&Value>) -> Option<f64> {
    match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => match s.trim().parse::<f64>() {
            Ok(v) if !v.is_nan() => Some(v),
            _ => None,
        },
        _ => None,
    }
}

fn invalid(message: &str) -> (StatusCode, FailureBody) {
    (
        StatusCode::BAD_REQUEST,
        FailureBody {
            success: false,
            message: message.to_string(),
            error: None,
        },
    )
}

fn downstream(message: &str, e: &anyhow::Error) -> (StatusCode, FailureBody) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        FailureBody {
            success: false,
            message: message.to_string(),
            error: Some(e.to_string()),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn converts_amount_to_minor_units() {
        assert_eq!(to_minor_units(10.0), 1000);
        assert_eq!(to_minor_units(10.005), 1001);
        assert_eq!(to_minor_units(49.99), 4999);
    }

    #[test]
    fn accepts_numeric_string_amount() {
        let body = json!({"amount": "25.50", "merchantTransactionId": "TXN1"});
        let v = validate_initiation(&body).unwrap();
        assert_eq!(v.amount_minor, 2550);
    }

    #[test]
    fn rejects_missing_amount() {
        let err = validate_initiation(&json!({"merchantTransactionId": "TXN1"})).unwrap_err();
        assert_eq!(err.0, StatusCode::BAD_REQUEST);
        assert_eq!(err.1.message, "Invalid or missing amount");
        assert!(err.1.error.is_none());
    }

    #[test]
    fn rejects_non_numeric_amount() {
        for amount in [
            json!("abc"),
            json!(""),
            json!("NaN"),
            json!(true),
            json!(null),
            json!([10]),
            json!({"value": 10}),
        ] {
            let body = json!({"amount": amount, "merchantTransactionId": "TXN1"});
            let err = validate_initiation(&body).unwrap_err();
            assert_eq!(err.1.message, "Invalid or missing amount");
        }
    }

    #[test]
    fn rejects_missing_or_non_string_transaction_id() {
        let missing = validate_initiation(&json!({"amount": 10})).unwrap_err();
        assert_eq!(missing.0, StatusCode::BAD_REQUEST);
        assert_eq!(missing.1.message, "Invalid or missing merchantTransactionId");

        let numeric =
            validate_initiation(&json!({"amount": 10, "merchantTransactionId": 42})).unwrap_err();
        assert_eq!(numeric.1.message, "Invalid or missing merchantTransactionId");

        let empty =
            validate_initiation(&json!({"amount": 10, "merchantTransactionId": ""})).unwrap_err();
        assert_eq!(empty.1.message, "Invalid or missing merchantTransactionId");
    }

    #[test]
    fn defaults_user_id_to_guest() {
        let body = json!({"amount": 10, "merchantTransactionId": "TXN1"});
        let v = validate_initiation(&body).unwrap();
        assert_eq!(v.merchant_user_id, "guest_user");

        let blank = json!({"amount": 10, "merchantTransactionId": "TXN1", "userId": ""});
        let v = validate_initiation(&blank).unwrap();
        assert_eq!(v.merchant_user_id, "guest_user");
    }

    #[test]
    fn keeps_explicit_user_id() {
        let body = json!({"amount": 10, "merchantTransactionId": "TXN1", "userId": "u1"});
        let v = validate_initiation(&body).unwrap();
        assert_eq!(v.merchant_user_id, "u1");
    }
}
