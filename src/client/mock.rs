use crate::client::{PayRequest, PayResponse, PaymentClient};
use anyhow::{bail, Result};
use serde_json::json;

pub struct MockPaymentClient {
    pub behavior: String,
}

#[async_trait::async_trait]
impl PaymentClient for MockPaymentClient {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn pay(&self, request: PayRequest) -> Result<PayResponse> {
        match self.behavior.as_str() {
            "ALWAYS_FAILURE" => bail!("mock decline"),
            "ALWAYS_TIMEOUT" => bail!("timeout"),
            _ => Ok(PayResponse {
                order_id: request.merchant_order_id,
                state: "PENDING".to_string(),
                expire_at: (chrono::Utc::now() + chrono::Duration::minutes(20)).timestamp_millis(),
                redirect_url: format!(
                    "https://mercury-uat.phonepe.com/transact/mock?token={}",
                    uuid::Uuid::new_v4()
                ),
            }),
        }
    }

    async fn get_order_status(&self, merchant_transaction_id: &str) -> Result<serde_json::Value> {
        match self.behavior.as_str() {
            "ALWAYS_FAILURE" => bail!("mock decline"),
            "ALWAYS_TIMEOUT" => bail!("timeout"),
            _ => Ok(json!({
                "orderId": merchant_transaction_id,
                "state": "COMPLETED",
                "expireAt": (chrono::Utc::now() + chrono::Duration::minutes(20)).timestamp_millis(),
                "paymentDetails": []
            })),
        }
    }
}
