use anyhow::Result;
use serde::{Deserialize, Serialize};

pub mod mock;
pub mod phonepe;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentInstrument {
    PayPage,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayRequest {
    pub merchant_transaction_id: String,
    pub merchant_order_id: String,
    pub merchant_user_id: String,
    pub amount: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    pub payment_instrument: PaymentInstrument,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayResponse {
    pub order_id: String,
    pub state: String,
    pub expire_at: i64,
    pub redirect_url: String,
}

#[async_trait::async_trait]
pub trait PaymentClient: Send + Sync {
    fn name(&self) -> &'static str;

    async fn pay(&self, request: PayRequest) -> Result<PayResponse>;

    async fn get_order_status(&self, merchant_transaction_id: &str) -> Result<serde_json::Value>;
}
