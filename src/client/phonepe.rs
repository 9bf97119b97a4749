use crate::client::{PayRequest, PayResponse, PaymentClient};
use crate::config::AppConfig;
use anyhow::{bail, Result};
use serde::Deserialize;
use tokio::sync::Mutex;

#[derive(Debug, Clone, Deserialize)]
struct OauthToken {
    access_token: String,
    expires_at: i64,
}

pub struct PhonepeClient {
    base_url: String,
    auth_url: String,
    client_id: String,
    client_secret: String,
    client_version: String,
    timeout_ms: u64,
    client: reqwest::Client,
    token: Mutex<Option<OauthToken>>,
}

impl PhonepeClient {
    pub fn new(cfg: &AppConfig) -> Self {
        Self {
            base_url: cfg.phonepe_base_url.clone(),
            auth_url: cfg.phonepe_auth_url.clone(),
            client_id: cfg.phonepe_client_id.clone(),
            client_secret: cfg.phonepe_client_secret.clone(),
            client_version: cfg.phonepe_client_version.clone(),
            timeout_ms: cfg.gateway_timeout_ms,
            client: reqwest::Client::new(),
            token: Mutex::new(None),
        }
    }

    async fn access_token(&self) -> Result<String> {
        let mut cached = self.token.lock().await;
        if let Some(token) = cached.as_ref() {
            if token.expires_at - 60 > chrono::Utc::now().timestamp() {
                return Ok(token.access_token.clone());
            }
        }

        let token_url = format!("{}/v1/oauth/token", self.auth_url);
        let resp = self
            .client
            .post(token_url)
            .form(&[
                ("client_id", self.client_id.as_str()),
                ("client_version", self.client_version.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("grant_type", "client_credentials"),
            ])
            .timeout(std::time::Duration::from_millis(self.timeout_ms))
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("phonepe oauth failed: HTTP_{} {}", status.as_u16(), snippet(&body));
        }

        let token: OauthToken = resp.json().await?;
        let access = token.access_token.clone();
        *cached = Some(token);
        Ok(access)
    }
}

#[async_trait::async_trait]
impl PaymentClient for PhonepeClient {
    fn name(&self) -> &'static str {
        "phonepe"
    }

    async fn pay(&self, request: PayRequest) -> Result<PayResponse> {
        let token = self.access_token().await?;
        let pay_url = format!("{}/checkout/v2/pay", self.base_url);
        let resp = self
            .client
            .post(pay_url)
            .header("Authorization", format!("O-Bearer {}", token))
            .json(&request)
            .timeout(std::time::Duration::from_millis(self.timeout_ms))
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("phonepe pay failed: HTTP_{} {}", status.as_u16(), snippet(&body));
        }

        Ok(resp.json::<PayResponse>().await?)
    }

    async fn get_order_status(&self, merchant_transaction_id: &str) -> Result<serde_json::Value> {
        let token = self.access_token().await?;
        let status_url = format!(
            "{}/checkout/v2/order/{}/status",
            self.base_url, merchant_transaction_id
        );
        let resp = self
            .client
            .get(status_url)
            .header("Authorization", format!("O-Bearer {}", token))
            .timeout(std::time::Duration::from_millis(self.timeout_ms))
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("phonepe status failed: HTTP_{} {}", status.as_u16(), snippet(&body));
        }

        Ok(resp.json::<serde_json::Value>().await?)
    }
}

fn snippet(body: &str) -> String {
    body.chars().take(200).collect()
}
