#[derive(Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub client_mode: String,
    pub phonepe_base_url: String,
    pub phonepe_auth_url: String,
    pub phonepe_client_id: String,
    pub phonepe_client_secret: String,
    pub phonepe_client_version: String,
    pub phonepe_webhook_url: Option<String>,
    pub gateway_timeout_ms: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            client_mode: std::env::var("PHONEPE_MODE").unwrap_or_else(|_| "mock".to_string()),
            phonepe_base_url: std::env::var("PHONEPE_BASE_URL")
                .unwrap_or_else(|_| "https://api-preprod.phonepe.com/apis/pg-sandbox".to_string()),
            phonepe_auth_url: std::env::var("PHONEPE_AUTH_URL")
                .unwrap_or_else(|_| "https://api-preprod.phonepe.com/apis/pg-sandbox".to_string()),
            phonepe_client_id: std::env::var("PHONEPE_CLIENT_ID").unwrap_or_default(),
            phonepe_client_secret: std::env::var("PHONEPE_CLIENT_SECRET").unwrap_or_default(),
            phonepe_client_version: std::env::var("PHONEPE_CLIENT_VERSION")
                .unwrap_or_else(|_| "1".to_string()),
            phonepe_webhook_url: std::env::var("PHONEPE_WEBHOOK_URL").ok(),
            gateway_timeout_ms: std::env::var("GATEWAY_TIMEOUT_MS")
                .ok()
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(10_000),
        }
    }
}
