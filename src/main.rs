use phonepe_gateway::client::mock::MockPaymentClient;
use phonepe_gateway::client::phonepe::PhonepeClient;
use phonepe_gateway::client::PaymentClient;
use phonepe_gateway::config::AppConfig;
use phonepe_gateway::service::payment_service::PaymentService;
use phonepe_gateway::AppState;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = AppConfig::from_env();

    let client: Arc<dyn PaymentClient> = if cfg.client_mode.eq_ignore_ascii_case("mock") {
        Arc::new(MockPaymentClient {
            behavior: "ALWAYS_SUCCESS".to_string(),
        })
    } else {
        Arc::new(PhonepeClient::new(&cfg))
    };
    tracing::info!("payment client: {}", client.name());

    let payment_service = PaymentService {
        client,
        callback_url: cfg.phonepe_webhook_url.clone(),
    };

    let state = AppState { payment_service };
    let app = phonepe_gateway::app(state);

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!("listening on {}", cfg.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
