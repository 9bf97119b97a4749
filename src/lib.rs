use axum::routing::{get, post};
use axum::Router;

pub mod client;
pub mod config;
pub mod domain {
    pub mod payment;
}
pub mod http {
    pub mod handlers {
        pub mod payments;
    }
}
pub mod service {
    pub mod payment_service;
}

#[derive(Clone)]
pub struct AppState {
    pub payment_service: service::payment_service::PaymentService,
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(http::handlers::payments::health))
        .route(
            "/api/payment/initiate",
            post(http::handlers::payments::initiate_payment),
        )
        .route(
            "/api/payment/status/:transaction_id",
            get(http::handlers::payments::get_payment_status),
        )
        .route(
            "/api/payment/webhook",
            post(http::handlers::payments::receive_webhook),
        )
        .with_state(state)
}
