use payment_gateway::app::config::Config;
use payment_gateway::app::router::build_router;
use payment_gateway::services::{InMemoryRepository, PaymentGateway, SimulatedBank};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = Config::from_env();
    info!("Starting payment gateway on port {}", config.server_port);

    let gateway = Arc::new(PaymentGateway::new(
        SimulatedBank::new(),
        InMemoryRepository::new(),
    ));
    let app = build_router(config.api_key.clone(), gateway);

    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = TcpListener::bind(&addr).await.unwrap();
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await.unwrap();
}
