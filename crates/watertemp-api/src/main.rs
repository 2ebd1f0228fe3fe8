mod routes;

use std::sync::Arc;

use anyhow::Result;
use axum::{routing::post, Router};
use routes::analyze;
use tokio::net::TcpListener;
use tracing::{info, Level};
use watertemp_core::AnalysisConfig;

#[derive(Clone)]
pub struct AppState {
    config: AnalysisConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let port = std::env::var("PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(3000u16);

    let app_state = Arc::new(AppState {
        config: AnalysisConfig::default(),
    });

    let router = Router::new()
        .route("/analyses", post(analyze))
        .with_state(app_state);

    let listener = TcpListener::bind((std::net::Ipv4Addr::UNSPECIFIED, port)).await?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router.into_make_service()).await?;

    Ok(())
}
