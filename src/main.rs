//! ABC-XYZ analysis server

use std::sync::Arc;

use http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use abc_xyz::adapters::http::{api_router, AnalysisHandlers};
use abc_xyz::adapters::{
    load_transactions_file, InMemoryAnalysisResultStore, InMemoryConfigurationStore,
    InMemoryTransactionSource,
};
use abc_xyz::application::{
    GetAnalysisHandler, GetAnalysisSummaryHandler, ListAnalysesHandler, RunAnalysisHandler,
};
use abc_xyz::config::{AppConfig, ServerConfig};
use abc_xyz::telemetry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    telemetry::init(&config.server);

    // Seed ports
    let configurations = Arc::new(InMemoryConfigurationStore::new());
    let seed = config.analysis.to_configuration();
    info!(config_id = %seed.config_id, name = %seed.config_name, "Seeding default configuration");
    configurations.insert(seed).await;

    let transactions = Arc::new(InMemoryTransactionSource::new());
    if let Some(path) = &config.data.transactions_csv {
        transactions.extend(load_transactions_file(path)?).await;
    }

    let results = Arc::new(InMemoryAnalysisResultStore::new());

    // Wire handlers
    let handlers = AnalysisHandlers::new(
        Arc::new(RunAnalysisHandler::new(
            transactions.clone(),
            configurations.clone(),
            results.clone(),
        )),
        Arc::new(GetAnalysisHandler::new(results.clone())),
        Arc::new(GetAnalysisSummaryHandler::new(results.clone())),
        Arc::new(ListAnalysesHandler::new(results)),
        config.analysis.top_items_limit,
    );

    let app = api_router(handlers)
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(cors_layer(&config.server))
        .layer(TraceLayer::new_for_http());

    let addr = config.server.socket_addr()?;
    info!(%addr, log_format = ?config.server.log_format, "Starting ABC-XYZ server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
