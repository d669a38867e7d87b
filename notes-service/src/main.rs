//! Notes Service — in-memory notes REST API with LLM summaries.
//!
//! Notes live only as long as the process. Summaries are produced by
//! OpenAI-style or Gemini-style providers, selected per request.
//!
//! Default: http://0.0.0.0:8000/

mod config;
mod error;
mod providers;
mod routes;
mod store;
mod summary;

use config::Config;
use providers::ProviderRegistry;
use routes::AppState;
use std::sync::Arc;
use store::NoteStore;
use summary::SummaryGateway;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Keys are only checked when a provider is first used
    log::info!(
        "Providers: openai ({}, key {}), gemini ({}, key {})",
        config.openai.model,
        if config.openai.api_key.is_some() { "set" } else { "missing" },
        config.gemini.model,
        if config.gemini.api_key.is_some() { "set" } else { "missing" },
    );

    let store = Arc::new(NoteStore::new());
    let state = Arc::new(AppState {
        store: store.clone(),
        summaries: SummaryGateway::new(
            store,
            ProviderRegistry::from_config(&config),
            config.save_summaries_as_notes,
        ),
    });

    let cors = tower_http::cors::CorsLayer::permissive();
    let app = routes::router(state).layer(cors);

    let addr = config.bind_addr();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            log::error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    log::info!("Notes Service listening on http://{}", addr);

    if let Err(e) = axum::serve(listener, app).await {
        log::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
