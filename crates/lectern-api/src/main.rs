//! lectern-api - HTTP API server for lectern

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lectern_api::{build_router, ApiConfig, AppState, ContextServices};
use lectern_context::{FragmentStore, ResearchAgent};
use lectern_inference::{LectureEditor, OpenAIBackend};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing with configurable output
    //
    // Environment variables:
    //   LOG_FORMAT  - "json" or "text" (default: "text")
    //   RUST_LOG    - standard env filter (default: "lectern_api=debug,tower_http=debug")
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "lectern_api=debug,tower_http=debug".into());

    let registry = tracing_subscriber::registry().with(env_filter);
    if log_format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    // Fail fast on missing required configuration
    let config = ApiConfig::from_env()?;
    let backend = Arc::new(OpenAIBackend::from_env()?);

    let editor = Arc::new(LectureEditor::new(backend.clone()));

    let context = match &config.context_db {
        Some(path) => {
            let store = FragmentStore::open(path, backend.clone()).await?;
            info!(path = %path, "retrieval subsystem enabled");
            Some(ContextServices {
                store: Arc::new(store),
                agent: Arc::new(ResearchAgent::new(backend.clone())),
                top_k: config.context_top_k,
            })
        }
        None => {
            info!("retrieval subsystem disabled (CONTEXT_DB not set)");
            None
        }
    };

    let state = AppState { editor, context };
    let app = build_router(state, &config.allowed_origins);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
