mod assist;
mod config;
mod errors;
mod export;
mod models;
mod routes;
mod state;
mod storage;
mod store;
mod templates;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::assist::AssistClient;
use crate::config::Config;
use crate::models::cv::CvDocument;
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::{DocumentStorage, JsonFileStorage};
use crate::store::CvStore;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let target = env!("CARGO_PKG_NAME").replace('-', "_");
            EnvFilter::new(format!("{target}={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CV API v{}", env!("CARGO_PKG_VERSION"));

    // Document storage: best-effort JSON files under the data directory.
    let storage: Arc<dyn DocumentStorage> = Arc::new(JsonFileStorage::new(&config.data_dir));
    info!("Document storage at {}", config.data_dir.display());

    // Seed the store from the last session, or start blank.
    let initial = match storage.load_current().await {
        Some(doc) => {
            info!("Restored current document {}", doc.id);
            doc
        }
        None => CvDocument::empty(),
    };
    let store = Arc::new(CvStore::new(initial, Arc::clone(&storage)));

    // Observer hook: every mutation is visible in the logs.
    store.subscribe(|doc| {
        debug!(
            "Document {} updated (template={}, lastModified={})",
            doc.id,
            doc.template.as_str(),
            doc.last_modified
        );
    });

    // Content-assist client; degraded when no credential is configured.
    let assist = AssistClient::new(config.gemini_api_key.clone());
    if assist.is_available() {
        info!("Content-assist client initialized");
    } else {
        warn!("No Gemini API key configured; AI features are disabled");
    }

    let state = AppState {
        store,
        storage,
        assist,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
