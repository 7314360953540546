use std::sync::Arc;

use crate::assist::AssistClient;
use crate::config::Config;
use crate::storage::DocumentStorage;
use crate::store::CvStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The single current-document holder; all mutations go through it.
    pub store: Arc<CvStore>,
    /// Storage is also reachable directly for the saved-collection reads
    /// and deletes that bypass the current document.
    pub storage: Arc<dyn DocumentStorage>,
    pub assist: AssistClient,
    pub config: Config,
}
