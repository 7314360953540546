//! In-memory storage, for store and router tests that need to observe
//! persisted state without touching the filesystem.

use tokio::sync::RwLock;

use crate::models::cv::CvDocument;
use crate::storage::DocumentStorage;

#[derive(Default)]
pub struct MemoryStorage {
    current: RwLock<Option<CvDocument>>,
    saved: RwLock<Vec<CvDocument>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl DocumentStorage for MemoryStorage {
    async fn save_current(&self, doc: &CvDocument) {
        *self.current.write().await = Some(doc.clone());

        let mut saved = self.saved.write().await;
        match saved.iter_mut().find(|d| d.id == doc.id) {
            Some(existing) => *existing = doc.clone(),
            None => saved.push(doc.clone()),
        }
    }

    async fn load_current(&self) -> Option<CvDocument> {
        self.current.read().await.clone()
    }

    async fn list_saved(&self) -> Vec<CvDocument> {
        self.saved.read().await.clone()
    }

    async fn delete_saved(&self, id: &str) {
        self.saved.write().await.retain(|d| d.id != id);
    }
}
