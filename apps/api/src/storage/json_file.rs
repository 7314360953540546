//! File-backed storage: two JSON files under a data directory, one per
//! well-known key (`current.json`, `saved.json`).
//!
//! Writes use the write-replace pattern (temp file + rename) so a crash
//! mid-write never leaves a torn document behind.

use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::warn;

use crate::models::cv::CvDocument;
use crate::storage::DocumentStorage;

const CURRENT_FILE: &str = "current.json";
const SAVED_FILE: &str = "saved.json";

pub struct JsonFileStorage {
    dir: PathBuf,
}

impl JsonFileStorage {
    /// Creates the adapter rooted at `dir`. The directory is created on
    /// first write; if that fails, the adapter degrades to a no-op.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn current_path(&self) -> PathBuf {
        self.dir.join(CURRENT_FILE)
    }

    fn saved_path(&self) -> PathBuf {
        self.dir.join(SAVED_FILE)
    }

    async fn read_json<T: serde::de::DeserializeOwned>(&self, path: &Path) -> Option<T> {
        let text = fs::read_to_string(path).await.ok()?;
        match serde_json::from_str(&text) {
            Ok(v) => Some(v),
            Err(e) => {
                warn!("Ignoring unreadable storage file {}: {e}", path.display());
                None
            }
        }
    }

    /// Write-replace: temp file, flush, atomic rename. All failures are
    /// logged and swallowed — persistence is best-effort.
    async fn write_json<T: serde::Serialize>(&self, path: &Path, value: &T) {
        if let Err(e) = fs::create_dir_all(&self.dir).await {
            warn!("Storage unavailable, skipping write to {}: {e}", path.display());
            return;
        }
        let json = match serde_json::to_string_pretty(value) {
            Ok(j) => j,
            Err(e) => {
                warn!("Failed to serialize for {}: {e}", path.display());
                return;
            }
        };
        let tmp = path.with_extension("json.tmp");
        let result = async {
            let mut f = fs::File::create(&tmp).await?;
            f.write_all(json.as_bytes()).await?;
            f.sync_all().await?;
            fs::rename(&tmp, path).await
        }
        .await;
        if let Err(e) = result {
            warn!("Failed to persist {}: {e}", path.display());
        }
    }
}

#[async_trait::async_trait]
impl DocumentStorage for JsonFileStorage {
    async fn save_current(&self, doc: &CvDocument) {
        self.write_json(&self.current_path(), doc).await;

        let mut saved = self.list_saved().await;
        match saved.iter_mut().find(|d| d.id == doc.id) {
            Some(existing) => *existing = doc.clone(),
            None => saved.push(doc.clone()),
        }
        self.write_json(&self.saved_path(), &saved).await;
    }

    async fn load_current(&self) -> Option<CvDocument> {
        self.read_json(&self.current_path()).await
    }

    async fn list_saved(&self) -> Vec<CvDocument> {
        self.read_json(&self.saved_path()).await.unwrap_or_default()
    }

    async fn delete_saved(&self, id: &str) {
        let saved = self.list_saved().await;
        let remaining: Vec<CvDocument> = saved.into_iter().filter(|d| d.id != id).collect();
        self.write_json(&self.saved_path(), &remaining).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::cv::CvPatch;

    fn named_doc(name: &str) -> CvDocument {
        CvDocument::empty().merged(CvPatch {
            personal_details: Some(crate::models::cv::PersonalDetails {
                full_name: name.to_string(),
                ..Default::default()
            }),
            ..CvPatch::default()
        })
    }

    #[tokio::test]
    async fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path());

        let doc = named_doc("Thabo Mabena");
        storage.save_current(&doc).await;

        let loaded = storage.load_current().await.expect("document saved");
        assert_eq!(loaded, doc);
    }

    #[tokio::test]
    async fn test_save_current_upserts_into_saved_collection() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path());

        let a = named_doc("A");
        let b = named_doc("B");
        storage.save_current(&a).await;
        storage.save_current(&b).await;

        // Re-save A with changes: replaced in place, position kept.
        let mut a2 = a.clone();
        a2.personal_details.summary = "Updated".to_string();
        storage.save_current(&a2).await;

        let saved = storage.list_saved().await;
        assert_eq!(saved.len(), 2);
        assert_eq!(saved[0].id, a.id);
        assert_eq!(saved[0].personal_details.summary, "Updated");
        assert_eq!(saved[1].id, b.id);
    }

    #[tokio::test]
    async fn test_delete_saved_removes_exactly_one_and_keeps_order() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path());

        let docs: Vec<CvDocument> = (0..3).map(|i| named_doc(&format!("doc-{i}"))).collect();
        for d in &docs {
            storage.save_current(d).await;
        }

        storage.delete_saved(&docs[1].id).await;

        let saved = storage.list_saved().await;
        assert_eq!(saved.len(), 2);
        assert_eq!(saved[0].id, docs[0].id);
        assert_eq!(saved[1].id, docs[2].id);
    }

    #[tokio::test]
    async fn test_delete_missing_id_is_a_noop() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path());

        let doc = named_doc("Keep me");
        storage.save_current(&doc).await;
        storage.delete_saved("cv-does-not-exist").await;

        assert_eq!(storage.list_saved().await.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_saved_does_not_touch_current() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path());

        let doc = named_doc("Still editing");
        storage.save_current(&doc).await;
        storage.delete_saved(&doc.id).await;

        assert!(storage.list_saved().await.is_empty());
        assert_eq!(storage.load_current().await.unwrap().id, doc.id);
    }

    #[tokio::test]
    async fn test_unavailable_medium_reads_empty_writes_noop() {
        // A path that cannot be created as a directory.
        let file = tempfile::NamedTempFile::new().unwrap();
        let blocked = file.path().join("nested");
        let storage = JsonFileStorage::new(blocked);

        assert!(storage.load_current().await.is_none());
        assert!(storage.list_saved().await.is_empty());
        // Writes must not panic or error.
        storage.save_current(&named_doc("ghost")).await;
        storage.delete_saved("anything").await;
        assert!(storage.load_current().await.is_none());
    }

    #[tokio::test]
    async fn test_corrupt_file_reads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        tokio::fs::write(dir.path().join(CURRENT_FILE), "{not json")
            .await
            .unwrap();
        let storage = JsonFileStorage::new(dir.path());
        assert!(storage.load_current().await.is_none());
    }
}
