//! Document store — the single in-memory holder of the current CV draft and
//! the only mutation path in the system.
//!
//! Single-writer by construction: every change goes through `update` or
//! `reset`. Updates are optimistic — the in-memory document is replaced and
//! subscribers notified synchronously, then persistence runs fire-and-forget
//! on a dedicated writer task fed by an ordered channel, so the durable
//! state never regresses behind a newer in-memory document even when one
//! save stalls. A failed write is logged inside the storage adapter and
//! never rolled back or retried.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use chrono::Utc;
use tokio::sync::mpsc;
use tracing::debug;

use crate::models::cv::{CvDocument, CvPatch};
use crate::storage::DocumentStorage;

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn Fn(&CvDocument) + Send + Sync>;

pub struct CvStore {
    current: Mutex<CvDocument>,
    /// Auxiliary UI navigation state (builder step index).
    current_step: Mutex<usize>,
    subscribers: Mutex<Vec<(SubscriptionId, Subscriber)>>,
    next_subscription: AtomicU64,
    /// Feeds the writer task; snapshots are enqueued under the document
    /// lock, so channel order is document order.
    persist_tx: mpsc::UnboundedSender<CvDocument>,
}

impl CvStore {
    /// Constructor-injected initial state: callers seed from
    /// `storage.load_current()` or `CvDocument::empty()`.
    ///
    /// Spawns the single persistence writer; saves run one at a time in
    /// mutation order. Must be called from within a Tokio runtime.
    pub fn new(initial: CvDocument, storage: Arc<dyn DocumentStorage>) -> Self {
        let (persist_tx, mut persist_rx) = mpsc::unbounded_channel::<CvDocument>();
        tokio::spawn(async move {
            while let Some(doc) = persist_rx.recv().await {
                debug!("Persisting document {}", doc.id);
                storage.save_current(&doc).await;
            }
        });
        Self {
            current: Mutex::new(initial),
            current_step: Mutex::new(0),
            subscribers: Mutex::new(Vec::new()),
            next_subscription: AtomicU64::new(0),
            persist_tx,
        }
    }

    /// Snapshot of the current document. No side effects.
    pub fn get(&self) -> CvDocument {
        self.current.lock().expect("store lock poisoned").clone()
    }

    /// Shallow-merges `patch` over the current document, stamps
    /// `last_modified`, notifies subscribers synchronously, and persists
    /// fire-and-forget. List-typed fields in the patch replace the whole
    /// list; per-entry edits are read-modify-write on the caller's side.
    pub fn update(&self, patch: CvPatch) {
        let updated = {
            let mut current = self.current.lock().expect("store lock poisoned");
            let previous = current.last_modified;
            let mut next = current.clone().merged(patch);
            // Monotonically non-decreasing even under clock hiccups.
            next.last_modified = Utc::now().max(previous);
            *current = next;
            self.enqueue_persist(current.clone());
            current.clone()
        };
        self.notify(&updated);
    }

    /// Replaces the current document with a freshly created empty one (new
    /// identifier), persists it, and resets the step index.
    pub fn reset(&self) -> CvDocument {
        let fresh = CvDocument::empty();
        {
            let mut current = self.current.lock().expect("store lock poisoned");
            *current = fresh.clone();
            self.enqueue_persist(fresh.clone());
        }
        *self.current_step.lock().expect("store lock poisoned") = 0;
        self.notify(&fresh);
        fresh
    }

    /// Overwrites the current document wholesale (loading a saved CV).
    /// Stamps `last_modified` like any other mutation.
    pub fn replace(&self, mut doc: CvDocument) {
        let updated = {
            let mut current = self.current.lock().expect("store lock poisoned");
            doc.last_modified = Utc::now().max(current.last_modified);
            *current = doc;
            self.enqueue_persist(current.clone());
            current.clone()
        };
        self.notify(&updated);
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&CvDocument) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::Relaxed));
        self.subscribers
            .lock()
            .expect("store lock poisoned")
            .push((id, Box::new(callback)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers
            .lock()
            .expect("store lock poisoned")
            .retain(|(sub_id, _)| *sub_id != id);
    }

    pub fn current_step(&self) -> usize {
        *self.current_step.lock().expect("store lock poisoned")
    }

    pub fn set_current_step(&self, step: usize) {
        *self.current_step.lock().expect("store lock poisoned") = step;
    }

    fn notify(&self, doc: &CvDocument) {
        let subscribers = self.subscribers.lock().expect("store lock poisoned");
        for (_, callback) in subscribers.iter() {
            callback(doc);
        }
    }

    /// Hands a snapshot to the writer task. Sending never blocks; a send
    /// failure only happens when the runtime is shutting down.
    fn enqueue_persist(&self, doc: CvDocument) {
        if self.persist_tx.send(doc).is_err() {
            debug!("Persistence writer gone; dropping snapshot");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::cv::{PersonalDetails, WorkExperience};
    use crate::storage::MemoryStorage;
    use std::sync::atomic::AtomicUsize;
    use std::time::Duration;

    fn store_with_memory() -> (Arc<CvStore>, Arc<MemoryStorage>) {
        let storage = Arc::new(MemoryStorage::new());
        let store = Arc::new(CvStore::new(
            CvDocument::empty(),
            Arc::clone(&storage) as Arc<dyn DocumentStorage>,
        ));
        (store, storage)
    }

    fn details_named(name: &str) -> PersonalDetails {
        PersonalDetails {
            full_name: name.to_string(),
            ..Default::default()
        }
    }

    fn entry_a() -> WorkExperience {
        WorkExperience {
            id: "1".to_string(),
            job_title: "Developer".to_string(),
            company: "Acme".to_string(),
            location: "Durban".to_string(),
            start_date: "2021-01".to_string(),
            end_date: String::new(),
            current: true,
            description: String::new(),
            achievements: vec![],
        }
    }

    #[tokio::test]
    async fn test_update_sequence_equals_merge_of_partials() {
        let (store, _) = store_with_memory();

        store.update(CvPatch {
            personal_details: Some(details_named("Thabo Mabena")),
            ..CvPatch::default()
        });
        store.update(CvPatch {
            work_experience: Some(vec![entry_a()]),
            ..CvPatch::default()
        });

        let doc = store.get();
        assert_eq!(doc.work_experience.len(), 1);
        assert_eq!(doc.personal_details.full_name, "Thabo Mabena");
        assert!(doc.work_experience[0].current);
    }

    #[tokio::test]
    async fn test_update_stamps_monotonic_last_modified() {
        let (store, _) = store_with_memory();
        let t0 = store.get().last_modified;

        store.update(CvPatch::default());
        let t1 = store.get().last_modified;
        store.update(CvPatch::default());
        let t2 = store.get().last_modified;

        assert!(t1 >= t0);
        assert!(t2 >= t1);
    }

    #[tokio::test]
    async fn test_reset_yields_blank_document_with_new_id() {
        let (store, _) = store_with_memory();
        store.update(CvPatch {
            personal_details: Some(details_named("Someone")),
            work_experience: Some(vec![entry_a()]),
            ..CvPatch::default()
        });
        store.set_current_step(3);
        let old_id = store.get().id;

        store.reset();

        let doc = store.get();
        assert_ne!(doc.id, old_id);
        assert_eq!(doc.personal_details, PersonalDetails::default());
        assert!(doc.work_experience.is_empty());
        assert!(doc.education.is_empty());
        assert!(doc.skills.is_empty());
        assert!(doc.languages.is_empty());
        assert!(doc.references.is_empty());
        assert_eq!(doc.template, crate::models::cv::TemplateId::Modern);
        assert_eq!(store.current_step(), 0);
    }

    #[tokio::test]
    async fn test_subscribers_notified_synchronously_on_update() {
        let (store, _) = store_with_memory();
        let seen = Arc::new(AtomicUsize::new(0));
        let seen_clone = Arc::clone(&seen);
        store.subscribe(move |doc| {
            assert!(!doc.id.is_empty());
            seen_clone.fetch_add(1, Ordering::SeqCst);
        });

        store.update(CvPatch::default());
        // Synchronous contract: the count is visible immediately.
        assert_eq!(seen.load(Ordering::SeqCst), 1);
        store.reset();
        assert_eq!(seen.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_unsubscribe_stops_notifications() {
        let (store, _) = store_with_memory();
        let seen = Arc::new(AtomicUsize::new(0));
        let seen_clone = Arc::clone(&seen);
        let id = store.subscribe(move |_| {
            seen_clone.fetch_add(1, Ordering::SeqCst);
        });

        store.update(CvPatch::default());
        store.unsubscribe(id);
        store.update(CvPatch::default());

        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_update_persists_to_storage() {
        let (store, storage) = store_with_memory();
        store.update(CvPatch {
            personal_details: Some(details_named("Persisted")),
            ..CvPatch::default()
        });

        // Persistence is fire-and-forget; let the spawned task run.
        tokio::time::sleep(Duration::from_millis(20)).await;

        let current = storage.load_current().await.expect("persisted");
        assert_eq!(current.personal_details.full_name, "Persisted");
        assert_eq!(storage.list_saved().await.len(), 1);
    }

    /// Stalls the first save so a later save could overtake it if
    /// persistence ran on unordered tasks.
    struct SlowFirstSave {
        inner: MemoryStorage,
        first: std::sync::atomic::AtomicBool,
    }

    impl SlowFirstSave {
        fn new() -> Self {
            Self {
                inner: MemoryStorage::new(),
                first: std::sync::atomic::AtomicBool::new(true),
            }
        }
    }

    #[async_trait::async_trait]
    impl DocumentStorage for SlowFirstSave {
        async fn save_current(&self, doc: &CvDocument) {
            if self.first.swap(false, Ordering::SeqCst) {
                tokio::time::sleep(Duration::from_millis(100)).await;
            }
            self.inner.save_current(doc).await;
        }

        async fn load_current(&self) -> Option<CvDocument> {
            self.inner.load_current().await
        }

        async fn list_saved(&self) -> Vec<CvDocument> {
            self.inner.list_saved().await
        }

        async fn delete_saved(&self, id: &str) {
            self.inner.delete_saved(id).await;
        }
    }

    #[tokio::test]
    async fn test_persistence_runs_in_mutation_order() {
        let storage = Arc::new(SlowFirstSave::new());
        let store = CvStore::new(
            CvDocument::empty(),
            Arc::clone(&storage) as Arc<dyn DocumentStorage>,
        );

        store.update(CvPatch {
            personal_details: Some(details_named("First")),
            ..CvPatch::default()
        });
        store.update(CvPatch {
            personal_details: Some(details_named("Second")),
            ..CvPatch::default()
        });

        // Both saves drain through the writer; the stalled first save must
        // not land after the second.
        tokio::time::sleep(Duration::from_millis(300)).await;

        let current = storage.load_current().await.expect("persisted");
        assert_eq!(current.personal_details.full_name, "Second");
    }

    #[tokio::test]
    async fn test_replace_loads_saved_document_into_current() {
        let (store, _) = store_with_memory();
        let mut saved = CvDocument::empty();
        saved.personal_details = details_named("Loaded");
        let saved_id = saved.id.clone();

        store.replace(saved);

        let doc = store.get();
        assert_eq!(doc.id, saved_id);
        assert_eq!(doc.personal_details.full_name, "Loaded");
    }
}
