//! Persistence adapter — durable storage for the current draft and the
//! saved-document collection, under two well-known keys.
//!
//! Failure semantics are deliberately soft: if the medium is unavailable,
//! reads come back empty and writes are best-effort no-ops. The session can
//! run entirely in memory; nothing here ever surfaces an error to a caller.

mod json_file;
mod memory;

pub use json_file::JsonFileStorage;
pub use memory::MemoryStorage;

use crate::models::cv::CvDocument;

/// Storage port. Implemented by adapters; the store only sees this trait.
#[async_trait::async_trait]
pub trait DocumentStorage: Send + Sync {
    /// Overwrites the "current" key with `doc`, and upserts the same
    /// document into the saved collection: replaced in place if an entry
    /// with the same id exists, appended otherwise.
    ///
    /// NOTE: this conflates autosave-of-draft with save-to-library — every
    /// `CvStore::update`, down to a single keystroke, makes the active
    /// document appear in `list_saved()`. Observable behavior; kept.
    async fn save_current(&self, doc: &CvDocument);

    /// Returns the document under the "current" key, or None if nothing has
    /// been saved yet (or the medium is unavailable).
    async fn load_current(&self) -> Option<CvDocument>;

    /// Returns the saved collection in insertion order (in-place upserts
    /// keep their original position).
    async fn list_saved(&self) -> Vec<CvDocument>;

    /// Removes the entry with the given id from the saved collection.
    /// No-op if absent. Never touches the "current" key, even when the ids
    /// match — a document can leave the library while still being edited.
    async fn delete_saved(&self, id: &str);
}
