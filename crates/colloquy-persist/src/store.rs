use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::sync::Mutex;

use crate::error::{PersistError, Result};
use crate::models::ChatThread;

/// File-backed store for chat threads
///
/// The whole collection lives in one JSON array on disk and every operation
/// is a read-modify-write over the full file. A mutex scoped to the store
/// instance serializes operations, so the read and write phases of two
/// concurrent calls never interleave and a read never observes a
/// half-written file. The store assumes it is the only writer to its file;
/// cross-process writers are not coordinated.
pub struct ThreadStore {
    path: PathBuf,
    guard: Mutex<()>,
}

impl ThreadStore {
    /// Create a store backed by the given file
    ///
    /// Neither the file nor its directory has to exist yet; both are created
    /// on the first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            guard: Mutex::new(()),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all threads belonging to a user
    ///
    /// A missing backing file means no thread was ever saved and yields an
    /// empty vector. Timestamps are reconstructed from their on-disk
    /// ISO-8601 form for every thread and every contained message.
    pub async fn load_by_user(&self, user_id: &str) -> Result<Vec<ChatThread>> {
        let _guard = self.guard.lock().await;

        let threads = self.read_collection().await?;
        Ok(threads
            .into_iter()
            .filter(|t| t.user_id == user_id)
            .collect())
    }

    /// Insert or replace a thread by id
    ///
    /// An existing document with the same `id` is replaced in place, keeping
    /// its position in the collection; otherwise the thread is appended.
    /// This is a whole-document replace, never a partial field update.
    pub async fn upsert(&self, thread: ChatThread) -> Result<()> {
        let _guard = self.guard.lock().await;

        let mut threads = self.read_collection().await?;
        match threads.iter_mut().find(|t| t.id == thread.id) {
            Some(existing) => *existing = thread,
            None => threads.push(thread),
        }

        self.write_collection(&threads).await
    }

    /// Remove every thread with the given id
    ///
    /// Idempotent: deleting an id that is not present, or deleting from a
    /// store whose file does not exist yet, is a no-op success.
    pub async fn delete_by_id(&self, thread_id: &str) -> Result<()> {
        let _guard = self.guard.lock().await;

        let mut threads = self.read_collection().await?;
        let before = threads.len();
        threads.retain(|t| t.id != thread_id);
        if threads.len() == before {
            tracing::debug!(thread_id, "delete_by_id found no matching thread");
        }

        self.write_collection(&threads).await
    }

    async fn read_collection(&self) -> Result<Vec<ChatThread>> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        serde_json::from_slice(&bytes).map_err(PersistError::Corruption)
    }

    async fn write_collection(&self, threads: &[ChatThread]) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).await?;
        }

        let json = serde_json::to_vec_pretty(threads).map_err(PersistError::Serialization)?;
        fs::write(&self.path, json).await?;
        Ok(())
    }
}
