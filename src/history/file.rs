use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::{Mutex, MutexGuard};
use tracing::{info, warn};

use super::{History, HistorySession, HistoryStore};
use crate::error::StoreError;

/// History kept as one JSON document on disk.
pub struct FileHistoryStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileHistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the history file. Missing or unreadable files are a cold start.
    pub async fn load(&self) -> History {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => match serde_json::from_slice::<History>(&bytes) {
                Ok(history) => history,
                Err(e) => {
                    warn!(path = %self.path.display(), error = %e, "Unreadable history, starting cold");
                    History::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %self.path.display(), "No history yet, starting cold");
                History::default()
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to read history, starting cold");
                History::default()
            }
        }
    }

    async fn save(&self, history: &History) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let body = serde_json::to_vec_pretty(history)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, body).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

struct FileSession<'a> {
    store: &'a FileHistoryStore,
    history: History,
    _guard: MutexGuard<'a, ()>,
}

#[async_trait]
impl HistoryStore for FileHistoryStore {
    async fn begin<'a>(&'a self) -> Result<Box<dyn HistorySession + 'a>, StoreError> {
        let guard = self.lock.lock().await;
        let history = self.load().await;
        Ok(Box::new(FileSession {
            store: self,
            history,
            _guard: guard,
        }))
    }
}

#[async_trait]
impl<'a> HistorySession for FileSession<'a> {
    fn history(&mut self) -> &mut History {
        &mut self.history
    }

    async fn commit(self: Box<Self>) -> Result<(), StoreError> {
        self.store.save(&self.history).await
    }
}
