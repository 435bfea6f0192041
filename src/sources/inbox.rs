use std::path::PathBuf;

use async_trait::async_trait;

use super::RecordSource;
use crate::error::SourceError;
use crate::models::RawBatch;

/// A JSON file of raw records, any mix of kinds.
///
/// Social posts from the external search CLI and replayed captures arrive this way.
pub struct RecordInbox {
    path: PathBuf,
    name: String,
}

impl RecordInbox {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = format!("inbox:{}", path.display());
        Self { path, name }
    }
}

#[async_trait]
impl RecordSource for RecordInbox {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self) -> Result<RawBatch, SourceError> {
        let bytes = tokio::fs::read(&self.path).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
