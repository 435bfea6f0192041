mod file;
mod postgres;

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::models::{BaselineEntry, ScanRecord};

pub use file::FileHistoryStore;
pub use postgres::PgHistoryStore;

pub const MAX_SCAN_RECORDS: usize = 30;

/// Baselines keyed by `"ISO:disease"`.
pub type Baselines = BTreeMap<String, BaselineEntry>;

pub fn baseline_key(iso_code: &str, disease: &str) -> String {
    format!("{iso_code}:{disease}")
}

pub fn split_baseline_key(key: &str) -> Result<(&str, &str), StoreError> {
    key.split_once(':')
        .filter(|(iso, disease)| !iso.is_empty() && !disease.is_empty())
        .ok_or_else(|| StoreError::MalformedKey(key.to_string()))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct History {
    #[serde(default)]
    pub scans: Vec<ScanRecord>,
    #[serde(default)]
    pub baselines: Baselines,
}

impl History {
    /// Append a scan record, keeping only the most recent `MAX_SCAN_RECORDS`.
    pub fn push_scan(&mut self, record: ScanRecord) {
        self.scans.push(record);
        if self.scans.len() > MAX_SCAN_RECORDS {
            let excess = self.scans.len() - MAX_SCAN_RECORDS;
            self.scans.drain(..excess);
        }
    }
}

#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Open the single read-modify-write session for a scan.
    async fn begin<'a>(&'a self) -> Result<Box<dyn HistorySession + 'a>, StoreError>;
}

#[async_trait]
pub trait HistorySession: Send {
    fn history(&mut self) -> &mut History;

    async fn commit(self: Box<Self>) -> Result<(), StoreError>;
}

/// A session over history that is never persisted. Used when the real store is unavailable.
pub struct EphemeralSession {
    history: History,
}

impl EphemeralSession {
    pub fn new() -> Self {
        Self {
            history: History::default(),
        }
    }
}

impl Default for EphemeralSession {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HistorySession for EphemeralSession {
    fn history(&mut self) -> &mut History {
        &mut self.history
    }

    async fn commit(self: Box<Self>) -> Result<(), StoreError> {
        Ok(())
    }
}
