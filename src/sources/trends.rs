use std::path::PathBuf;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::RecordSource;
use crate::error::SourceError;
use crate::models::{RawBatch, SearchInterest};

/// Regions at or below this score are not worth a signal.
pub const INTEREST_FLOOR: u8 = 50;

/// Search-interest export as CSV: `keyword,region_label,score`.
pub struct TrendCsv {
    path: PathBuf,
    name: String,
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    keyword: String,
    region_label: String,
    score: u8,
}

impl TrendCsv {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = format!("trends:{}", path.display());
        Self { path, name }
    }

    fn read(&self) -> Result<Vec<SearchInterest>, SourceError> {
        let mut reader = csv::Reader::from_path(&self.path)?;
        let mut records = Vec::new();
        let mut skipped = 0usize;

        for result in reader.deserialize::<CsvRow>() {
            let row = result?;
            if row.score <= INTEREST_FLOOR {
                skipped += 1;
                continue;
            }
            records.push(SearchInterest {
                keyword: row.keyword,
                region_label: row.region_label,
                score: row.score.min(100),
            });
        }

        debug!(kept = records.len(), skipped, "Read trend export");
        Ok(records)
    }
}

#[async_trait]
impl RecordSource for TrendCsv {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self) -> Result<RawBatch, SourceError> {
        Ok(RawBatch {
            trends: self.read()?,
            ..RawBatch::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn keeps_rows_above_the_floor() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trends.csv");
        std::fs::write(
            &path,
            "keyword,region_label,score\n\
             dengue travel,Indonesia,88\n\
             cholera travel,Haiti,50\n\
             malaria travel,Kenya,61\n",
        )
        .unwrap();

        let batch = TrendCsv::new(&path).fetch().await.unwrap();
        let regions: Vec<&str> = batch.trends.iter().map(|t| t.region_label.as_str()).collect();
        assert_eq!(regions, vec!["Indonesia", "Kenya"]);
        assert_eq!(batch.trends[0].score, 88);
    }

    #[tokio::test]
    async fn bad_score_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trends.csv");
        std::fs::write(&path, "keyword,region_label,score\ndengue,Peru,high\n").unwrap();

        let err = TrendCsv::new(&path).fetch().await.unwrap_err();
        assert!(matches!(err, SourceError::Parse(_)));
    }
}
