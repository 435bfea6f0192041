use std::path::PathBuf;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use tracing::{info, warn};

use crate::history::{FileHistoryStore, HistoryStore, PgHistoryStore};
use crate::sources::{
    paced_budget, OfficialFeed, QueryPacer, RecordInbox, RecordSource, TrendCsv, WebSearch,
    WebSearchKind, COMMUNITY_QUERIES, NEWS_QUERIES,
};

/// Everything a scan needs, resolved from CLI flags and environment.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub report_path: PathBuf,
    pub history_path: PathBuf,
    pub summary_path: Option<PathBuf>,
    pub inboxes: Vec<PathBuf>,
    pub trend_files: Vec<PathBuf>,
    pub fetch_timeout: Duration,
    pub offline: bool,
    pub search_api_key: Option<String>,
    pub database_url: Option<String>,
}

impl ScanConfig {
    /// Log the configuration without secrets.
    pub fn log_redacted(&self) {
        info!(
            report = %self.report_path.display(),
            history = %self.history_path.display(),
            inboxes = self.inboxes.len(),
            trend_files = self.trend_files.len(),
            timeout_secs = self.fetch_timeout.as_secs(),
            offline = self.offline,
            search_api_key = if self.search_api_key.is_some() { "[set]" } else { "[unset]" },
            database = if self.database_url.is_some() { "[set]" } else { "[unset]" },
            "Scan configuration"
        );
    }

    /// Sources in pooling order. Network sources are skipped when offline.
    pub fn build_sources(&self, client: &reqwest::Client) -> Vec<Box<dyn RecordSource>> {
        let mut sources: Vec<Box<dyn RecordSource>> = Vec::new();

        if !self.offline {
            // both searches share one API key, so one pacer and one budget
            let pacer = QueryPacer::default();
            let budget = self.search_budget();

            sources.push(Box::new(OfficialFeed::new(client.clone())));
            for (kind, queries) in [
                (WebSearchKind::News, NEWS_QUERIES),
                (WebSearchKind::Community, COMMUNITY_QUERIES),
            ] {
                sources.push(Box::new(
                    WebSearch::new(client.clone(), self.search_api_key.clone(), kind, queries)
                        .with_pacer(pacer.clone())
                        .with_budget(budget),
                ));
            }
        }
        for path in &self.inboxes {
            sources.push(Box::new(RecordInbox::new(path)));
        }
        for path in &self.trend_files {
            sources.push(Box::new(TrendCsv::new(path)));
        }

        sources
    }

    /// Time for every paced search query plus one slow request.
    pub fn search_budget(&self) -> Duration {
        paced_budget(
            NEWS_QUERIES.len() + COMMUNITY_QUERIES.len(),
            self.fetch_timeout,
        )
    }

    /// Postgres when a database URL is configured and valid, the JSON file otherwise.
    pub fn history_store(&self) -> Box<dyn HistoryStore> {
        if let Some(url) = self.database_url.as_deref() {
            match PgPoolOptions::new().max_connections(5).connect_lazy(url) {
                Ok(pool) => return Box::new(PgHistoryStore::new(pool)),
                Err(e) => {
                    warn!(error = %e, "Invalid DATABASE_URL, falling back to the history file")
                }
            }
        }
        Box::new(FileHistoryStore::new(&self.history_path))
    }
}
