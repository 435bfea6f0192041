use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, warn};

use super::RecordSource;
use crate::error::SourceError;
use crate::models::{RawBatch, WebResult};

const SEARCH_URL: &str = "https://api.search.brave.com/res/v1/web/search";
const RESULTS_PER_QUERY: usize = 5;
const QUERY_PAUSE: Duration = Duration::from_millis(1100);

pub const NEWS_QUERIES: &[&str] = &[
    "disease outbreak travel",
    "dengue outbreak cases",
    "cholera outbreak",
    "malaria outbreak surge",
    "avian flu H5N1 outbreak",
    "measles outbreak cases",
    "mpox cases outbreak",
    "travelers sick returning illness",
    "travel health warning disease",
    "ebola marburg outbreak Africa",
    "typhoid outbreak travel",
    "meningitis outbreak",
    "nipah virus outbreak",
    "yellow fever outbreak",
    "lassa fever outbreak",
    "polio cases outbreak",
];

pub const COMMUNITY_QUERIES: &[&str] = &[
    "site:reddit.com travel sick illness trip",
    "site:reddit.com got dengue traveling",
    "site:reddit.com malaria travel experience",
    "site:reddit.com food poisoning travel country",
    "site:reddit.com travel health warning outbreak",
    "site:reddit.com sick after vacation tropical",
];

/// Which batch field the search results land in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebSearchKind {
    News,
    Community,
}

/// Spaces query starts across every search source sharing one API key.
#[derive(Debug, Clone)]
pub struct QueryPacer {
    pause: Duration,
    last_start: Arc<Mutex<Option<Instant>>>,
}

impl QueryPacer {
    pub fn new(pause: Duration) -> Self {
        Self {
            pause,
            last_start: Arc::new(Mutex::new(None)),
        }
    }

    /// Wait until `pause` has passed since the previous start through any clone.
    pub async fn wait(&self) {
        let mut last_start = self.last_start.lock().await;
        if let Some(previous) = *last_start {
            tokio::time::sleep_until(previous + self.pause).await;
        }
        *last_start = Some(Instant::now());
    }
}

impl Default for QueryPacer {
    fn default() -> Self {
        Self::new(QUERY_PAUSE)
    }
}

/// Time for `query_count` paced queries plus one slow request.
pub fn paced_budget(query_count: usize, request_timeout: Duration) -> Duration {
    QUERY_PAUSE * u32::try_from(query_count).unwrap_or(u32::MAX) + request_timeout
}

/// Web search over a fixed query list, one request per query.
///
/// Queries run one at a time through the pacer. Once the budget is spent the remaining
/// queries are skipped and whatever was already found is returned.
pub struct WebSearch {
    client: reqwest::Client,
    api_key: Option<String>,
    kind: WebSearchKind,
    queries: Vec<String>,
    pacer: QueryPacer,
    budget: Duration,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    web: Option<WebSection>,
}

#[derive(Debug, Deserialize)]
struct WebSection {
    #[serde(default)]
    results: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    #[serde(default)]
    title: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    age: String,
}

impl From<SearchHit> for WebResult {
    fn from(hit: SearchHit) -> Self {
        WebResult {
            title: hit.title,
            description: hit.description,
            url: hit.url,
            published_age: hit.age,
        }
    }
}

impl WebSearch {
    pub fn new(
        client: reqwest::Client,
        api_key: Option<String>,
        kind: WebSearchKind,
        queries: &[&str],
    ) -> Self {
        Self {
            client,
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            kind,
            queries: queries.iter().map(|q| q.to_string()).collect(),
            pacer: QueryPacer::default(),
            budget: QUERY_PAUSE * u32::try_from(queries.len()).unwrap_or(u32::MAX),
        }
    }

    pub fn with_pacer(mut self, pacer: QueryPacer) -> Self {
        self.pacer = pacer;
        self
    }

    pub fn with_budget(mut self, budget: Duration) -> Self {
        self.budget = budget;
        self
    }

    async fn search(&self, api_key: &str, query: &str) -> Result<Vec<WebResult>, SourceError> {
        let count = RESULTS_PER_QUERY.to_string();
        let resp = self
            .client
            .get(SEARCH_URL)
            .header("Accept", "application/json")
            .header("X-Subscription-Token", api_key)
            .query(&[("q", query), ("count", count.as_str()), ("freshness", "pw")])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(SourceError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: SearchResponse = serde_json::from_str(&resp.text().await?)?;
        Ok(body
            .web
            .map(|web| web.results.into_iter().map(WebResult::from).collect())
            .unwrap_or_default())
    }
}

#[async_trait]
impl RecordSource for WebSearch {
    fn name(&self) -> &str {
        match self.kind {
            WebSearchKind::News => "news",
            WebSearchKind::Community => "community",
        }
    }

    fn deadline(&self, request_timeout: Duration) -> Duration {
        self.budget + request_timeout
    }

    async fn fetch(&self) -> Result<RawBatch, SourceError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(SourceError::MissingCredentials("BRAVE_API_KEY"))?;

        let deadline = Instant::now() + self.budget;
        let mut results = Vec::new();
        for (i, query) in self.queries.iter().enumerate() {
            self.pacer.wait().await;
            if Instant::now() >= deadline {
                warn!(
                    source = self.name(),
                    skipped = self.queries.len() - i,
                    found = results.len(),
                    "Search budget spent, returning partial results"
                );
                break;
            }
            match self.search(api_key, query).await {
                Ok(hits) => {
                    debug!(source = self.name(), query, hits = hits.len(), "Search query done");
                    results.extend(hits);
                }
                Err(e) => warn!(source = self.name(), query, error = %e, "Search query failed"),
            }
        }

        let batch = match self.kind {
            WebSearchKind::News => RawBatch {
                news: results,
                ..RawBatch::default()
            },
            WebSearchKind::Community => RawBatch {
                community: results,
                ..RawBatch::default()
            },
        };
        Ok(batch)
    }
}
