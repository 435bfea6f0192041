mod inbox;
mod trends;
mod web;
mod who;

use std::time::Duration;

use async_trait::async_trait;
use futures::future::join_all;
use tracing::{info, warn};

use crate::error::SourceError;
use crate::models::RawBatch;

pub use inbox::RecordInbox;
pub use trends::TrendCsv;
pub use web::{
    paced_budget, QueryPacer, WebSearch, WebSearchKind, COMMUNITY_QUERIES, NEWS_QUERIES,
};
pub use who::OfficialFeed;

/// A producer of raw records. Fetchers fill only the batch fields they own.
#[async_trait]
pub trait RecordSource: Send + Sync {
    fn name(&self) -> &str;

    /// How long `gather` waits for this source, given the per-request timeout.
    fn deadline(&self, request_timeout: Duration) -> Duration {
        request_timeout
    }

    async fn fetch(&self) -> Result<RawBatch, SourceError>;
}

/// Fetch every source concurrently, each bounded by `timeout`.
///
/// A failed or timed-out source contributes nothing. Batches are pooled in the order the
/// sources were given, regardless of completion order.
pub async fn gather(sources: &[Box<dyn RecordSource>], timeout: Duration) -> RawBatch {
    let fetches = sources.iter().map(|source| async move {
        let deadline = source.deadline(timeout);
        let result = match tokio::time::timeout(deadline, source.fetch()).await {
            Ok(result) => result,
            Err(_) => Err(SourceError::Timeout(deadline)),
        };
        (source.name(), result)
    });

    let mut pooled = RawBatch::default();
    for (name, result) in join_all(fetches).await {
        match result {
            Ok(batch) => {
                info!(source = name, records = batch.len(), "Fetched source");
                pooled.extend(batch);
            }
            Err(e) => {
                warn!(source = name, error = %e, "Source unavailable, continuing without it");
            }
        }
    }
    pooled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SocialPost;

    struct Fixed(&'static str, RawBatch);

    #[async_trait]
    impl RecordSource for Fixed {
        fn name(&self) -> &str {
            self.0
        }

        async fn fetch(&self) -> Result<RawBatch, SourceError> {
            Ok(self.1.clone())
        }
    }

    struct Broken;

    #[async_trait]
    impl RecordSource for Broken {
        fn name(&self) -> &str {
            "broken"
        }

        async fn fetch(&self) -> Result<RawBatch, SourceError> {
            Err(SourceError::MissingCredentials("SEARCH_API_KEY"))
        }
    }

    struct Slow;

    #[async_trait]
    impl RecordSource for Slow {
        fn name(&self) -> &str {
            "slow"
        }

        async fn fetch(&self) -> Result<RawBatch, SourceError> {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(posts(&["never arrives"]))
        }
    }

    fn posts(texts: &[&str]) -> RawBatch {
        RawBatch {
            social: texts
                .iter()
                .map(|text| SocialPost {
                    text: text.to_string(),
                    ..SocialPost::default()
                })
                .collect(),
            ..RawBatch::default()
        }
    }

    #[tokio::test]
    async fn failing_and_slow_sources_degrade_to_empty() {
        let sources: Vec<Box<dyn RecordSource>> = vec![
            Box::new(Fixed("first", posts(&["a"]))),
            Box::new(Broken),
            Box::new(Slow),
            Box::new(Fixed("second", posts(&["b", "c"]))),
        ];

        let pooled = gather(&sources, Duration::from_millis(50)).await;

        let texts: Vec<&str> = pooled.social.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn no_sources_is_an_empty_batch() {
        let pooled = gather(&[], Duration::from_millis(10)).await;
        assert!(pooled.is_empty());
    }
}
