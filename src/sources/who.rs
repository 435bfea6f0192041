use async_trait::async_trait;
use serde::Deserialize;

use super::RecordSource;
use crate::error::SourceError;
use crate::models::{OfficialAlert, RawBatch};

const DEFAULT_FEED_URL: &str = "https://www.who.int/api/hubs/diseaseoutbreaknews";
const PAGE_SIZE: usize = 30;

/// WHO Disease Outbreak News, newest first.
pub struct OfficialFeed {
    client: reqwest::Client,
    url: String,
}

#[derive(Debug, Deserialize)]
struct FeedPage {
    #[serde(default)]
    value: Vec<FeedItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct FeedItem {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    publication_date: Option<String>,
    #[serde(default)]
    url_name: Option<String>,
}

impl From<FeedItem> for OfficialAlert {
    fn from(item: FeedItem) -> Self {
        OfficialAlert {
            title: item.name.or(item.title).unwrap_or_default(),
            description: item.description.unwrap_or_default(),
            published_date: item.publication_date.unwrap_or_default(),
            permalink_slug: item.url_name.unwrap_or_default(),
        }
    }
}

impl OfficialFeed {
    pub fn new(client: reqwest::Client) -> Self {
        Self::with_url(client, DEFAULT_FEED_URL)
    }

    pub fn with_url(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl RecordSource for OfficialFeed {
    fn name(&self) -> &str {
        "official"
    }

    async fn fetch(&self) -> Result<RawBatch, SourceError> {
        let top = PAGE_SIZE.to_string();
        let resp = self
            .client
            .get(&self.url)
            .query(&[("$orderby", "PublicationDate desc"), ("$top", top.as_str())])
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

        let page: FeedPage = serde_json::from_str(&resp.text().await?)?;
        Ok(RawBatch {
            official: page.value.into_iter().map(OfficialAlert::from).collect(),
            ..RawBatch::default()
        })
    }
}
