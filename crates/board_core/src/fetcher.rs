use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use shared::protocol::{Action, CommentRecord};
use tokio::task::JoinHandle;
use tracing::{info, warn};
use url::Url;

use crate::error::FetchError;

pub const DEFAULT_COMMENTS_URL: &str = "http://jsonplaceholder.typicode.com/comments";

#[async_trait]
pub trait CommentSource: Send + Sync {
    async fn fetch_records(&self) -> Result<Vec<CommentRecord>, FetchError>;
}

/// Reads comment records with a single unauthenticated `GET`.
pub struct HttpCommentSource {
    http: Client,
    endpoint: Url,
}

impl HttpCommentSource {
    pub fn new(endpoint: &str) -> Result<Self, FetchError> {
        Self::with_client(Client::new(), endpoint)
    }

    pub fn with_client(http: Client, endpoint: &str) -> Result<Self, FetchError> {
        let endpoint = Url::parse(endpoint).map_err(|source| FetchError::InvalidEndpoint {
            url: endpoint.to_string(),
            source,
        })?;
        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl CommentSource for HttpCommentSource {
    async fn fetch_records(&self) -> Result<Vec<CommentRecord>, FetchError> {
        let res = self
            .http
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(FetchError::Request)?;
        let status = res.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }
        res.json::<Vec<CommentRecord>>()
            .await
            .map_err(FetchError::Decode)
    }
}

/// Turns one upstream read into a [`Action::FetchComments`].
///
/// There is no retry and no timeout beyond the HTTP client's own. A failed
/// read produces no action, so the store is never touched by it.
#[derive(Clone)]
pub struct CommentFetcher {
    source: Arc<dyn CommentSource>,
}

impl CommentFetcher {
    pub fn new(source: Arc<dyn CommentSource>) -> Self {
        Self { source }
    }

    pub fn http(endpoint: &str) -> Result<Self, FetchError> {
        Ok(Self::new(Arc::new(HttpCommentSource::new(endpoint)?)))
    }

    pub async fn fetch_comments(&self) -> Result<Action, FetchError> {
        match self.source.fetch_records().await {
            Ok(records) => {
                info!(count = records.len(), "fetched comments");
                Ok(Action::FetchComments(records))
            }
            Err(error) => {
                warn!(%error, "comment fetch failed; nothing dispatched");
                Err(error)
            }
        }
    }

    /// Fire-and-forget variant of [`CommentFetcher::fetch_comments`]. Must be
    /// called from within a Tokio runtime; the handle may be dropped.
    pub fn spawn<F>(&self, on_complete: F) -> JoinHandle<()>
    where
        F: FnOnce(Result<Action, FetchError>) + Send + 'static,
    {
        let fetcher = self.clone();
        tokio::spawn(async move {
            on_complete(fetcher.fetch_comments().await);
        })
    }
}

#[cfg(test)]
#[path = "tests/fetcher_tests.rs"]
mod tests;
