//! Page fetcher trait and HTTP implementation

use crate::error::Result;
use crate::http::HttpClient;
use crate::pagination::PageNumber;
use crate::query::QueryBuilder;
use crate::records::{FilterOptions, Record};
use async_trait::async_trait;
use tracing::{debug, warn};

/// Result of fetching one page
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// The server answered with these records (possibly none)
    Page(Vec<Record>),
    /// Transport, status or body failure
    Failed {
        /// Human-readable cause
        reason: String,
    },
}

impl FetchOutcome {
    /// Create a failed outcome
    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed {
            reason: reason.into(),
        }
    }
}

impl From<Result<Vec<Record>>> for FetchOutcome {
    fn from(result: Result<Vec<Record>>) -> Self {
        match result {
            Ok(records) => Self::Page(records),
            Err(e) => Self::failed(e.to_string()),
        }
    }
}

/// Source of record pages
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch one page; never errors, failures come back as `Failed`
    async fn fetch_page(&self, options: &FilterOptions, page: PageNumber) -> FetchOutcome;
}

/// Fetches pages from the records endpoint over HTTP
#[derive(Debug)]
pub struct HttpPageFetcher {
    client: HttpClient,
    query: QueryBuilder,
}

impl HttpPageFetcher {
    /// Create a fetcher from a client and query builder
    pub fn new(client: HttpClient, query: QueryBuilder) -> Self {
        Self { client, query }
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch_page(&self, options: &FilterOptions, page: PageNumber) -> FetchOutcome {
        let uri = self.query.compose_uri(options, page);
        debug!(page = page.get(), uri = %uri, "Fetching page");

        let outcome = FetchOutcome::from(self.client.get_json::<Vec<Record>>(uri.as_str()).await);
        match &outcome {
            FetchOutcome::Page(records) => {
                debug!(page = page.get(), records = records.len(), "Page fetched");
            }
            FetchOutcome::Failed { reason } => {
                warn!(page = page.get(), %reason, "Request unsuccessful");
            }
        }
        outcome
    }
}
