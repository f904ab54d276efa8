//! Retrieval engine module
//!
//! Drives one `retrieve` call: resolve the page, fetch it, look ahead when the
//! page is full, fold the records into a [`Summary`].
//!
//! # Failure handling
//!
//! A failed current-page fetch is an error: the caller can tell it apart from
//! an empty page. A failed lookahead leaves the fetched page intact and only
//! costs the next-page cursor.

use crate::config::RecordsConfig;
use crate::error::{Error, Result};
use crate::fetch::{FetchOutcome, HttpPageFetcher, PageFetcher};
use crate::http::HttpClient;
use crate::pagination::{Lookahead, PageCursors, PageNumber};
use crate::query::QueryBuilder;
use crate::records::{FilterOptions, PageAggregate, PrimaryColors, Summary};
use tracing::{debug, info, warn};

/// Turns filter options into a page summary
#[derive(Debug)]
pub struct Retriever<F = HttpPageFetcher> {
    fetcher: F,
    primary: PrimaryColors,
}

impl Retriever<HttpPageFetcher> {
    /// Build an HTTP-backed retriever from configuration
    pub fn from_config(config: &RecordsConfig) -> Result<Self> {
        config.validate()?;
        let client = HttpClient::with_config(config.http.to_client_config())?;
        let query = QueryBuilder::new(&config.base_url, &config.records_path)?;
        Ok(Self::new(HttpPageFetcher::new(client, query)))
    }
}

impl<F: PageFetcher> Retriever<F> {
    /// Create a retriever over any page source
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            primary: PrimaryColors::default(),
        }
    }

    /// Replace the primary color set
    #[must_use]
    pub fn with_primary_colors(mut self, primary: PrimaryColors) -> Self {
        self.primary = primary;
        self
    }

    /// The underlying page source
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Retrieve and summarise the page named by `options`
    pub async fn retrieve(&self, options: &FilterOptions) -> Result<Summary> {
        let page = PageNumber::resolve(options.page);

        let records = match self.fetcher.fetch_page(options, page).await {
            FetchOutcome::Page(records) => records,
            FetchOutcome::Failed { reason } => return Err(Error::page_fetch(page.get(), reason)),
        };

        let lookahead = self.look_ahead(options, page, records.len()).await;
        let cursors = PageCursors::resolve(page, &lookahead);

        let aggregate = PageAggregate::from_records(records, &self.primary);
        info!(
            page = page.get(),
            records = aggregate.record_count(),
            open = aggregate.open.len(),
            closed = aggregate.closed_count,
            looked_ahead = lookahead.was_attempted(),
            next_page = ?cursors.next.map(PageNumber::get),
            "Page summarised"
        );

        Ok(aggregate.into_summary(cursors))
    }

    /// Fetch the following page only when the current one is full
    async fn look_ahead(
        &self,
        options: &FilterOptions,
        page: PageNumber,
        records: usize,
    ) -> Lookahead {
        if !PageNumber::needs_lookahead(records) {
            debug!(page = page.get(), records, "Short page, skipping lookahead");
            return Lookahead::Skipped;
        }
        let Some(next) = page.next() else {
            return Lookahead::Skipped;
        };

        match self.fetcher.fetch_page(options, next).await {
            FetchOutcome::Page(next_records) => Lookahead::from_count(next_records.len()),
            FetchOutcome::Failed { reason } => {
                warn!(page = next.get(), %reason, "Lookahead failed, next page unknown");
                Lookahead::Failed { reason }
            }
        }
    }
}

/// Retrieve a page summary from the default endpoint (`http://localhost:3000/records`)
pub async fn retrieve(options: &FilterOptions) -> Result<Summary> {
    Retriever::from_config(&RecordsConfig::default())?
        .retrieve(options)
        .await
}
