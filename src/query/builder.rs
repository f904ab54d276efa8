//! Records query builder

use crate::error::{Error, Result};
use crate::pagination::{PageNumber, PAGE_SIZE};
use crate::records::FilterOptions;
use crate::types::QueryPairs;
use url::Url;

/// Page size parameter
pub const LIMIT_PARAM: &str = "limit";
/// Record offset parameter
pub const OFFSET_PARAM: &str = "offset";
/// Repeated color filter parameter
pub const COLOR_PARAM: &str = "color[]";

/// Composes query URIs against a fixed records endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryBuilder {
    endpoint: Url,
}

impl QueryBuilder {
    /// Create a builder for `{base_url}{records_path}`
    pub fn new(base_url: &str, records_path: &str) -> Result<Self> {
        let mut endpoint = Url::parse(base_url)?;
        {
            let mut segments = endpoint.path_segments_mut().map_err(|()| {
                Error::invalid_config("base_url", format!("'{base_url}' cannot carry a path"))
            })?;
            segments.pop_if_empty();
            segments.extend(records_path.split('/').filter(|s| !s.is_empty()));
        }
        endpoint.set_query(None);

        Ok(Self { endpoint })
    }

    /// The endpoint every query targets
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Query parameters for a page, in wire order
    ///
    /// One color pair per requested color; none when unfiltered.
    pub fn query_pairs(options: &FilterOptions, page: PageNumber) -> QueryPairs {
        let mut pairs = vec![
            (LIMIT_PARAM.to_string(), PAGE_SIZE.to_string()),
            (OFFSET_PARAM.to_string(), page.offset().to_string()),
        ];
        pairs.extend(
            options
                .color_filter()
                .iter()
                .map(|color| (COLOR_PARAM.to_string(), color.clone())),
        );
        pairs
    }

    /// Full query URI for a page
    pub fn compose_uri(&self, options: &FilterOptions, page: PageNumber) -> Url {
        let mut uri = self.endpoint.clone();
        uri.query_pairs_mut()
            .extend_pairs(Self::query_pairs(options, page));
        uri
    }
}
