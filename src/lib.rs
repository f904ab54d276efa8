//! # managed-records
//!
//! Page-at-a-time retrieval of a remote records listing, reshaped into a
//! client-friendly summary.
//!
//! ## Features
//!
//! - **Fixed-size Pagination**: 10 records per page, 1-based page numbers
//! - **Lookahead**: a full page triggers one extra request so `nextPage` is authoritative
//! - **Single-pass Aggregation**: ids, annotated open records, closed primary count
//! - **Explicit Failures**: a failed fetch is an error, not an empty page
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use managed_records::{FilterOptions, RecordsConfig, Retriever, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let retriever = Retriever::from_config(&RecordsConfig::default())?;
//!
//!     let options = FilterOptions::new().page(2).colors(["red", "brown"]);
//!     let summary = retriever.retrieve(&options).await?;
//!
//!     println!("{} open, next page {:?}", summary.open.len(), summary.next_page);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                 Retriever::retrieve(options)             │
//! │  resolve page → fetch → lookahead? → fold → Summary      │
//! └──────────────────────────────────────────────────────────┘
//!                              │
//! ┌──────────────┬─────────────┴──────┬──────────────────────┐
//! │    Query     │       Fetch        │       Records        │
//! ├──────────────┼────────────────────┼──────────────────────┤
//! │ limit/offset │ HttpPageFetcher    │ Record / Disposition │
//! │ color[]      │ FetchOutcome       │ PageAggregate        │
//! │              │ HttpClient         │ Summary              │
//! └──────────────┴────────────────────┴──────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Client configuration
pub mod config;

/// HTTP transport with optional retry and rate limiting
pub mod http;

/// Page numbers, cursors and lookahead
pub mod pagination;

/// Record model and page aggregation
pub mod records;

/// Query URI composition
pub mod query;

/// Page fetching
pub mod fetch;

/// Retrieval orchestration
pub mod engine;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::RecordsConfig;
pub use engine::{retrieve, Retriever};
pub use error::{Error, Result};
pub use fetch::{FetchOutcome, HttpPageFetcher, PageFetcher};
pub use pagination::{PageNumber, PAGE_SIZE};
pub use query::QueryBuilder;
pub use records::{AnnotatedRecord, Disposition, FilterOptions, Record, Summary, PRIMARY_COLORS};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
