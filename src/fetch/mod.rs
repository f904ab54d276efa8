//! Page fetch module
//!
//! One network round trip per page. Failures are reported as
//! [`FetchOutcome::Failed`] rather than masquerading as an empty page.

mod fetcher;

pub use fetcher::{FetchOutcome, HttpPageFetcher, PageFetcher};
