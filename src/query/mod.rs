//! Query module
//!
//! Pure mapping from filter options and a page number to the listing URI.

mod builder;

pub use builder::{QueryBuilder, COLOR_PARAM, LIMIT_PARAM, OFFSET_PARAM};
