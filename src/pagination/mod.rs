//! Pagination module
//!
//! Fixed-size offset pagination over the records listing.
//!
//! # Overview
//!
//! Pages are 1-based and hold at most [`PAGE_SIZE`] records. A page shorter
//! than that is the last one; a full page is followed by a lookahead fetch to
//! decide whether a next page exists.

mod types;

pub use types::{Lookahead, PageCursors, PageNumber, PAGE_SIZE};

#[cfg(test)]
mod tests;
