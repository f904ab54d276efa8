//! Pagination types
//!
//! Page numbers, cursors and the lookahead decision.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;

/// Records per page. Not configurable: the server pages in tens.
pub const PAGE_SIZE: usize = 10;

/// A 1-based page number
///
/// Zero is unrepresentable, so the derived offset is never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageNumber(NonZeroU32);

impl PageNumber {
    /// The first page
    pub const FIRST: Self = Self(NonZeroU32::MIN);

    /// Create a page number, `None` for zero
    pub fn new(page: u32) -> Option<Self> {
        NonZeroU32::new(page).map(Self)
    }

    /// Resolve a caller-supplied page: positive values are kept, anything
    /// else (absent, zero, negative, out of range) falls back to page 1
    pub fn resolve(requested: Option<i64>) -> Self {
        requested
            .and_then(|page| u32::try_from(page).ok())
            .and_then(Self::new)
            .unwrap_or(Self::FIRST)
    }

    /// Raw page number
    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Zero-based record offset of the first record on this page
    pub fn offset(self) -> u64 {
        u64::from(self.get() - 1) * PAGE_SIZE as u64
    }

    /// The page before this one, `None` on page 1
    pub fn previous(self) -> Option<Self> {
        Self::new(self.get() - 1)
    }

    /// The page after this one, `None` on overflow
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }

    /// Whether a page holding `records` records may have a successor
    ///
    /// Only an exactly full page warrants the lookahead request.
    pub fn needs_lookahead(records: usize) -> bool {
        records == PAGE_SIZE
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<PageNumber> for u32 {
    fn from(page: PageNumber) -> Self {
        page.get()
    }
}

/// What the lookahead step learned about the following page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookahead {
    /// Current page was short, no request made
    Skipped,
    /// Following page returned at least one record
    Found,
    /// Following page returned no records
    Exhausted,
    /// Following page could not be fetched
    Failed {
        /// Why the fetch failed
        reason: String,
    },
}

impl Lookahead {
    /// Classify a successful lookahead by its record count
    pub fn from_count(records: usize) -> Self {
        if records == 0 {
            Self::Exhausted
        } else {
            Self::Found
        }
    }

    /// Whether a request was sent for the following page
    pub fn was_attempted(&self) -> bool {
        !matches!(self, Self::Skipped)
    }

    /// Next-page cursor for `current` given this outcome
    pub fn next_page(&self, current: PageNumber) -> Option<PageNumber> {
        match self {
            Self::Found => current.next(),
            Self::Skipped | Self::Exhausted | Self::Failed { .. } => None,
        }
    }
}

/// Previous/next cursors for a page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageCursors {
    /// Page before the current one
    pub previous: Option<PageNumber>,
    /// Page after the current one, if it holds data
    pub next: Option<PageNumber>,
}

impl PageCursors {
    /// Build cursors for `current` from the lookahead outcome
    pub fn resolve(current: PageNumber, lookahead: &Lookahead) -> Self {
        Self {
            previous: current.previous(),
            next: lookahead.next_page(current),
        }
    }
}
