//! Record model types

use crate::pagination::PageNumber;
use crate::types::{JsonObject, JsonValue};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Opaque record identifier, passed through exactly as the server sent it
pub type RecordId = JsonValue;

/// Colors flagged as primary. Fixed, and unrelated to any color filter.
pub const PRIMARY_COLORS: [&str; 3] = ["red", "blue", "yellow"];

// ============================================================================
// Filter Options
// ============================================================================

/// Caller-supplied query options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    /// Requested 1-based page; absent or non-positive means page 1
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    /// Colors to filter by; absent or empty means every color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
}

impl FilterOptions {
    /// Options for page 1 with no color filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a specific page
    #[must_use]
    pub fn page(mut self, page: i64) -> Self {
        self.page = Some(page);
        self
    }

    /// Filter by the given colors
    #[must_use]
    pub fn colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = Some(colors.into_iter().map(Into::into).collect());
        self
    }

    /// Colors to send to the server, empty when unfiltered
    pub fn color_filter(&self) -> &[String] {
        self.colors.as_deref().unwrap_or_default()
    }
}

// ============================================================================
// Records
// ============================================================================

/// Server-assigned record status. Only "open" is distinguished.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Disposition {
    /// `"open"`
    Open,
    /// Any other value, kept verbatim
    Closed(String),
}

impl Disposition {
    /// Whether the record is open
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }
}

impl From<String> for Disposition {
    fn from(value: String) -> Self {
        if value == "open" {
            Self::Open
        } else {
            Self::Closed(value)
        }
    }
}

impl From<&str> for Disposition {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<Disposition> for String {
    fn from(value: Disposition) -> Self {
        match value {
            Disposition::Open => "open".to_string(),
            Disposition::Closed(other) => other,
        }
    }
}

/// A record as returned by the listing endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Unique identifier
    pub id: RecordId,
    /// Record color
    pub color: String,
    /// Open or closed status
    pub disposition: Disposition,
    /// Any other server fields, preserved untouched
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl Record {
    /// Create a record with no extra fields
    pub fn new(
        id: impl Into<RecordId>,
        color: impl Into<String>,
        disposition: impl Into<Disposition>,
    ) -> Self {
        Self {
            id: id.into(),
            color: color.into(),
            disposition: disposition.into(),
            extra: JsonObject::new(),
        }
    }
}

/// JSON key of the computed primary-color flag
pub(crate) const IS_PRIMARY_FIELD: &str = "isPrimary";

/// An open record annotated with its primary-color flag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedRecord {
    /// The record as served
    #[serde(flatten)]
    pub record: Record,
    /// Whether the record's color is primary
    #[serde(rename = "isPrimary")]
    pub is_primary: bool,
}

// ============================================================================
// Primary Colors
// ============================================================================

/// The set of primary colors used during aggregation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimaryColors(BTreeSet<String>);

impl PrimaryColors {
    /// Whether `color` is primary
    pub fn contains(&self, color: &str) -> bool {
        self.0.contains(color)
    }
}

impl Default for PrimaryColors {
    fn default() -> Self {
        Self(PRIMARY_COLORS.iter().map(ToString::to_string).collect())
    }
}

// ============================================================================
// Summary
// ============================================================================

/// Client-facing view of one page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Every id on the page, in server order
    pub ids: Vec<RecordId>,
    /// Open records, annotated, in server order
    pub open: Vec<AnnotatedRecord>,
    /// Closed records whose color is primary
    pub closed_primary_count: usize,
    /// Page before this one
    pub previous_page: Option<PageNumber>,
    /// Page after this one, when it holds data
    pub next_page: Option<PageNumber>,
}
