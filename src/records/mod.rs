//! Records module
//!
//! The record model served by the listing endpoint and the single-pass
//! aggregation that turns one page of records into a [`Summary`].

mod aggregate;
mod types;

pub use aggregate::PageAggregate;
pub use types::{
    AnnotatedRecord, Disposition, FilterOptions, PrimaryColors, Record, RecordId, Summary,
    PRIMARY_COLORS,
};

#[cfg(test)]
mod tests;
