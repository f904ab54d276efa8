//! Single-pass page aggregation

use super::types::{AnnotatedRecord, PrimaryColors, Record, RecordId, Summary, IS_PRIMARY_FIELD};
use crate::pagination::PageCursors;

/// Derived views of one page, built by folding over its records
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageAggregate {
    /// Every id, in server order
    pub ids: Vec<RecordId>,
    /// Annotated open records, in server order
    pub open: Vec<AnnotatedRecord>,
    /// Non-open records seen
    pub closed_count: usize,
    /// Non-open records with a primary color
    pub closed_primary_count: usize,
}

impl PageAggregate {
    /// Fold a page of records into an aggregate
    pub fn from_records<I>(records: I, primary: &PrimaryColors) -> Self
    where
        I: IntoIterator<Item = Record>,
    {
        records
            .into_iter()
            .fold(Self::default(), |acc, record| acc.absorb(record, primary))
    }

    /// Account for one record
    #[must_use]
    fn absorb(mut self, mut record: Record, primary: &PrimaryColors) -> Self {
        let is_primary = primary.contains(&record.color);
        self.ids.push(record.id.clone());

        if record.disposition.is_open() {
            // The computed flag replaces any server-sent one
            record.extra.remove(IS_PRIMARY_FIELD);
            self.open.push(AnnotatedRecord { record, is_primary });
        } else {
            self.closed_count += 1;
            if is_primary {
                self.closed_primary_count += 1;
            }
        }
        self
    }

    /// Total records folded in
    pub fn record_count(&self) -> usize {
        self.ids.len()
    }

    /// Finish into a summary with the given cursors
    pub fn into_summary(self, cursors: PageCursors) -> Summary {
        Summary {
            ids: self.ids,
            open: self.open,
            closed_primary_count: self.closed_primary_count,
            previous_page: cursors.previous,
            next_page: cursors.next,
        }
    }
}
