//! Tests for records module

use super::*;
use crate::pagination::{Lookahead, PageCursors, PageNumber};
use pretty_assertions::assert_eq;
use serde_json::json;

fn sample_page() -> Vec<Record> {
    vec![
        Record::new(1, "red", "open"),
        Record::new(2, "brown", "closed"),
        Record::new(3, "blue", "closed"),
        Record::new(4, "green", "open"),
        Record::new(5, "yellow", "archived"),
    ]
}

// ============================================================================
// Model Tests
// ============================================================================

#[test]
fn test_disposition_from_string() {
    assert_eq!(Disposition::from("open"), Disposition::Open);
    assert_eq!(
        Disposition::from("closed"),
        Disposition::Closed("closed".to_string())
    );
    // Case matters: only the exact value is open
    assert!(!Disposition::from("Open").is_open());
}

#[test]
fn test_record_deserialize_keeps_extra_fields() {
    let record: Record = serde_json::from_value(json!({
        "id": 42,
        "color": "red",
        "disposition": "closed",
        "owner": "ops"
    }))
    .unwrap();

    assert_eq!(record.id, json!(42));
    assert_eq!(record.disposition, Disposition::Closed("closed".to_string()));
    assert_eq!(record.extra.get("owner"), Some(&json!("ops")));
}

#[test]
fn test_annotated_record_serializes_flat() {
    let annotated = AnnotatedRecord {
        record: Record::new(7, "blue", "open"),
        is_primary: true,
    };

    assert_eq!(
        serde_json::to_value(&annotated).unwrap(),
        json!({"id": 7, "color": "blue", "disposition": "open", "isPrimary": true})
    );
}

#[test]
fn test_primary_colors_default() {
    let primary = PrimaryColors::default();
    for color in PRIMARY_COLORS {
        assert!(primary.contains(color));
    }
    assert!(!primary.contains("brown"));
    assert!(!primary.contains("Red"));
}

#[test]
fn test_filter_options_builder() {
    let options = FilterOptions::new().page(3).colors(["red", "brown"]);
    assert_eq!(options.page, Some(3));
    assert_eq!(options.color_filter(), ["red".to_string(), "brown".to_string()]);
    assert!(FilterOptions::new().color_filter().is_empty());
}

#[test]
fn test_filter_options_deserialize() {
    let options: FilterOptions =
        serde_json::from_value(json!({"page": 2, "colors": ["red"]})).unwrap();
    assert_eq!(options, FilterOptions::new().page(2).colors(["red"]));

    let empty: FilterOptions = serde_json::from_value(json!({})).unwrap();
    assert_eq!(empty, FilterOptions::default());
}

// ============================================================================
// Aggregation Tests
// ============================================================================

#[test]
fn test_aggregate_classifies_in_one_pass() {
    let aggregate = PageAggregate::from_records(sample_page(), &PrimaryColors::default());

    assert_eq!(
        aggregate.ids,
        vec![json!(1), json!(2), json!(3), json!(4), json!(5)]
    );
    assert_eq!(aggregate.open.len(), 2);
    assert_eq!(aggregate.closed_count, 3);
    assert_eq!(aggregate.closed_primary_count, 2);
    assert_eq!(aggregate.record_count(), aggregate.open.len() + aggregate.closed_count);
}

#[test]
fn test_aggregate_annotates_open_records() {
    let aggregate = PageAggregate::from_records(sample_page(), &PrimaryColors::default());

    let flags: Vec<(RecordId, bool)> = aggregate
        .open
        .iter()
        .map(|r| (r.record.id.clone(), r.is_primary))
        .collect();
    assert_eq!(flags, vec![(json!(1), true), (json!(4), false)]);
}

#[test]
fn test_aggregate_overrides_server_is_primary() {
    let record: Record = serde_json::from_value(json!({
        "id": 9,
        "color": "brown",
        "disposition": "open",
        "isPrimary": true
    }))
    .unwrap();
    let aggregate = PageAggregate::from_records(vec![record], &PrimaryColors::default());

    let rendered = serde_json::to_string(&aggregate.open[0]).unwrap();
    assert_eq!(rendered.matches("isPrimary").count(), 1);
    assert_eq!(
        serde_json::to_value(&aggregate.open[0]).unwrap(),
        json!({"id": 9, "color": "brown", "disposition": "open", "isPrimary": false})
    );
}

#[test]
fn test_aggregate_no_closed_primary() {
    let records = vec![
        Record::new(1, "brown", "closed"),
        Record::new(2, "red", "open"),
        Record::new(3, "green", "closed"),
    ];
    let aggregate = PageAggregate::from_records(records, &PrimaryColors::default());

    assert_eq!(aggregate.closed_primary_count, 0);
    assert_eq!(aggregate.closed_count, 2);
}

#[test]
fn test_aggregate_empty_page() {
    let aggregate = PageAggregate::from_records(Vec::new(), &PrimaryColors::default());
    assert_eq!(aggregate.record_count(), 0);
    assert_eq!(aggregate, PageAggregate::default());
}

#[test]
fn test_summary_serializes_camel_case_with_null_cursors() {
    let aggregate = PageAggregate::from_records(
        vec![Record::new(1, "red", "closed")],
        &PrimaryColors::default(),
    );
    let summary =
        aggregate.into_summary(PageCursors::resolve(PageNumber::FIRST, &Lookahead::Skipped));

    assert_eq!(
        serde_json::to_value(&summary).unwrap(),
        json!({
            "ids": [1],
            "open": [],
            "closedPrimaryCount": 1,
            "previousPage": null,
            "nextPage": null
        })
    );
}
