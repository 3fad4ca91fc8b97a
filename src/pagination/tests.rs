//! Tests for pagination module

use super::*;
use crate::error::Error;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;

// ============================================================================
// State Tests
// ============================================================================

#[test]
fn test_pagination_state_mutations() {
    let mut state = PaginationState::new();
    assert_eq!(state, PaginationState::default());

    state.next_page();
    state.add_received(100);
    assert_eq!(state.pages, 1);
    assert_eq!(state.items_received, 100);
}

// ============================================================================
// Stop Condition Tests
// ============================================================================

#[test_case(json!({"meta": {"total": 250}}), 100, StopResult::Continue ; "numeric total ahead")]
#[test_case(json!({"meta": {"total": "250"}}), 100, StopResult::Continue ; "string total ahead")]
#[test_case(json!({"meta": {"total": 250}}), 250, StopResult::Stop ; "total reached")]
#[test_case(json!({"meta": {"total": "0"}}), 0, StopResult::Stop ; "empty result set")]
#[test_case(json!({"meta": {}}), 100, StopResult::Stop ; "total missing")]
#[test_case(json!({"contacts": []}), 0, StopResult::Stop ; "meta missing")]
#[test_case(json!({"meta": {"total": "many"}}), 0, StopResult::Stop ; "total not numeric")]
#[test_case(json!([1, 2, 3]), 3, StopResult::Stop ; "array body")]
#[test_case(json!({"meta": {"total": "250.0"}}), 100, StopResult::Continue ; "decimal string total")]
#[test_case(json!({"meta": {"total": "1e3"}}), 900, StopResult::Continue ; "exponent string total")]
#[test_case(json!({"meta": {"total": "1e3"}}), 1000, StopResult::Stop ; "exponent string total reached")]
#[test_case(json!({"meta": {"total": "-5"}}), 0, StopResult::Stop ; "negative string total")]
fn test_check_total(body: serde_json::Value, received: u64, expected: StopResult) {
    assert_eq!(check_total(&body, "meta.total", received), expected);
}

#[test]
fn test_extract_path() {
    let body = json!({"meta": {"total": "12", "page_input": {"limit": 100}}});
    assert_eq!(extract_path(&body, "meta.total"), Some(&json!("12")));
    assert_eq!(extract_path(&body, "$.meta.page_input.limit"), Some(&json!(100)));
    assert_eq!(extract_path(&body, "meta.missing"), None);
    assert_eq!(extract_total(&body, "meta.total"), Some(12));
    assert_eq!(extract_total(&json!({"t": " 250.5 "}), "t"), Some(251));
    assert_eq!(extract_total(&json!({"t": "NaN"}), "t"), None);
}

// ============================================================================
// OffsetPaginator Tests
// ============================================================================

#[test]
fn test_offset_paginator_defaults() {
    let paginator = OffsetPaginator::default();
    assert_eq!(paginator.offset_param, "offset");
    assert_eq!(paginator.limit_param, "limit");
    assert_eq!(paginator.limit_value, DEFAULT_PAGE_SIZE);
    assert_eq!(paginator.total_path, DEFAULT_TOTAL_PATH);
}

#[test]
fn test_initial_params_overwrite_caller_values() {
    let paginator = OffsetPaginator::default();
    let mut query = json!({"limit": 5, "offset": 40, "search": "bob"})
        .as_object()
        .cloned()
        .unwrap();

    paginator.initial_params(&mut query);

    assert_eq!(
        serde_json::Value::Object(query),
        json!({"limit": 100, "offset": 0, "search": "bob"})
    );
}

#[test]
fn test_offset_paginator_walks_pages() {
    let paginator = OffsetPaginator::default();
    let mut state = PaginationState::new();
    let body = json!({"meta": {"total": "250"}});

    let next = paginator.process_response(&body, Some(100), &mut state).unwrap();
    assert_eq!(next, NextPage::Continue { offset: 100 });

    let next = paginator.process_response(&body, Some(100), &mut state).unwrap();
    assert_eq!(next, NextPage::Continue { offset: 200 });

    let next = paginator.process_response(&body, Some(50), &mut state).unwrap();
    assert_eq!(next, NextPage::Done);
    assert_eq!(state.items_received, 250);
    assert_eq!(state.pages, 3);
}

#[test]
fn test_offset_paginator_without_total_stops() {
    let paginator = OffsetPaginator::default();
    let mut state = PaginationState::new();

    let next = paginator
        .process_response(&json!([1, 2]), Some(2), &mut state)
        .unwrap();
    assert_eq!(next, NextPage::Done);
    assert_eq!(state.items_received, 2);
}

#[test_case(None ; "missing page")]
#[test_case(Some(0) ; "empty page")]
fn test_offset_paginator_detects_stall(count: Option<usize>) {
    let paginator = OffsetPaginator::default();
    let mut state = PaginationState::new();
    let body = json!({"meta": {"total": 250}});

    paginator.process_response(&body, Some(100), &mut state).unwrap();
    let err = paginator
        .process_response(&body, count, &mut state)
        .unwrap_err();

    match err {
        Error::PaginationStalled { offset, total } => {
            assert_eq!(offset, 100);
            assert_eq!(total, 250);
        }
        other => panic!("Expected PaginationStalled, got {other:?}"),
    }
}

#[test]
fn test_custom_paginator_params() {
    let paginator = OffsetPaginator::new("skip", "take", 25, "paging.count");
    let mut query = serde_json::Map::new();
    paginator.initial_params(&mut query);
    paginator.set_offset(&mut query, 25);

    assert_eq!(
        serde_json::Value::Object(query),
        json!({"skip": 25, "take": 25})
    );

    let mut state = PaginationState::new();
    let next = paginator
        .process_response(&json!({"paging": {"count": 60}}), Some(25), &mut state)
        .unwrap();
    assert_eq!(next, NextPage::Continue { offset: 25 });
}
