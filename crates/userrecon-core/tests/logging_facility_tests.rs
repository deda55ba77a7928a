#![allow(clippy::unwrap_used, clippy::expect_used)]

use tracing::Level;
use userrecon_core::errors::ReconError;
use userrecon_core::logging_facility::test_capture::{init_test_capture, CapturedEvent};
use userrecon_core::reconcile::input_digest;
use userrecon_core::{
    log_op_degraded, log_op_end, log_op_error, log_op_start, reconcile, ReconcileConfig,
    Reconciler,
};
use userrecon_core_types::schema::{
    EVENT_CACHE_HIT, EVENT_END, EVENT_END_DEGRADED, EVENT_END_ERROR, EVENT_START, FIELD_DIFF_LEN,
    FIELD_DURATION_MS, FIELD_ERR_CODE, FIELD_ERR_KIND, FIELD_ERR_MESSAGE, FIELD_INPUT_DIGEST,
    FIELD_METADATA_FIELD, FIELD_ROWS_LEN,
};

fn for_digest<'a>(events: &'a [CapturedEvent], digest: &str) -> Vec<&'a CapturedEvent> {
    events
        .iter()
        .filter(|e| e.field(FIELD_INPUT_DIGEST) == Some(digest))
        .collect()
}

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name);

    let events = capture.events();
    let start_events: Vec<_> = events
        .iter()
        .filter(|e| e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_START))
        .collect();

    assert!(
        !start_events.is_empty(),
        "Should have captured at least one start event"
    );
}

#[test]
fn test_log_op_end_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let events = capture.events();
    let end_events: Vec<_> = events
        .iter()
        .filter(|e| e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_END))
        .collect();

    assert_eq!(end_events.len(), 1, "Should have exactly one end event");
    assert_eq!(end_events[0].field(FIELD_DURATION_MS), Some("42"));
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = ReconError::MetadataNotString {
        field: "bootstrapMetadata".to_string(),
    };
    log_op_error!(op_name, err, duration_ms = 10);

    let events = capture.events();
    let error_events: Vec<_> = events
        .iter()
        .filter(|e| e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_END_ERROR))
        .collect();

    assert_eq!(error_events.len(), 1, "Should have exactly one error event");
    assert_eq!(error_events[0].level, Level::ERROR);
    assert_eq!(error_events[0].field(FIELD_ERR_CODE), Some("ERR_WRONG_TYPE"));
    assert_eq!(error_events[0].field(FIELD_ERR_KIND), Some("WrongType"));
    assert!(error_events[0].field(FIELD_ERR_MESSAGE).is_some());
}

#[test]
fn test_log_op_degraded_warns() {
    let capture = init_test_capture();
    let op_name = "test_log_op_degraded_unique_4";

    let err = ReconError::MetadataFieldNotFound {
        field: "bootstrapMetadata".to_string(),
    };
    log_op_degraded!(op_name, &err);

    let events = capture.events();
    let degraded: Vec<_> = events.iter().filter(|e| e.is(op_name, EVENT_END_DEGRADED)).collect();
    assert_eq!(degraded.len(), 1);
    assert_eq!(degraded[0].level, Level::WARN);
    assert_eq!(degraded[0].field(FIELD_ERR_CODE), Some("ERR_MISSING_FIELD"));
    assert_eq!(
        degraded[0].field(FIELD_ERR_MESSAGE),
        Some("bootstrapMetadata field not found")
    );
}

#[test]
fn test_reconcile_logs_start_and_end() {
    let capture = init_test_capture();
    let text = r#"{"userID":"logged_u1","bootstrapMetadata":"{\"user\":{\"userID\":\"logged_u1\",\"country\":\"NZ\"}}"}"#;
    let digest = input_digest(text);

    reconcile(text, &ReconcileConfig::default());

    let events = capture.events();
    let ours = for_digest(&events, &digest);
    assert_eq!(ours.iter().filter(|e| e.is("reconcile", EVENT_START)).count(), 1);

    let ends: Vec<_> = ours.iter().filter(|e| e.is("reconcile", EVENT_END)).collect();
    assert_eq!(ends.len(), 1);
    assert_eq!(ends[0].field(FIELD_DIFF_LEN), Some("1"));
    assert_eq!(ends[0].field(FIELD_ROWS_LEN), Some("1"));
    assert!(ends[0].field(FIELD_DURATION_MS).is_some());
}

#[test]
fn test_missing_metadata_is_a_warning_not_an_error() {
    let capture = init_test_capture();
    let text = r#"{"userID":"no_metadata_here"}"#;
    let digest = input_digest(text);

    let result = reconcile(text, &ReconcileConfig::default());
    assert!(result.bootstrap.error.is_some());

    let events = capture.events();
    let ours = for_digest(&events, &digest);
    let degraded: Vec<_> = ours
        .iter()
        .filter(|e| e.is("parse_metadata", EVENT_END_DEGRADED))
        .collect();
    assert_eq!(degraded.len(), 1);
    assert_eq!(degraded[0].level, Level::WARN);
    assert_eq!(degraded[0].field(FIELD_ERR_CODE), Some("ERR_MISSING_FIELD"));
    assert_eq!(degraded[0].field(FIELD_METADATA_FIELD), Some("bootstrapMetadata"));

    assert!(ours.iter().all(|e| e.level != Level::ERROR));
    assert_eq!(ours.iter().filter(|e| e.is("reconcile", EVENT_END)).count(), 1);
}

#[test]
fn test_invalid_json_ends_with_error() {
    let capture = init_test_capture();
    let text = "{\"userID\": logged_broken";
    let digest = input_digest(text);

    reconcile(text, &ReconcileConfig::default());

    let events = capture.events();
    let ours = for_digest(&events, &digest);
    let errors: Vec<_> = ours
        .iter()
        .filter(|e| e.is("reconcile", EVENT_END_ERROR))
        .collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].level, Level::ERROR);
    assert_eq!(errors[0].field(FIELD_ERR_CODE), Some("ERR_INVALID_PAYLOAD"));
}

#[test]
fn test_reconciler_logs_cache_hit() {
    let capture = init_test_capture();
    let mut reconciler = Reconciler::new(ReconcileConfig::default());
    let text = r#"{"userID":"cache_hit_u1"}"#;
    let digest = input_digest(text);

    reconciler.run(text);
    reconciler.run(text);

    let hits = capture.count_events(|e| {
        e.event.as_deref() == Some(EVENT_CACHE_HIT) && e.field(FIELD_INPUT_DIGEST) == Some(digest.as_str())
    });
    assert_eq!(hits, 1);
}
