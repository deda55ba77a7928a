//! Field keys and event names emitted by the reconciliation log events
//!
//! The `log_op_*!` macros write these keys as tracing field identifiers, so a
//! constant here must match the identifier spelled in the macro. Consumers
//! (the test capture, log processors) look fields up through these constants.

// Every op event
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Reconciliation context
pub const FIELD_INPUT_DIGEST: &str = "input_digest";
pub const FIELD_METADATA_FIELD: &str = "metadata_field";
pub const FIELD_DIFF_LEN: &str = "diff_len";
pub const FIELD_ROWS_LEN: &str = "rows_len";

// Error details
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";
pub const FIELD_ERR_MESSAGE: &str = "err_message";

// Event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
/// The operation failed and produced no result
pub const EVENT_END_ERROR: &str = "end_error";
/// The operation finished but part of its input was unusable
pub const EVENT_END_DEGRADED: &str = "end_degraded";
pub const EVENT_CACHE_HIT: &str = "cache_hit";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names_are_distinct() {
        let names = [
            EVENT_START,
            EVENT_END,
            EVENT_END_ERROR,
            EVENT_END_DEGRADED,
            EVENT_CACHE_HIT,
        ];
        for (i, a) in names.iter().enumerate() {
            for b in &names[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_field_keys_are_plain_identifiers() {
        let keys = [
            FIELD_COMPONENT,
            FIELD_OP,
            FIELD_EVENT,
            FIELD_DURATION_MS,
            FIELD_INPUT_DIGEST,
            FIELD_METADATA_FIELD,
            FIELD_DIFF_LEN,
            FIELD_ROWS_LEN,
            FIELD_ERR_KIND,
            FIELD_ERR_CODE,
            FIELD_ERR_MESSAGE,
        ];
        for key in keys {
            assert!(
                key.chars().all(|c| c.is_ascii_lowercase() || c == '_'),
                "{key} cannot be written as a tracing field name"
            );
        }
    }
}
