//! Op-event macros
//!
//! Each reconciliation stage brackets its work with one `start` event and one
//! closing event. The closing event is `end` on success, `end_degraded` when
//! the payload was only partly usable (missing or malformed metadata), and
//! `end_error` when nothing could be produced. Field names follow
//! `userrecon_core_types::schema`.

/// Emit the `start` event of an op at INFO.
///
/// ```
/// # use userrecon_core::log_op_start;
/// log_op_start!("reconcile");
/// log_op_start!("reconcile", input_digest = "ab12");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = userrecon_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = userrecon_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Emit the `end` event of an op at INFO. `duration_ms` is required.
///
/// ```
/// # use userrecon_core::log_op_end;
/// log_op_end!("reconcile", duration_ms = 3, rows_len = 2u64);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = userrecon_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = userrecon_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Emit `end_degraded` at WARN for a [`ReconError`](crate::errors::ReconError)
/// that is carried on the result instead of failing the op.
///
/// ```
/// # use userrecon_core::{log_op_degraded, errors::ReconError};
/// let err = ReconError::MetadataFieldNotFound { field: "bootstrapMetadata".to_string() };
/// log_op_degraded!("parse_metadata", &err, input_digest = "ab12");
/// ```
#[macro_export]
macro_rules! log_op_degraded {
    ($op:expr, $err:expr) => {
        $crate::log_op_degraded!($op, $err,)
    };
    ($op:expr, $err:expr, $($field:tt)*) => {{
        let err: &$crate::errors::ReconError = $err;
        let kind = err.kind();
        tracing::warn!(
            component = module_path!(),
            op = $op,
            event = userrecon_core_types::schema::EVENT_END_DEGRADED,
            err_kind = ?kind,
            err_code = kind.code(),
            err_message = %err,
            $($field)*
        );
    }};
}

/// Emit `end_error` at ERROR. `$err` is anything convertible into
/// [`ExError`](crate::errors::ExError).
///
/// ```
/// # use userrecon_core::{log_op_error, errors::ReconError};
/// let err = ReconError::InvalidPayload { message: "EOF".to_string() };
/// log_op_error!("reconcile", err, duration_ms = 0);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {
        $crate::log_op_error!($op, $err, duration_ms = $duration,)
    };
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = userrecon_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            err_message = %ex_err,
            $($field)*
        );
    }};
}
