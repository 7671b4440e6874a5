//! Canonical logging macros
//!
//! Public engine operations own their boundary: one `start` event on entry and
//! exactly one of `end` / `end_error` on exit. Inner helpers use plain
//! `tracing::debug!`.

/// Log the start of an operation
///
/// ```
/// # use collex_core::log_op_start;
/// log_op_start!("contains_keys");
/// log_op_start!("contains_keys", expected_len = 2usize);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = collex_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = collex_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// ```
/// # use collex_core::log_op_end;
/// log_op_end!("contains_keys", duration_ms = 0u64);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = collex_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = collex_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation failure
///
/// `$err` is anything convertible into [`ExError`](crate::errors::ExError),
/// including a reference to a `ContainmentError`.
///
/// ```
/// # use collex_core::log_op_error;
/// # use collex_core::errors::PreconditionError;
/// let err = PreconditionError::ActualIsNull;
/// log_op_error!("contains", &err, duration_ms = 0u64);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        let ex_err = $crate::errors::ExError::from($err).with_op($op);
        tracing::warn!(
            component = module_path!(),
            op = $op,
            event = collex_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code(),
            message = ex_err.message(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let ex_err = $crate::errors::ExError::from($err).with_op($op);
        tracing::warn!(
            component = module_path!(),
            op = $op,
            event = collex_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code(),
            message = ex_err.message(),
            $($field)*
        );
    }};
}
