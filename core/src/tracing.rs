//! Tracing utilities for DDL generation.
//!
//! Enable the `tracing` feature to emit events via the `tracing` crate.
//! These macros no-op when the feature is disabled, avoiding `#[cfg]` boilerplate
//! at every call site.

/// Emit a debug-level tracing event with a rendered statement.
///
/// ```ignore
/// trace_statement!("create", &sql);
/// ```
#[macro_export]
macro_rules! trace_statement {
    ($kind:literal, $sql:expr) => {
        #[cfg(feature = "tracing")]
        $crate::__tracing::debug!(kind = $kind, sql = %$sql, "tablewright.statement");
    };
}

/// Emit a trace-level event when an alter action is queued.
///
/// ```ignore
/// trace_action!(action.kind(), &clause);
/// ```
#[macro_export]
macro_rules! trace_action {
    ($action:expr, $clause:expr) => {
        #[cfg(feature = "tracing")]
        $crate::__tracing::trace!(action = $action, clause = %$clause, "tablewright.alter");
    };
}
