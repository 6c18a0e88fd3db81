//! Elimination tracing.
//!
//! Set `COMPLEX_SOLVER_TRACE=1` to log pivot selection, row/column swaps and
//! the solvability verdict to stderr. Only compiled into debug builds.

#[cfg(debug_assertions)]
use std::sync::OnceLock;

use crate::config::TRACE_ENV;

/// Check if tracing is enabled via `COMPLEX_SOLVER_TRACE`.
#[cfg(debug_assertions)]
pub(crate) fn trace_enabled() -> bool {
    static ENABLED: OnceLock<bool> = OnceLock::new();
    *ENABLED.get_or_init(|| std::env::var_os(TRACE_ENV).is_some())
}

#[cfg(not(debug_assertions))]
pub(crate) fn trace_enabled() -> bool {
    let _ = TRACE_ENV;
    false
}

/// Emit a trace line without relying on `eprintln!`.
pub(crate) fn trace_log(args: std::fmt::Arguments<'_>) {
    if trace_enabled() {
        use std::io::Write;
        let _ = writeln!(std::io::stderr(), "[csolve] {args}");
    }
}

macro_rules! trace {
    ($($arg:tt)*) => {
        $crate::trace::trace_log(format_args!($($arg)*))
    };
}

pub(crate) use trace;
