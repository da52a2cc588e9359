//! Per-module log switches.
//!
//! Each macro forwards to the `log` macro of the same level, but only when the
//! module it is expanded in has `const ENABLE_LOGS: bool = true`. Turning a noisy
//! module off is then a one-line change that leaves the `RUST_LOG` filter alone.
//!
//! ```ignore
//! const ENABLE_LOGS: bool = false;
//! use crate::{log_debug, log_warn};
//!
//! log_warn!("estimate took {ms}ms"); // compiled out of the hot path
//! ```

#[doc(hidden)]
#[macro_export]
macro_rules! gated_log {
    ($level:ident, $($arg:tt)*) => {
        if ENABLE_LOGS {
            log::$level!($($arg)*);
        }
    };
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => { $crate::gated_log!(info, $($arg)*) };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => { $crate::gated_log!(warn, $($arg)*) };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => { $crate::gated_log!(error, $($arg)*) };
}

/// Per-frame messages; still subject to `RUST_LOG=debug`.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => { $crate::gated_log!(debug, $($arg)*) };
}

/// Set `REPSENSE_DEBUG=1` (or `true`) to log every tracked frame at info.
pub fn debug_mode() -> bool {
    std::env::var("REPSENSE_DEBUG")
        .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}
