//! Internal logging macros.
//!
//! Statement construction logs under the `querykit.sql` target when the
//! `tracing` feature is enabled and compiles to nothing otherwise.

macro_rules! sql_debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!(target: "querykit.sql", $($arg)*);
    };
}

macro_rules! sql_trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!(target: "querykit.sql", $($arg)*);
    };
}
