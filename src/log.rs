//! Logging for the placement passes.
//!
//! Passes log through `crate::log::{debug, warn}`. With the `tracing` feature
//! these are the `tracing` macros. Without it they swallow their arguments,
//! so field expressions are never evaluated and nothing leaks into the
//! public macro namespace.

#[cfg(feature = "tracing")]
pub(crate) use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub(crate) use {log_debug as debug, log_warn as warn};

#[cfg(test)]
mod tests {
    #[test]
    fn macros_accept_structured_fields() {
        super::debug!(rule = "both_ends", placed = 2usize, "placed modifiers");
        super::warn!(rule = "sector", error = %"bad AM", "modifier placement failed");
    }
}
