//! Logging macros that forward to the `log` crate when the `logging` feature is enabled.
//!
//! Without the feature, the arguments are still borrowed so that values which are only
//! computed for logging purposes do not trigger unused warnings.

macro_rules! forward_log {
    ($level:ident, $fmt:literal $(, $($arg:expr),* $(,)?)?) => {
        #[cfg(feature = "logging")]
        ::log::$level!(target: "avc_cabac", $fmt $(, $($arg),*)?);
        #[cfg(not(feature = "logging"))]
        { $($(let _ = &$arg;)*)? }
    };
}

/// Per-element and per-slice events.
macro_rules! ldebug {
    ($($tt:tt)*) => {
        forward_log!(debug, $($tt)*)
    };
}

/// Per-bin events.
macro_rules! ltrace {
    ($($tt:tt)*) => {
        forward_log!(trace, $($tt)*)
    };
}

/// Decoding failures, at the point where they are raised.
macro_rules! lwarn {
    ($($tt:tt)*) => {
        forward_log!(warn, $($tt)*)
    };
}
