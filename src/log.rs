//! Logging through the `log` facade when the `log` feature is enabled.
//!
//! Without the feature the macros accept the same arguments and expand to nothing.
#[cfg(feature = "log")]
pub(crate) use ::log::{debug, trace};

#[cfg(not(feature = "log"))]
macro_rules! __debug {
    ($($arg:tt)+) => {};
}

#[cfg(not(feature = "log"))]
macro_rules! __trace {
    ($($arg:tt)+) => {};
}

#[cfg(not(feature = "log"))]
pub(crate) use __debug as debug;
#[cfg(not(feature = "log"))]
pub(crate) use __trace as trace;
