// Thin wrappers over `tracing` so call sites stay free of `cfg` noise.
// Without `with-tracing` they expand to nothing.

#[cfg(feature = "with-tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { ::tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "with-tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "with-tracing")]
macro_rules! trace_warn {
    ($($arg:tt)*) => { ::tracing::warn!($($arg)*) };
}

#[cfg(not(feature = "with-tracing"))]
macro_rules! trace_warn {
    ($($arg:tt)*) => {};
}
