// Logging shim: forwards to `tracing` when the feature is enabled. Without it
// the arguments are still type-checked but nothing is emitted.

#[cfg(feature = "tracing")]
macro_rules! warn {
  ($($arg:tt)*) => {
    tracing::warn!($($arg)*)
  };
}

#[cfg(feature = "tracing")]
macro_rules! debug {
  ($($arg:tt)*) => {
    tracing::debug!($($arg)*)
  };
}

#[cfg(feature = "tracing")]
macro_rules! trace {
  ($($arg:tt)*) => {
    tracing::trace!($($arg)*)
  };
}

#[cfg(not(feature = "tracing"))]
macro_rules! warn {
  ($($arg:tt)*) => {
    if false {
      let _ = format_args!($($arg)*);
    }
  };
}

#[cfg(not(feature = "tracing"))]
macro_rules! debug {
  ($($arg:tt)*) => {
    if false {
      let _ = format_args!($($arg)*);
    }
  };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace {
  ($($arg:tt)*) => {
    if false {
      let _ = format_args!($($arg)*);
    }
  };
}
