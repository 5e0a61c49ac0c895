//! Tracing/logging setup shared by stockroom binaries.

/// Tracing subscriber configuration (filter, output format).
pub mod tracing;

pub use self::tracing::{LOG_FORMAT_ENV, LogFormat};

/// Initialize process-wide tracing, with the format taken from
/// `STOCKROOM_LOG_FORMAT` (JSON unless set to `text`).
///
/// Safe to call multiple times; subsequent calls are no-ops.
pub fn init() {
    self::tracing::init(LogFormat::from_env());
}

/// Initialize process-wide tracing with an explicit format.
pub fn init_with(format: LogFormat) {
    self::tracing::init(format);
}
