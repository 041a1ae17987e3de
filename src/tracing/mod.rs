//! Tracing helpers for settings errors

mod error_ext;

pub use error_ext::{ErrorTraceExt, ResultTraceExt};
