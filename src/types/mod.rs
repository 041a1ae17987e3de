//! Public types shared across the crate

mod error;

pub use error::{ErrorCode, Result, SettingsError};
