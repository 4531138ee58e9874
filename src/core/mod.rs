//! Core types shared across the crate.
//!
//! Currently this is home to the crate-wide error type. Anything that more
//! than one pipeline stage needs without creating a dependency cycle lives
//! here.

mod error;

pub use error::TfgenError;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TfgenError>;
