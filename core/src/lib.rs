//! Shared building blocks for tablewright crates.
//!
//! - [`error`] - [`SchemaError`](error::SchemaError) and the crate-wide [`Result`](error::Result)
//! - [`tracing`] - logging macros that compile to nothing without the `tracing` feature

pub mod error;
pub mod tracing;

pub use error::{Result, SchemaError};

#[doc(hidden)]
#[cfg(feature = "tracing")]
pub use ::tracing as __tracing;
