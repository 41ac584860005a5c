//! Shared primitives and traits for the msaq alignment-quality crates.
//!
//! `msaq-core` provides the foundation the scoring crate builds on:
//!
//! - **Error types**: [`MsaqError`] and [`Result`] for structured error handling
//! - **Traits**: Core abstractions like [`Sequence`], [`Scored`], [`Summarizable`]

pub mod error;
pub mod traits;

pub use error::{MsaqError, Result};
pub use traits::*;
