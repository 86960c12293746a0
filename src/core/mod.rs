//! Core types shared across the crate: error handling.

pub mod error;

pub use error::{Error, Result};
