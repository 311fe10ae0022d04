//! Error types for the detection engine.
//!
//! This module contains error types and the Result alias.

mod detect_error;

pub use detect_error::{DetectError, Result};
