//! # Jetpack Common
//!
//! Shared types, errors, logging and utilities for the Jetpack chart styling
//! helpers.
//!
//! This crate provides the foundational types used across all other crates in
//! the Jetpack workspace.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;
pub mod types;
pub mod utils;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::*;
pub use logging::*;
pub use types::*;
pub use utils::*;
