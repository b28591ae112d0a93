//! # Jetpack Config
//!
//! Type-safe style configuration for the Jetpack chart helpers.
//!
//! This crate provides configuration loading from YAML or TOML with
//! environment overrides, validation, atomic saving, and a lock-free cache
//! that lets a running program swap its style defaults.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cache;
pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validator;

pub use cache::*;
pub use defaults::*;
pub use loader::*;
pub use schema::*;
pub use validator::*;
