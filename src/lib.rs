//! addmul - add/multiply demo library
//!
//! This library provides the core functionality for the addmul demo:
//! parse two integers and two flags, add or multiply, print the result.
//!
//! # Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`commands`]: Command handlers
//! - [`domain`]: Domain models
//! - [`error`]: Error types

pub mod cli;
pub mod commands;
pub mod domain;
pub mod error;

pub use error::{AppError, Result};
