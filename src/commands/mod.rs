//! Command handlers

pub mod demo;

pub use demo::run_demo;
