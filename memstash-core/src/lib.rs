//! Core types for memstash
//!
//! This crate provides the configuration, error, and logging foundations
//! used by the memstash client and CLI.

pub mod config;
pub mod error;
pub mod logging;

pub use error::{Error, Result};
