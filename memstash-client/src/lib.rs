//! Client for the hosted Mem0 memory-storage API
//!
//! This crate provides the `MemoryStore` abstraction and the HTTP-backed
//! `Mem0Client` implementation used by the memstash CLI.

pub mod base;
pub mod mem0;

pub use base::{ClientError, ClientResult, MemoryRecord, MemoryStore};
pub use mem0::{Mem0Client, DEFAULT_API_BASE};
