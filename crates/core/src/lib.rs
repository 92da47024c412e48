//! Domain types and pure logic for the Haven rental search service.
//!
//! This crate has no I/O: it holds the error taxonomy, shared type aliases,
//! the room domain vocabulary, and the filter-to-query translation layer used
//! by the repository and HTTP crates.

pub mod error;
pub mod room;
pub mod room_query;
pub mod types;
