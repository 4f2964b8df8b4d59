//! Shared utilities for Lokal.
//!
//! This crate provides the cross-cutting concerns used by all other Lokal
//! crates: the unified error type and the result alias.

pub mod errors;
