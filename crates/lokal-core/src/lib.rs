//! Core data types for the Lokal override tool.
//!
//! This crate defines the fundamental types that represent a multi-project
//! build as seen by Lokal: the project tree and its evaluation lifecycle,
//! named dependency configurations, external and project-to-project
//! dependencies, the per-project dynamic-dependency extension, and the
//! coordinate index that answers "is this artifact actually a local project?"
//!
//! This crate is intentionally free of resolution logic and I/O.

pub mod build;
pub mod configuration;
pub mod dependency;
pub mod dynamic;
pub mod index;
pub mod project;
