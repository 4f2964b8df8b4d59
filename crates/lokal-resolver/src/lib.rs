//! The dependency-resolution boundary between Lokal and its build host.
//!
//! Lokal does not resolve versions or conflicts itself; it hands a probe
//! configuration to a [`Resolver`](resolver::Resolver) and gets back a forest
//! of [`ResolvedNode`](node::ResolvedNode)s — leniently, meaning whatever was
//! resolvable, with the rest silently omitted. The in-memory implementation
//! here serves embedders and tests; a real host plugs in its own engine.

pub mod node;
pub mod repository;
pub mod resolver;
