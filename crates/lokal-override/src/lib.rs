//! The transitive override engine.
//!
//! For every configuration with declared dynamic dependencies, the engine
//! resolves the non-local subset against the real repository through a
//! disposable probe configuration, walks the resulting transitive graph for
//! modules that are actually projects of the current build, and splices a
//! project-to-project dependency into the real configuration at the right
//! place. The spliced dependency carries the sentinel version, so the host's
//! conflict resolution prefers it over the external declaration it shadows;
//! the external declaration itself is never removed.

pub mod engine;

pub use engine::apply_overrides;
