//! Project model export for external tooling.
//!
//! Walks the static project tree root-to-leaves and produces an immutable,
//! serializable snapshot of every project: path, coordinates, declared
//! dynamic dependencies, children, and project directory. The snapshot is
//! handed to a tooling transport keyed by [`MODEL_NAME`](builder::MODEL_NAME);
//! the wire protocol itself is the transport's concern.

pub mod builder;
pub mod model;

pub use builder::{build_model, can_build, MODEL_NAME};
pub use model::ProjectModel;
