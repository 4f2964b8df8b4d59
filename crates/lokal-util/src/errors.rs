use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all Lokal operations.
///
/// Only fatal conditions become variants here. Recoverable conditions
/// (missing target configurations during a splice, unresolvable probe
/// dependencies) are absorbed at the call site and never surface.
#[derive(Debug, Error, Diagnostic)]
pub enum LokalError {
    /// A dynamic-dependency declaration names a configuration that does not
    /// exist on the declaring project.
    #[error("Configuration '{configuration}' not found on project '{project}'")]
    #[diagnostic(help("Dynamic dependencies must be declared against an existing configuration"))]
    ConfigurationNotFound {
        project: String,
        configuration: String,
    },

    /// A project in the tree has no group coordinate; the model exporter
    /// cannot produce a coordinate-addressable snapshot without one.
    #[error("Group is not specified for project in {project_dir}")]
    #[diagnostic(help("Set a non-empty group on every project in the build"))]
    MissingGroup { project_dir: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type LokalResult<T> = miette::Result<T>;
