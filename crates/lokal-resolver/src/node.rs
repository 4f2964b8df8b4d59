use std::fmt;

/// A node in the lenient resolution forest of a probe configuration.
///
/// `children` is the transitive closure as resolved by the host. The same
/// module may be reachable via multiple paths (the forest is a DAG unrolled
/// per path); traversal is depth-first. `configuration` is the configuration
/// of the resolved module that satisfied the edge, e.g. `"default"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedNode {
    pub group: String,
    pub name: String,
    pub version: String,
    pub configuration: String,
    pub children: Vec<ResolvedNode>,
}

impl ResolvedNode {
    /// `group:name` identifier (without version), the coordinate key used to
    /// probe the project index.
    pub fn key(&self) -> String {
        format!("{}:{}", self.group, self.name)
    }
}

impl fmt::Display for ResolvedNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.name, self.version)
    }
}
