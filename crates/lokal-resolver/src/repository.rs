use std::collections::HashMap;

/// Module metadata as published in a repository: coordinates, the
/// configuration under which the module's artifacts are consumed, and its
/// declared dependencies.
#[derive(Debug, Clone)]
pub struct ModuleDescriptor {
    pub group: String,
    pub name: String,
    pub version: String,
    pub configuration: String,
    pub dependencies: Vec<ModuleRef>,
}

/// A dependency edge declared by a published module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleRef {
    pub group: String,
    pub name: String,
    pub version: String,
}

impl ModuleDescriptor {
    pub fn new(group: &str, name: &str, version: &str) -> Self {
        Self {
            group: group.to_string(),
            name: name.to_string(),
            version: version.to_string(),
            configuration: "default".to_string(),
            dependencies: Vec::new(),
        }
    }

    pub fn with_configuration(mut self, configuration: &str) -> Self {
        self.configuration = configuration.to_string();
        self
    }

    pub fn depends_on(mut self, group: &str, name: &str, version: &str) -> Self {
        self.dependencies.push(ModuleRef {
            group: group.to_string(),
            name: name.to_string(),
            version: version.to_string(),
        });
        self
    }

    fn key(&self) -> String {
        format!("{}:{}:{}", self.group, self.name, self.version)
    }
}

/// An in-memory module repository keyed by exact `group:name:version`
/// coordinates.
#[derive(Debug, Clone, Default)]
pub struct Repository {
    modules: HashMap<String, ModuleDescriptor>,
}

impl Repository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, descriptor: ModuleDescriptor) {
        self.modules.insert(descriptor.key(), descriptor);
    }

    pub fn get(&self, group: &str, name: &str, version: &str) -> Option<&ModuleDescriptor> {
        self.modules.get(&format!("{group}:{name}:{version}"))
    }
}
