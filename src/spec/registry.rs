use super::types::ResourceSpec;
use std::collections::HashMap;
use tracing::{error, warn};

/// Pluggable provider of override specs.
///
/// Replaces implicit assembly scanning with explicit registration: hosting
/// code hands the registry a list of sources at startup, each of which
/// yields `(documented type name, spec)` pairs.
pub trait SpecSource {
    /// Identifier used in log lines when the source fails.
    fn name(&self) -> &str;

    fn specs(&self) -> anyhow::Result<Vec<(String, ResourceSpec)>>;
}

/// Lookup from documented type name to its [`ResourceSpec`].
///
/// Built once at startup and read-only afterwards, so it can be shared
/// across concurrently running generation passes without locking. A type
/// with no registered spec is simply absent: lookups return `None`, never
/// an error.
#[derive(Debug, Default)]
pub struct SpecRegistry {
    specs: HashMap<String, ResourceSpec>,
}

impl SpecRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a spec for a documented type. Registering the same type a
    /// second time keeps the first spec and logs a warning.
    pub fn register(&mut self, type_name: impl Into<String>, spec: ResourceSpec) {
        let type_name = type_name.into();
        if self.specs.contains_key(&type_name) {
            warn!(%type_name, "duplicate spec registration ignored, keeping first");
            return;
        }
        self.specs.insert(type_name, spec);
    }

    /// Build a registry from a set of sources.
    ///
    /// If any source fails, the failure is logged and an **empty** registry
    /// is returned: callers degrade to "no overrides found" rather than
    /// crashing the whole generation pass.
    pub fn from_sources(sources: &[Box<dyn SpecSource>]) -> Self {
        let mut registry = SpecRegistry::new();
        for source in sources {
            match source.specs() {
                Ok(entries) => {
                    for (type_name, spec) in entries {
                        registry.register(type_name, spec);
                    }
                }
                Err(err) => {
                    error!(source = source.name(), %err, "spec source failed, continuing without overrides");
                    return SpecRegistry::new();
                }
            }
        }
        registry
    }

    pub fn get(&self, type_name: &str) -> Option<&ResourceSpec> {
        self.specs.get(type_name)
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}
