//! Name to generator mapping.

use std::collections::HashMap;
use std::sync::Arc;

use super::{ArithmeticCardGenerator, CardGenerator, RandomCardGenerator};

/// Registry of card generators, keyed by generator name.
///
/// Populated once at startup and shared immutably afterwards, so lookups
/// need no locking. Registering a second generator under an existing name
/// replaces the first.
pub struct GeneratorRegistry {
    generators: HashMap<&'static str, Arc<dyn CardGenerator>>,
}

impl GeneratorRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self {
            generators: HashMap::new(),
        }
    }

    /// Registry holding the four built-in generators.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(RandomCardGenerator));
        registry.register(Arc::new(ArithmeticCardGenerator::addition()));
        registry.register(Arc::new(ArithmeticCardGenerator::multiplication()));
        registry.register(Arc::new(ArithmeticCardGenerator::division()));
        registry
    }

    /// Register a generator under its own name.
    pub fn register(&mut self, generator: Arc<dyn CardGenerator>) {
        self.generators.insert(generator.name(), generator);
    }

    /// Resolve a generator by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn CardGenerator>> {
        self.generators.get(name).cloned()
    }

    /// Registered generator names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.generators.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl Default for GeneratorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
