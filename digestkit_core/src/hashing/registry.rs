//! Central registry for hash algorithm implementations

use super::traits::HashAlgorithmImpl;
use once_cell::sync::OnceCell;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Lookup table from algorithm id to implementation
pub struct AlgorithmRegistry {
    algorithms: BTreeMap<&'static str, Arc<dyn HashAlgorithmImpl>>,
}

impl AlgorithmRegistry {
    /// Create a new empty registry
    fn new() -> Self {
        Self {
            algorithms: BTreeMap::new(),
        }
    }

    /// Get the global registry instance
    pub fn global() -> &'static Self {
        static INSTANCE: OnceCell<AlgorithmRegistry> = OnceCell::new();
        INSTANCE.get_or_init(|| {
            let mut registry = Self::new();
            super::algorithms::register_all(&mut registry);
            registry
        })
    }

    /// Register a new algorithm, replacing any entry with the same id
    pub(crate) fn register(&mut self, algorithm: impl HashAlgorithmImpl + 'static) {
        self.algorithms.insert(algorithm.id(), Arc::new(algorithm));
    }

    /// Get algorithm by ID (case-insensitive)
    pub fn get(&self, id: &str) -> Option<Arc<dyn HashAlgorithmImpl>> {
        self.algorithms
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(id))
            .map(|(_, algorithm)| Arc::clone(algorithm))
    }

    /// List all registered algorithm ids, sorted
    pub fn list(&self) -> Vec<&'static str> {
        self.algorithms.keys().copied().collect()
    }
}
