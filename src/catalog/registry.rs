//! In-memory algorithm registry

use indexmap::IndexMap;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;

use super::descriptor::{normalize_name, AlgorithmDescriptor, ProblemType};
use crate::error::{Result, ScoutError};

/// Outcome of resolving a list of requested algorithm names
#[derive(Debug, Clone, Default)]
pub struct CandidateResolution {
    /// Descriptors found, in request order
    pub found: Vec<Arc<AlgorithmDescriptor>>,
    /// Requested names with no catalog entry
    pub missing: Vec<String>,
}

impl CandidateResolution {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Registry of algorithm descriptors keyed by case-insensitive name.
///
/// Entries keep their first registration position; re-registering a name
/// replaces the descriptor in place.
#[derive(Debug, Default)]
pub struct AlgorithmCatalog {
    entries: RwLock<IndexMap<String, Arc<AlgorithmDescriptor>>>,
}

impl AlgorithmCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a descriptor
    pub fn register(&self, descriptor: AlgorithmDescriptor) {
        let key = descriptor.key();
        debug!(algorithm = %descriptor.name, problem_type = %descriptor.problem_type, "Registering algorithm");
        self.entries.write().insert(key, Arc::new(descriptor));
    }

    /// Register several descriptors in order
    pub fn register_all<I>(&self, descriptors: I)
    where
        I: IntoIterator<Item = AlgorithmDescriptor>,
    {
        let mut entries = self.entries.write();
        for descriptor in descriptors {
            entries.insert(descriptor.key(), Arc::new(descriptor));
        }
    }

    /// Look up a descriptor by name, ignoring case
    pub fn get_by_name(&self, name: &str) -> Option<Arc<AlgorithmDescriptor>> {
        self.entries.read().get(&normalize_name(name)).cloned()
    }

    /// Look up a descriptor, failing with [`ScoutError::AlgorithmNotFound`]
    pub fn require(&self, name: &str) -> Result<Arc<AlgorithmDescriptor>> {
        self.get_by_name(name)
            .ok_or_else(|| ScoutError::AlgorithmNotFound(name.to_string()))
    }

    /// All descriptors for a problem type, in registration order
    pub fn get_by_type(&self, problem_type: ProblemType) -> Vec<Arc<AlgorithmDescriptor>> {
        self.entries
            .read()
            .values()
            .filter(|algo| algo.problem_type == problem_type)
            .cloned()
            .collect()
    }

    /// Every registered descriptor, in registration order
    pub fn get_all(&self) -> Vec<Arc<AlgorithmDescriptor>> {
        self.entries.read().values().cloned().collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.read().contains_key(&normalize_name(name))
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Resolve requested names, collecting misses instead of failing
    pub fn resolve_candidates<S: AsRef<str>>(&self, names: &[S]) -> CandidateResolution {
        let entries = self.entries.read();
        let mut resolution = CandidateResolution::default();
        for name in names {
            let name = name.as_ref();
            match entries.get(&normalize_name(name)) {
                Some(algo) => resolution.found.push(Arc::clone(algo)),
                None => resolution.missing.push(name.to_string()),
            }
        }
        resolution
    }

    /// Resolve requested names, failing on the first miss or an empty request
    pub fn resolve_all<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<Arc<AlgorithmDescriptor>>> {
        let resolution = self.resolve_candidates(names);
        if let Some(name) = resolution.missing.first() {
            return Err(ScoutError::AlgorithmNotFound(name.clone()));
        }
        if resolution.found.is_empty() {
            return Err(ScoutError::NoCandidates(
                "no valid algorithms to benchmark".to_string(),
            ));
        }
        Ok(resolution.found)
    }
}
