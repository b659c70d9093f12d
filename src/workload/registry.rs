use std::sync::{Arc, OnceLock};

use crate::args::TestOptions;
use crate::error::{AppError, AppResult, ValidationError};

use super::PerfTest;
use super::builtins;

/// Creates one workload instance from the validated run configuration.
/// Called once per parallel slot.
pub type WorkloadFactory = fn(&TestOptions) -> AppResult<Arc<dyn PerfTest>>;

#[derive(Clone, Copy)]
pub struct WorkloadEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub factory: WorkloadFactory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkloadRegistryError {
    pub message: String,
}

/// Process-wide registry of runnable workloads, keyed by name.
///
/// Replaces directory scanning: every workload registers a named factory
/// at startup, before argument parsing, so the CLI can report the full
/// set of valid test names. Immutable once built.
#[derive(Clone, Default)]
pub struct WorkloadRegistry {
    entries: Vec<WorkloadEntry>,
}

impl WorkloadRegistry {
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::default();
        for builtin in builtins::builtins() {
            if let Err(err) = registry.register(builtin) {
                tracing::warn!("Skipping duplicate builtin workload: {}", err.message);
            }
        }
        registry
    }

    /// Registers a workload entry.
    ///
    /// # Errors
    ///
    /// Returns an error when a workload with the same name is already
    /// registered.
    pub fn register(&mut self, entry: WorkloadEntry) -> Result<(), WorkloadRegistryError> {
        if self
            .entries
            .iter()
            .any(|existing| existing.name == entry.name)
        {
            return Err(WorkloadRegistryError {
                message: format!("Workload already registered: {}", entry.name),
            });
        }
        self.entries.push(entry);
        Ok(())
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&WorkloadEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// All registered test names, sorted for stable error output.
    #[must_use]
    pub fn names_sorted(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.entries.iter().map(|entry| entry.name).collect();
        names.sort_unstable();
        names
    }

    #[must_use]
    pub fn names_csv(&self) -> String {
        self.names_sorted().join(", ")
    }

    /// Resolves a test name or fails with the full sorted list of valid
    /// names.
    ///
    /// # Errors
    ///
    /// Returns `UnknownTest` naming every registered workload when `name`
    /// does not match.
    pub fn resolve(&self, name: &str) -> AppResult<&WorkloadEntry> {
        self.get(name).ok_or_else(|| {
            AppError::validation(ValidationError::UnknownTest {
                name: name.to_owned(),
                available: self.names_csv(),
            })
        })
    }
}

pub fn workload_registry() -> &'static WorkloadRegistry {
    static REGISTRY: OnceLock<WorkloadRegistry> = OnceLock::new();
    REGISTRY.get_or_init(WorkloadRegistry::with_builtins)
}
