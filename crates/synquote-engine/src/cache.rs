//! Memoized allocation front end.

use crate::allocation::{Allocation, allocate};
use crate::summary::{ResourceSummary, summarize};
use std::collections::HashMap;
use synquote_core::{Requirement, Result};
use synquote_topology::{TopologyResolver, normalize_requirement};
use tracing::trace;

/// Resolver plus memo cache for event-driven recomputation.
///
/// Front ends rerun the allocation on every field change, and most changes
/// (project name, notes, currency) do not touch the requirement at all. The
/// cache is keyed on the full normalized requirement, so unrelated state
/// churn costs a hash lookup instead of a recomputation. Single-threaded by
/// design; clone the engine per thread if ever needed.
#[derive(Debug)]
pub struct Engine {
    resolver: TopologyResolver,
    cache: HashMap<Requirement, Allocation>,
}

impl Engine {
    /// Create an engine with a freshly validated topology matrix.
    ///
    /// # Errors
    /// Returns `Error::TopologyMatrix` if the built-in matrix fails
    /// validation.
    pub fn new() -> Result<Self> {
        Ok(Self::with_resolver(TopologyResolver::new()?))
    }

    /// Create an engine around an existing resolver.
    #[must_use]
    pub fn with_resolver(resolver: TopologyResolver) -> Self {
        Self {
            resolver,
            cache: HashMap::new(),
        }
    }

    /// The underlying topology resolver.
    #[must_use]
    pub fn resolver(&self) -> &TopologyResolver {
        &self.resolver
    }

    /// Allocate devices for a requirement, normalizing it first.
    ///
    /// Identical requirements hit the memo cache; the result is always
    /// equal to a fresh [`allocate`] call.
    pub fn allocate(&mut self, req: &Requirement) -> Allocation {
        let req = normalize_requirement(req.clone());
        if let Some(hit) = self.cache.get(&req) {
            trace!("allocation cache hit");
            return hit.clone();
        }
        let eligible = self.resolver.resolve(req.protocol, req.deployment, req.comms);
        let allocation = allocate(eligible, &req);
        self.cache.insert(req, allocation.clone());
        allocation
    }

    /// Allocate and summarize in one step.
    pub fn allocate_with_summary(&mut self, req: &Requirement) -> (Allocation, ResourceSummary) {
        let normalized = normalize_requirement(req.clone());
        let allocation = self.allocate(&normalized);
        let eligible = self
            .resolver
            .resolve(normalized.protocol, normalized.deployment, normalized.comms);
        let summary = summarize(eligible, &allocation, &normalized);
        (allocation, summary)
    }

    /// Number of memoized requirements.
    #[must_use]
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    /// Drop all memoized results (e.g. after a catalog or matrix reload).
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}
