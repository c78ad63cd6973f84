//! # Selection Engine
//!
//! Turns one gameplay event into the list of drops the host must spawn.
//!
//! ## The resolution pipeline
//!
//! ```text
//! host event ──> resolve(source_type, opportunities, fallback)
//!                    │
//!                    ├─ empty table ──────────────> [fallback x1]
//!                    │
//!                    └─ per opportunity:
//!                         scan entries in registration order,
//!                         first corrected-trial success wins the roll;
//!                         an exclusive winner cancels the remaining rolls
//!                    │
//!                    └─ nothing chosen at all ────> [fallback x1]
//! ```
//!
//! ## Locking
//!
//! The registry and the corrector each sit behind one coarse lock
//! (`parking_lot`), shared by every event resolution in the process. The
//! engine never holds both at once: entries are copied out of the registry
//! before any trial runs, so concurrent hosts cannot deadlock it.

use crate::entropy::FairnessCorrector;
use crate::registry::DropRegistry;
use crate::seeding::{self, NativeCandidate};
use hoard_core::{ResolvedDrop, ResourceId, RewardTrigger, SourceTypeId};
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;

/// The per-process drop resolution engine.
///
/// Owns shared handles to the registry and the fairness corrector; clones
/// of those handles can be given to the configuration loader or host
/// bridges, which see every mutation immediately.
pub struct SelectionEngine {
    /// Shared drop tables. Reads dominate, so a `RwLock`.
    registry: Arc<RwLock<DropRegistry>>,
    /// Shared per-resource fairness state. Every trial writes, so a `Mutex`.
    corrector: Arc<Mutex<FairnessCorrector>>,
}

impl SelectionEngine {
    /// Creates an engine over existing shared parts.
    #[must_use]
    pub fn new(
        registry: Arc<RwLock<DropRegistry>>,
        corrector: Arc<Mutex<FairnessCorrector>>,
    ) -> Self {
        Self {
            registry,
            corrector,
        }
    }

    /// Creates an engine with an empty registry and a fresh corrector.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(
            Arc::new(RwLock::new(DropRegistry::new())),
            Arc::new(Mutex::new(FairnessCorrector::new())),
        )
    }

    /// Shared handle to the registry.
    #[must_use]
    pub fn registry(&self) -> &Arc<RwLock<DropRegistry>> {
        &self.registry
    }

    /// Shared handle to the fairness corrector.
    #[must_use]
    pub fn corrector(&self) -> &Arc<Mutex<FairnessCorrector>> {
        &self.corrector
    }

    /// Resolves one event granting `opportunities` independent rolls.
    ///
    /// Callers always get something spawnable back: a source type with no
    /// table, or an event where every roll misses, yields one quantity-1
    /// `fallback` drop. Duplicate resources chosen across rolls accumulate
    /// as separate records; merging quantities is the host's choice.
    #[must_use]
    pub fn resolve(
        &self,
        source_type: SourceTypeId,
        opportunities: u32,
        fallback: ResourceId,
    ) -> Vec<ResolvedDrop> {
        // Copy the table out so no registry lock is held during trials.
        let entries = self.registry.read().entries_for(source_type).to_vec();
        if entries.is_empty() {
            return vec![ResolvedDrop::fallback(fallback)];
        }

        let mut chosen = Vec::new();
        let mut corrector = self.corrector.lock();
        'rolls: for _ in 0..opportunities {
            for entry in &entries {
                if corrector.check(entry.resource, entry.chance) {
                    tracing::debug!(source_type, "chose {}", entry.summary());
                    chosen.push(ResolvedDrop::new(entry.resource, entry.quantity));
                    if entry.exclusive {
                        // An exclusive winner preempts every remaining roll.
                        break 'rolls;
                    }
                    // First success wins this roll; later entries wait for
                    // the next one.
                    break;
                }
            }
        }
        drop(corrector);

        if chosen.is_empty() {
            tracing::debug!(source_type, fallback, "no roll succeeded, using fallback");
            chosen.push(ResolvedDrop::fallback(fallback));
        }
        chosen
    }

    /// Resolves a trigger handed over by the host's event source.
    #[must_use]
    pub fn resolve_event(&self, trigger: &RewardTrigger) -> Vec<ResolvedDrop> {
        self.resolve(trigger.source_type, trigger.opportunities, trigger.fallback)
    }

    /// Seeds a source's native candidate list on first observation.
    ///
    /// Custom configuration always wins over native data; entropy state is
    /// created for every candidate so diagnostics see the resource at once.
    /// Returns how many entries were newly created.
    pub fn seed_native(
        &self,
        source_type: SourceTypeId,
        candidates: &[NativeCandidate],
    ) -> usize {
        let created = seeding::seed(&mut self.registry.write(), source_type, candidates);

        let mut corrector = self.corrector.lock();
        for candidate in candidates {
            corrector.ensure_state(candidate.resource);
        }
        created
    }
}
