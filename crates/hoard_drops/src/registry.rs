//! # Drop Registry
//!
//! Maps each source type (an outcrop kind, a creature species) to an
//! insertion-ordered table of candidate drops, unique by resource.
//!
//! ## Invariants
//!
//! 1. **Unique by resource**: registering an entry for a resource already
//!    present under a source type updates it in place, never duplicates it.
//! 2. **Registration order is trial order**: tables keep first-insertion
//!    order no matter how often entries are later updated.
//!
//! Both invariants hold as long as [`DropRegistry::upsert`] and
//! [`DropRegistry::try_add`] are the only mutation paths. A bulk merge
//! arriving from outside those paths can be cleaned up with
//! [`DropRegistry::repair_duplicates`].

use crate::entry::DropEntry;
use hoard_core::SourceTypeId;
use std::collections::HashMap;

/// Per source-type candidate drop tables.
#[derive(Debug, Default)]
pub struct DropRegistry {
    /// Tables indexed by source type; each `Vec` keeps registration order.
    tables: HashMap<SourceTypeId, Vec<DropEntry>>,
}

impl DropRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `entry` under `source_type`, overwriting chance, quantity
    /// and exclusivity if the resource is already present.
    ///
    /// Returns the stored entry. The table for `source_type` is created on
    /// first registration; an updated entry keeps its original position.
    pub fn upsert(&mut self, source_type: SourceTypeId, entry: DropEntry) -> DropEntry {
        let table = self.tables.entry(source_type).or_default();
        if let Some(existing) = table.iter_mut().find(|e| e.resource == entry.resource) {
            existing.chance = entry.chance;
            existing.quantity = entry.quantity;
            existing.exclusive = entry.exclusive;
            *existing
        } else {
            table.push(entry);
            entry
        }
    }

    /// Registers `entry` under `source_type` only if the resource is not
    /// already present.
    ///
    /// Returns `(created, stored)`: `created` is `false` and `stored` is the
    /// pre-existing entry when one was found. An existing configuration is
    /// never overwritten.
    pub fn try_add(&mut self, source_type: SourceTypeId, entry: DropEntry) -> (bool, DropEntry) {
        let table = self.tables.entry(source_type).or_default();
        if let Some(existing) = table.iter().find(|e| e.resource == entry.resource) {
            (false, *existing)
        } else {
            table.push(entry);
            (true, entry)
        }
    }

    /// Upserts a batch of `(source_type, entry)` pairs.
    pub fn upsert_many(&mut self, pairs: &[(SourceTypeId, DropEntry)]) {
        for (source_type, entry) in pairs {
            self.upsert(*source_type, *entry);
        }
    }

    /// Try-adds a batch of `(source_type, entry)` pairs.
    ///
    /// Returns how many entries were newly created.
    pub fn try_add_many(&mut self, pairs: &[(SourceTypeId, DropEntry)]) -> usize {
        pairs
            .iter()
            .filter(|(source_type, entry)| self.try_add(*source_type, *entry).0)
            .count()
    }

    /// Returns the candidate table for `source_type` in registration order.
    ///
    /// Empty when nothing was ever registered. The slice is a read-only
    /// view; mutation goes through [`DropRegistry::upsert`] and friends.
    #[must_use]
    pub fn entries_for(&self, source_type: SourceTypeId) -> &[DropEntry] {
        self.tables.get(&source_type).map_or(&[], Vec::as_slice)
    }

    /// Removes every entry under `source_type` satisfying `predicate`.
    ///
    /// Returns how many entries were removed. Used by hosts that strip a
    /// source's baseline drops before (or after) merging custom ones.
    pub fn remove_matching<F>(&mut self, source_type: SourceTypeId, mut predicate: F) -> usize
    where
        F: FnMut(&DropEntry) -> bool,
    {
        let Some(table) = self.tables.get_mut(&source_type) else {
            return 0;
        };
        let before = table.len();
        table.retain(|entry| !predicate(entry));
        before - table.len()
    }

    /// Drops the whole table for `source_type`.
    ///
    /// Returns `true` if a table existed.
    pub fn clear_source(&mut self, source_type: SourceTypeId) -> bool {
        self.tables.remove(&source_type).is_some()
    }

    /// Restores the unique-by-resource invariant after a bulk merge.
    ///
    /// For each resource appearing more than once under `source_type`, the
    /// most recently written entry wins; it keeps the earliest position so
    /// trial order is unchanged. Returns how many duplicates were dropped.
    pub fn repair_duplicates(&mut self, source_type: SourceTypeId) -> usize {
        let Some(table) = self.tables.get_mut(&source_type) else {
            return 0;
        };

        let mut repaired = 0;
        let mut index = 0;
        while index < table.len() {
            let resource = table[index].resource;
            let mut probe = index + 1;
            while probe < table.len() {
                if table[probe].resource == resource {
                    // Later write wins, earlier slot keeps the position.
                    table[index] = table.remove(probe);
                    repaired += 1;
                } else {
                    probe += 1;
                }
            }
            index += 1;
        }

        if repaired > 0 {
            tracing::warn!(
                source_type,
                repaired,
                "dropped duplicate entries while repairing a drop table"
            );
        }
        repaired
    }

    /// Iterates over every source type with a table, in no particular order.
    pub fn sources(&self) -> impl Iterator<Item = SourceTypeId> + '_ {
        self.tables.keys().copied()
    }

    /// Number of source types with a table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Returns `true` when no source type has a table.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
