//! # Registry Seeding
//!
//! One-time conversion of a source's built-in reward list into registry
//! entries. Seeding uses [`DropRegistry::try_add`], so a host can seed the
//! same source type every time an instance is first observed without ever
//! clobbering a custom configuration, and without growing the table.

use crate::entry::DropEntry;
use crate::registry::DropRegistry;
use hoard_core::{ResourceId, SourceTypeId};

/// One entry of a source's built-in reward list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NativeCandidate {
    /// The resource the source would drop natively.
    pub resource: ResourceId,
    /// The native per-trial chance.
    pub chance: f32,
}

impl NativeCandidate {
    /// Creates a native candidate.
    #[inline]
    #[must_use]
    pub const fn new(resource: ResourceId, chance: f32) -> Self {
        Self { resource, chance }
    }
}

/// Merges a source's native candidates into the registry.
///
/// Each candidate becomes a quantity-1, non-exclusive entry unless the
/// resource is already configured, in which case the existing entry wins.
/// Safe to call any number of times; returns how many entries were newly
/// created.
pub fn seed(
    registry: &mut DropRegistry,
    source_type: SourceTypeId,
    candidates: &[NativeCandidate],
) -> usize {
    candidates
        .iter()
        .filter(|candidate| {
            registry
                .try_add(source_type, DropEntry::new(candidate.resource, candidate.chance))
                .0
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    const NATIVE: [NativeCandidate; 2] = [
        NativeCandidate::new(10, 0.7),
        NativeCandidate::new(20, 0.2),
    ];

    #[test]
    fn seeding_twice_adds_nothing_new() {
        let mut registry = DropRegistry::new();
        assert_eq!(seed(&mut registry, 1, &NATIVE), 2);
        assert_eq!(seed(&mut registry, 1, &NATIVE), 0);
        assert_eq!(registry.entries_for(1).len(), 2);
    }

    #[test]
    fn seeding_never_overwrites_custom_configuration() {
        let mut registry = DropRegistry::new();
        registry.upsert(1, DropEntry::new(10, 0.05).with_quantity(3));

        seed(&mut registry, 1, &NATIVE);

        let stored = registry.entries_for(1);
        assert_eq!(stored[0].chance, 0.05);
        assert_eq!(stored[0].quantity, 3);
        // The second native candidate still lands.
        assert_eq!(stored[1].resource, 20);
    }

    #[test]
    fn seeded_entries_keep_native_order() {
        let mut registry = DropRegistry::new();
        seed(&mut registry, 1, &NATIVE);
        let order: Vec<_> = registry.entries_for(1).iter().map(|e| e.resource).collect();
        assert_eq!(order, vec![10, 20]);
    }
}
