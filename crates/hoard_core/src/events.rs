//! Shared reward-event types between the engine and its hosts.
//!
//! The HOST raises a [`RewardTrigger`] when something breaks or dies.
//! The ENGINE answers with [`ResolvedDrop`] records for the host to spawn.
//! Spawning itself (prefabs, physics, VFX) stays entirely host-side.

use crate::constants::DEFAULT_DROP_QUANTITY;
use crate::ids::{ResourceId, SourceTypeId};
use serde::{Deserialize, Serialize};

/// One triggering occurrence, as supplied by the host's event source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardTrigger {
    /// Category of the thing that triggered the event.
    pub source_type: SourceTypeId,
    /// How many independent reward rolls this occurrence grants.
    pub opportunities: u32,
    /// Resource spawned when no roll produces anything.
    pub fallback: ResourceId,
}

impl RewardTrigger {
    /// Creates a trigger granting `opportunities` rolls.
    #[inline]
    #[must_use]
    pub const fn new(
        source_type: SourceTypeId,
        opportunities: u32,
        fallback: ResourceId,
    ) -> Self {
        Self {
            source_type,
            opportunities,
            fallback,
        }
    }

    /// Creates a trigger granting a single roll.
    ///
    /// The common case for small breakables.
    #[inline]
    #[must_use]
    pub const fn single_roll(source_type: SourceTypeId, fallback: ResourceId) -> Self {
        Self::new(source_type, 1, fallback)
    }
}

/// One resolved drop, ready for the host to spawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedDrop {
    /// The resource to spawn.
    pub resource: ResourceId,
    /// How many copies to spawn.
    pub quantity: u32,
}

impl ResolvedDrop {
    /// Creates a resolved drop.
    #[inline]
    #[must_use]
    pub const fn new(resource: ResourceId, quantity: u32) -> Self {
        Self { resource, quantity }
    }

    /// Creates the fallback drop for an event that produced nothing.
    #[inline]
    #[must_use]
    pub const fn fallback(resource: ResourceId) -> Self {
        Self::new(resource, DEFAULT_DROP_QUANTITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_roll_grants_one_opportunity() {
        let trigger = RewardTrigger::single_roll(3, 7);
        assert_eq!(trigger.opportunities, 1);
        assert_eq!(trigger.source_type, 3);
        assert_eq!(trigger.fallback, 7);
    }

    #[test]
    fn fallback_drop_has_quantity_one() {
        assert_eq!(ResolvedDrop::fallback(9), ResolvedDrop::new(9, 1));
    }
}
