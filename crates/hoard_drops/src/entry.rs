//! # Drop Entries
//!
//! One candidate drop under a source type: what spawns, how likely, how
//! many, and whether choosing it ends the whole event.
//!
//! Entries are plain values. The registry owns the stored copies; callers
//! get copies back and mutate only through registry operations.

use hoard_core::{ResourceId, DEFAULT_DROP_CHANCE, DEFAULT_DROP_QUANTITY};
use serde::{Deserialize, Serialize};

/// A single candidate drop.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DropEntry {
    /// The resource to spawn when this entry is chosen.
    pub resource: ResourceId,
    /// Configured target probability per trial, in `[0, 1]`.
    pub chance: f32,
    /// How many copies to spawn when chosen. Never below 1.
    pub quantity: u32,
    /// If chosen, no further rolls of the same event are considered.
    pub exclusive: bool,
}

impl DropEntry {
    /// Creates an entry with quantity 1 and no exclusivity.
    ///
    /// Out-of-range chances are clamped to `[0, 1]` rather than rejected.
    #[must_use]
    pub fn new(resource: ResourceId, chance: f32) -> Self {
        Self {
            resource,
            chance: clamp_chance(chance),
            quantity: DEFAULT_DROP_QUANTITY,
            exclusive: false,
        }
    }

    /// Creates an entry at the recommended default chance.
    ///
    /// For registrations that do not care about tuning; see
    /// [`DEFAULT_DROP_CHANCE`].
    #[must_use]
    pub fn at_default_chance(resource: ResourceId) -> Self {
        Self::new(resource, DEFAULT_DROP_CHANCE)
    }

    /// Sets how many copies spawn when this entry is chosen.
    ///
    /// A quantity of 0 is lifted to 1: a chosen entry always spawns
    /// something.
    #[must_use]
    pub const fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = if quantity == 0 { 1 } else { quantity };
        self
    }

    /// Sets whether this entry preempts the remaining rolls of an event.
    #[must_use]
    pub const fn with_exclusive(mut self, exclusive: bool) -> Self {
        self.exclusive = exclusive;
        self
    }

    /// One-line structured rendering for diagnostics.
    ///
    /// The field set is fixed, so this replaces any need to walk fields
    /// reflectively when dumping a table.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "drop {{ resource: {}, chance: {:.3}, quantity: {}, exclusive: {} }}",
            self.resource, self.chance, self.quantity, self.exclusive
        )
    }
}

/// Clamps a configured chance into `[0, 1]`; non-finite values become 0.
pub(crate) fn clamp_chance(chance: f32) -> f32 {
    if chance.is_finite() {
        chance.clamp(0.0, 1.0)
    } else {
        0.0
    }
}
