//! # Drop Tuning Constants
//!
//! Defaults applied when a registration does not specify a value.
//!
//! **CRITICAL:** Hosts bake these into their registration calls.
//! Changes shift the balance of every table that relies on the defaults.

/// Default per-trial drop chance for registrations that omit one.
///
/// Recommended ceiling for custom drops is 0.5; anything higher starves
/// the entries registered after it.
pub const DEFAULT_DROP_CHANCE: f32 = 0.25;

/// Default number of copies spawned when an entry is chosen.
pub const DEFAULT_DROP_QUANTITY: u32 = 1;
