//! # Fairness Corrector
//!
//! **Keeps realized drop rates on the configured target.**
//!
//! A plain Bernoulli trial at 25% will happily go twenty rolls without a
//! hit, or land ten in a row. Players read both as broken. The corrector
//! keeps a signed drift value per resource and folds it into every trial:
//!
//! ```text
//! effective = clamp(chance + entropy, 0, 1)
//! hit  -> entropy -= 1 - chance     (cools a hot streak)
//! miss -> entropy += chance         (ends a drought)
//! ```
//!
//! The expected drift is zero exactly when the realized rate equals the
//! configured chance, so long-run frequency converges to the target. A
//! drought at chance `c` self-terminates after at most `ceil((1-c)/c)`
//! misses, because the effective chance reaches 1 by then.
//!
//! Entropy belongs to the RESOURCE, not to any one source type: every
//! trial for a resource moves the same state, no matter which table the
//! trial came from.

use crate::entry::clamp_chance;
use hoard_core::ResourceId;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;

/// Accumulated drift for one resource.
///
/// Starts neutral; every trial involving the resource moves it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EntropyState {
    /// Signed correction applied on top of the configured chance.
    entropy: f32,
}

impl EntropyState {
    /// Creates a neutral state.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { entropy: 0.0 }
    }

    /// Current drift value.
    #[inline]
    #[must_use]
    pub const fn value(&self) -> f32 {
        self.entropy
    }

    /// Trial probability after correction, clamped into `[0, 1]`.
    #[inline]
    #[must_use]
    pub fn effective_chance(&self, chance: f32) -> f32 {
        (chance + self.entropy).clamp(0.0, 1.0)
    }

    /// Folds one trial outcome into the drift.
    pub fn settle(&mut self, chance: f32, hit: bool) {
        if hit {
            self.entropy -= 1.0 - chance;
        } else {
            self.entropy += chance;
        }
    }
}

/// Per-resource fairness state plus the RNG driving trials.
///
/// One corrector per process; shared by every selection path so that
/// fairness stays a property of the resource.
#[derive(Debug)]
pub struct FairnessCorrector {
    /// Drift states, created lazily on first trial per resource.
    states: HashMap<ResourceId, EntropyState>,
    /// Deterministic RNG; seedable for reproducible tests.
    rng: ChaCha8Rng,
}

impl FairnessCorrector {
    /// Creates a corrector with a randomly seeded RNG.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::thread_rng().gen())
    }

    /// Creates a corrector with a fixed RNG seed.
    ///
    /// Same seed, same registrations, same trial sequence.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            states: HashMap::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Runs one trial for `resource` at the configured `chance`.
    ///
    /// Never fails: out-of-range chances are clamped into `[0, 1]`. The
    /// resource's entropy is updated whatever the outcome.
    pub fn check(&mut self, resource: ResourceId, chance: f32) -> bool {
        let chance = clamp_chance(chance);
        let roll: f32 = self.rng.gen();
        let state = self.states.entry(resource).or_default();
        let hit = roll < state.effective_chance(chance);
        state.settle(chance, hit);
        hit
    }

    /// Creates the entropy state for `resource` if it does not exist yet.
    ///
    /// Trials create state on demand; hosts that want the state visible as
    /// soon as a drop is registered call this at registration time.
    pub fn ensure_state(&mut self, resource: ResourceId) -> &EntropyState {
        self.states.entry(resource).or_default()
    }

    /// Current drift for `resource`; 0.0 when untracked. Read-only.
    #[must_use]
    pub fn peek_entropy(&self, resource: ResourceId) -> f32 {
        self.states
            .get(&resource)
            .map_or(0.0, EntropyState::value)
    }

    /// Number of resources with tracked entropy.
    #[must_use]
    pub fn tracked(&self) -> usize {
        self.states.len()
    }
}

impl Default for FairnessCorrector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guaranteed_chance_always_hits_and_stays_neutral() {
        let mut corrector = FairnessCorrector::with_seed(7);
        for _ in 0..100 {
            assert!(corrector.check(1, 1.0));
        }
        assert_eq!(corrector.peek_entropy(1), 0.0);
    }

    #[test]
    fn zero_chance_never_hits_and_stays_neutral() {
        let mut corrector = FairnessCorrector::with_seed(7);
        for _ in 0..100 {
            assert!(!corrector.check(1, 0.0));
        }
        assert_eq!(corrector.peek_entropy(1), 0.0);
    }

    #[test]
    fn out_of_range_chances_are_clamped() {
        let mut corrector = FairnessCorrector::with_seed(7);
        assert!(corrector.check(1, 25.0));
        assert!(!corrector.check(2, -4.0));
        assert!(!corrector.check(3, f32::NAN));
    }

    #[test]
    fn a_miss_raises_the_effective_chance() {
        let mut state = EntropyState::new();
        state.settle(0.25, false);
        assert!(state.value() > 0.0);
        assert!(state.effective_chance(0.25) > 0.25);
    }

    #[test]
    fn a_hit_lowers_the_effective_chance() {
        let mut state = EntropyState::new();
        state.settle(0.25, true);
        assert!(state.value() < 0.0);
        assert!(state.effective_chance(0.25) < 0.25);
    }

    #[test]
    fn same_seed_gives_same_trial_sequence() {
        let mut a = FairnessCorrector::with_seed(42);
        let mut b = FairnessCorrector::with_seed(42);
        let run_a: Vec<bool> = (0..256).map(|_| a.check(5, 0.3)).collect();
        let run_b: Vec<bool> = (0..256).map(|_| b.check(5, 0.3)).collect();
        assert_eq!(run_a, run_b);
    }

    #[test]
    fn ensure_state_tracks_without_running_a_trial() {
        let mut corrector = FairnessCorrector::with_seed(7);
        assert_eq!(corrector.tracked(), 0);
        assert_eq!(corrector.ensure_state(9).value(), 0.0);
        assert_eq!(corrector.tracked(), 1);
        assert_eq!(corrector.peek_entropy(9), 0.0);
    }
}
